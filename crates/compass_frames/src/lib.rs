//! Earth-orientation quantities used by the house and node computations.
//!
//! - Delaunay fundamental arguments (the Moon's node is the fifth)
//! - Mean and true obliquity of the ecliptic
//! - Truncated IAU 2000B nutation and the equation of the equinoxes

pub mod arguments;
pub mod nutation;
pub mod obliquity;

pub use arguments::{ARCSEC_TO_RAD, fundamental_arguments};
pub use nutation::{equation_of_equinoxes_rad, nutation_arcsec};
pub use obliquity::{mean_obliquity_deg, true_obliquity_deg};
