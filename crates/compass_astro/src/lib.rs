//! Astronomical-to-symbolic core: where the Moon's nodes fall by sign and house.
//!
//! This crate provides:
//! - Zodiac sign lookup from ecliptic longitude
//! - Mean and true lunar node longitudes
//! - Ascendant/MC and Placidus house cusps (Porphyry above the polar circles)
//! - House lookup for a longitude against a cusp set
//! - [`compute_nodes`], which ties these together for a UTC instant and place

pub mod angles;
pub mod error;
pub mod house_types;
pub mod houses;
pub mod location;
pub mod lunar_nodes;
pub mod nodes;
pub mod util;
pub mod zodiac;

pub use angles::{ascendant_mc_ramc, ecliptic_longitude_of_ra};
pub use error::AstroError;
pub use house_types::{HouseCusps, HouseSystem, opposite_house};
pub use houses::{HouseFrame, HouseResult, compute_houses};
pub use location::GeoLocation;
pub use lunar_nodes::{
    NodeMode, mean_north_node_deg, north_node_deg, south_node_deg, true_north_node_deg,
};
pub use nodes::{NodeChart, NodePlacement, NodePosition, compute_nodes, compute_nodes_with_cusps};
pub use util::normalize_360;
pub use zodiac::{ALL_SIGNS, Dms, SignPosition, ZodiacSign, deg_to_dms, sign_from_longitude};
