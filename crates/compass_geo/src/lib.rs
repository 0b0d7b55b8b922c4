//! Birth-place resolution: place name → coordinates → IANA timezone.
//!
//! Both tables are built once at startup and shared by reference; neither
//! is mutated afterwards.

pub mod coordinates;
pub mod error;
pub mod places;
pub mod timezone;

pub use coordinates::Coordinates;
pub use error::GeoError;
pub use places::PlaceTable;
pub use timezone::{PolygonLookup, TimezoneResolver, ZoneLookup};
