//! Error types for place and timezone resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the coordinate and timezone resolvers.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeoError {
    /// The place name is not a key in the place table.
    UnknownPlace(String),
    /// The place table could not be loaded at startup.
    PlaceTableUnavailable(String),
    /// No timezone polygon contains the point.
    NoTimezone { lat: f64, lon: f64 },
    /// Latitude or longitude outside the valid range.
    InvalidCoordinates { lat: f64, lon: f64 },
    /// The place table file is not valid JSON of the expected shape.
    PlaceTableParse(String),
    /// Filesystem error reading the place table.
    Io(String),
}

impl Display for GeoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPlace(name) => write!(
                f,
                "unknown birth place '{name}': must match a place table key exactly"
            ),
            Self::PlaceTableUnavailable(msg) => write!(f, "place table unavailable: {msg}"),
            Self::NoTimezone { lat, lon } => {
                write!(f, "could not determine timezone for lat={lat}, lon={lon}")
            }
            Self::InvalidCoordinates { lat, lon } => {
                write!(f, "coordinates out of range: lat={lat}, lon={lon}")
            }
            Self::PlaceTableParse(msg) => write!(f, "place table parse error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for GeoError {}

impl From<std::io::Error> for GeoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for GeoError {
    fn from(e: serde_json::Error) -> Self {
        Self::PlaceTableParse(e.to_string())
    }
}
