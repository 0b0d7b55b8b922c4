//! Geographic coordinates of a birth place.

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Latitude/longitude in degrees (north and east positive).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Build validated coordinates: lat in [-90, 90], lon in [-180, 180].
    pub fn new(lat: f64, lon: f64) -> Result<Self, GeoError> {
        let c = Self { lat, lon };
        c.validate()?;
        Ok(c)
    }

    pub fn validate(&self) -> Result<(), GeoError> {
        if (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon) {
            Ok(())
        } else {
            Err(GeoError::InvalidCoordinates {
                lat: self.lat,
                lon: self.lon,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Coordinates::new(90.1, 0.0),
            Err(GeoError::InvalidCoordinates { lat: 90.1, lon: 0.0 })
        );
        assert!(Coordinates::new(0.0, 181.0).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }
}
