//! Geographic observer location.

use crate::error::AstroError;

/// Observer position on the Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive, [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive, [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Reject non-finite or out-of-range coordinates.
    pub fn validate(&self) -> Result<(), AstroError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(AstroError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(AstroError::InvalidLocation("longitude must be within [-180, 180]"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_paris() {
        assert!(GeoLocation::new(48.8566, 2.3522).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(GeoLocation::new(91.0, 0.0).validate().is_err());
        assert!(GeoLocation::new(0.0, -180.5).validate().is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).validate().is_err());
    }

    #[test]
    fn radians() {
        let loc = GeoLocation::new(90.0, -180.0);
        assert!((loc.latitude_rad() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert!((loc.longitude_rad() + std::f64::consts::PI).abs() < 1e-15);
    }
}
