//! Coordinates → IANA timezone name, by point-in-polygon lookup.

use tzf_rs::DefaultFinder;

use crate::coordinates::Coordinates;
use crate::error::GeoError;

/// Source of timezone names for a point.
pub trait ZoneLookup: Send + Sync {
    /// Zone containing the point, or `None` when no polygon matches.
    fn zone_at(&self, lat: f64, lon: f64) -> Option<String>;
}

/// Timezone boundary polygons bundled with `tzf-rs`.
pub struct PolygonLookup {
    finder: DefaultFinder,
}

impl PolygonLookup {
    pub fn new() -> Self {
        Self {
            finder: DefaultFinder::new(),
        }
    }
}

impl Default for PolygonLookup {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneLookup for PolygonLookup {
    fn zone_at(&self, lat: f64, lon: f64) -> Option<String> {
        let name = self.finder.get_tz_name(lon, lat);
        (!name.is_empty()).then(|| name.to_string())
    }
}

/// Resolves coordinates to a timezone name through a [`ZoneLookup`].
pub struct TimezoneResolver {
    lookup: Box<dyn ZoneLookup>,
}

impl std::fmt::Debug for TimezoneResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimezoneResolver").finish_non_exhaustive()
    }
}

impl TimezoneResolver {
    /// Resolver backed by the bundled polygon data. Building the finder
    /// decodes the whole dataset, so do it once per process.
    pub fn polygons() -> Self {
        Self::with_lookup(PolygonLookup::new())
    }

    pub fn with_lookup(lookup: impl ZoneLookup + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    /// Timezone name for a point.
    pub fn resolve(&self, lat: f64, lon: f64) -> Result<String, GeoError> {
        Coordinates { lat, lon }.validate()?;
        let zone = self
            .lookup
            .zone_at(lat, lon)
            .ok_or(GeoError::NoTimezone { lat, lon })?;
        tracing::debug!(lat, lon, zone = %zone, "timezone resolved");
        Ok(zone)
    }

    pub fn resolve_coordinates(&self, c: &Coordinates) -> Result<String, GeoError> {
        self.resolve(c.lat, c.lon)
    }
}
