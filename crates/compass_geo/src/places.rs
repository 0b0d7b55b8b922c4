//! Static place-name → coordinates table.
//!
//! File format (JSON object keyed by exact place name):
//!
//! ```json
//! { "Paris": { "lat": 48.8566, "lon": 2.3522 } }
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::coordinates::Coordinates;
use crate::error::GeoError;

/// Immutable place table with exact-match lookup.
///
/// No case folding or whitespace trimming: `"paris"` and `" Paris"` do not
/// match `"Paris"`.
#[derive(Debug, Clone)]
pub struct PlaceTable {
    entries: Result<HashMap<String, Coordinates>, String>,
}

impl PlaceTable {
    /// Load the table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GeoError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| GeoError::Io(format!("{}: {e}", path.display())))?;
        let table = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), places = table.len(), "place table loaded");
        Ok(table)
    }

    /// Parse the table from JSON text, validating every entry's range.
    pub fn from_json_str(json: &str) -> Result<Self, GeoError> {
        let entries: HashMap<String, Coordinates> = serde_json::from_str(json)?;
        for (name, c) in &entries {
            c.validate().map_err(|_| {
                GeoError::PlaceTableParse(format!(
                    "'{name}' has out-of-range coordinates ({}, {})",
                    c.lat, c.lon
                ))
            })?;
        }
        Ok(Self {
            entries: Ok(entries),
        })
    }

    /// A table that failed to load; every lookup reports `reason`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            entries: Err(reason.into()),
        }
    }

    /// Load from `path`, or fall back to an unavailable table.
    pub fn load_or_unavailable(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "place table not loaded");
            Self::unavailable(e.to_string())
        })
    }

    pub fn is_available(&self) -> bool {
        self.entries.is_ok()
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All place names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = match &self.entries {
            Ok(map) => map.keys().map(String::as_str).collect(),
            Err(_) => Vec::new(),
        };
        names.sort_unstable();
        names
    }

    /// Exact-match lookup.
    pub fn resolve(&self, place: &str) -> Result<Coordinates, GeoError> {
        let map = self
            .entries
            .as_ref()
            .map_err(|reason| GeoError::PlaceTableUnavailable(reason.clone()))?;
        map.get(place)
            .copied()
            .ok_or_else(|| GeoError::UnknownPlace(place.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "Paris": { "lat": 48.8566, "lon": 2.3522 },
        "Tokyo": { "lat": 35.6762, "lon": 139.6503 },
        "New York": { "lat": 40.7128, "lon": -74.006 }
    }"#;

    #[test]
    fn exact_match() {
        let table = PlaceTable::from_json_str(SAMPLE).unwrap();
        let c = table.resolve("Paris").unwrap();
        assert_eq!(c, Coordinates { lat: 48.8566, lon: 2.3522 });
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn no_normalization() {
        let table = PlaceTable::from_json_str(SAMPLE).unwrap();
        for q in ["paris", "PARIS", " Paris", "Paris ", "New  York"] {
            assert_eq!(
                table.resolve(q),
                Err(GeoError::UnknownPlace(q.to_string())),
                "{q:?}"
            );
        }
    }

    #[test]
    fn names_sorted() {
        let table = PlaceTable::from_json_str(SAMPLE).unwrap();
        assert_eq!(table.names(), vec!["New York", "Paris", "Tokyo"]);
    }

    #[test]
    fn unavailable_table_fails_every_lookup() {
        let table = PlaceTable::unavailable("places.json not found");
        assert!(!table.is_available());
        assert!(table.is_empty());
        assert!(table.names().is_empty());
        assert_eq!(
            table.resolve("Paris"),
            Err(GeoError::PlaceTableUnavailable("places.json not found".into()))
        );
    }

    #[test]
    fn rejects_out_of_range_entry() {
        let err = PlaceTable::from_json_str(r#"{ "Nowhere": { "lat": 100.0, "lon": 0.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, GeoError::PlaceTableParse(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        for text in [
            r#"{ "Paris": { "lat": "north", "lon": 2.3 } }"#,
            r#"{ "Paris": 5 }"#,
            r#"{ "Paris": { "lat": 48.8 } }"#,
            r#"{ "Paris": "#,
        ] {
            let err = PlaceTable::from_json_str(text).unwrap_err();
            assert!(matches!(err, GeoError::PlaceTableParse(_)), "{text}");
        }
    }

    #[test]
    fn accepts_lat_lon_pair() {
        let table = PlaceTable::from_json_str(r#"{ "Paris": [48.8, 2.3] }"#).unwrap();
        let c = table.resolve("Paris").unwrap();
        assert_eq!(c.lat, 48.8);
        assert_eq!(c.lon, 2.3);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let table = PlaceTable::load(file.path()).unwrap();
        assert!(table.resolve("Tokyo").is_ok());
    }

    #[test]
    fn missing_file_falls_back_to_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let table = PlaceTable::load_or_unavailable(dir.path().join("places.json"));
        assert!(!table.is_available());
        assert!(matches!(
            table.resolve("Paris"),
            Err(GeoError::PlaceTableUnavailable(_))
        ));
    }
}
