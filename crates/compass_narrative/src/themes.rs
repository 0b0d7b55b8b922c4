//! Axis and house theme tables.
//!
//! A theme file has the same shape as the built-in tables:
//!
//! ```json
//! {
//!   "axes":   { "Aries": { "south_title": "...", "south": "...", "north_title": "...",
//!                          "north": "...", "bridge": "...", "motto": "..." } },
//!   "houses": { "1": { "title": "...", "sn": "...", "nn": "...", "key": "..." } }
//! }
//! ```
//!
//! Either map may be partial; `motto` is optional.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::builtin::{AXES, HOUSES};
use crate::error::NarrativeError;

/// Theme for a node axis, keyed by the north node's sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTheme {
    pub south_title: String,
    pub south: String,
    pub north_title: String,
    pub north: String,
    pub bridge: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motto: Option<String>,
}

/// Theme for a house, read from either node's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseTheme {
    pub title: String,
    /// Meaning with the south node here.
    pub sn: String,
    /// Meaning with the north node here.
    pub nn: String,
    /// Short direction label.
    pub key: String,
}

/// Sign-keyed axis themes and house-keyed house themes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeTables {
    #[serde(default)]
    pub axes: BTreeMap<String, AxisTheme>,
    #[serde(default)]
    pub houses: BTreeMap<u8, HouseTheme>,
}

impl ThemeTables {
    /// The 12 axis and 12 house themes shipped with the crate.
    pub fn builtin() -> Self {
        let axes = AXES
            .iter()
            .map(|[sign, south_title, south, north_title, north, bridge, motto]| {
                let theme = AxisTheme {
                    south_title: (*south_title).to_string(),
                    south: (*south).to_string(),
                    north_title: (*north_title).to_string(),
                    north: (*north).to_string(),
                    bridge: (*bridge).to_string(),
                    motto: Some((*motto).to_string()),
                };
                ((*sign).to_string(), theme)
            })
            .collect();
        let houses = (1u8..)
            .zip(HOUSES.iter())
            .map(|(house, [title, sn, nn, key])| {
                let theme = HouseTheme {
                    title: (*title).to_string(),
                    sn: (*sn).to_string(),
                    nn: (*nn).to_string(),
                    key: (*key).to_string(),
                };
                (house, theme)
            })
            .collect();
        Self { axes, houses }
    }

    /// Parse tables from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, NarrativeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read tables from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NarrativeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| NarrativeError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&content)
    }

    /// Entries from `overrides` replace same-keyed entries in `self`.
    pub fn merged_with(mut self, overrides: ThemeTables) -> Self {
        self.axes.extend(overrides.axes);
        self.houses.extend(overrides.houses);
        self
    }

    pub fn axis(&self, north_sign: &str) -> Option<&AxisTheme> {
        self.axes.get(north_sign)
    }

    pub fn house(&self, house: u8) -> Option<&HouseTheme> {
        self.houses.get(&house)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_astro::ALL_SIGNS;
    use std::io::Write;

    #[test]
    fn builtin_is_complete() {
        let t = ThemeTables::builtin();
        for sign in ALL_SIGNS {
            let axis = t.axis(sign.name()).unwrap();
            assert!(axis.north_title.contains(sign.name()), "{sign}");
            assert!(axis.south_title.contains(sign.opposite().name()), "{sign}");
            assert!(axis.motto.is_some());
        }
        for house in 1..=12 {
            assert!(t.house(house).is_some(), "house {house}");
        }
        assert!(t.house(0).is_none());
        assert!(t.house(13).is_none());
    }

    #[test]
    fn partial_file_merges_over_builtin() {
        let json = r#"{
            "houses": { "10": { "title": "vocation", "sn": "a", "nn": "b", "key": "Rise" } }
        }"#;
        let t = ThemeTables::builtin().merged_with(ThemeTables::from_json_str(json).unwrap());
        assert_eq!(t.house(10).unwrap().title, "vocation");
        assert_eq!(t.house(4).unwrap().title, "home and roots");
        assert_eq!(t.axes.len(), 12);
    }

    #[test]
    fn motto_is_optional() {
        let json = r#"{ "axes": { "Leo": {
            "south_title": "s", "south": "s", "north_title": "n", "north": "n", "bridge": "b"
        } } }"#;
        let t = ThemeTables::from_json_str(json).unwrap();
        assert_eq!(t.axis("Leo").unwrap().motto, None);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let err = ThemeTables::from_json_str(r#"{ "houses": { "x": {} } }"#).unwrap_err();
        assert!(matches!(err, NarrativeError::ThemeTableParse(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&ThemeTables::builtin()).unwrap();
        file.write_all(json.as_bytes()).unwrap();
        assert_eq!(ThemeTables::load(file.path()).unwrap(), ThemeTables::builtin());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ThemeTables::load(dir.path().join("themes.json")).unwrap_err();
        assert!(matches!(err, NarrativeError::Io(_)));
    }
}
