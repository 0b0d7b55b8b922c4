//! Configuration file for the life compass.
//!
//! ```toml
//! [data]
//! places = "data/places.json"
//! themes = "data/themes.json"   # optional
//!
//! [astro]
//! node_mode = "mean"            # mean | true
//!
//! [logging]
//! filter = "info"
//! format = "compact"            # compact | json
//! ```
//!
//! Every field has a default, so an empty file is valid.

pub mod error;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Environment variable naming the config file for [`CompassConfig::discover`].
pub const CONFIG_ENV_VAR: &str = "LIFE_COMPASS_CONFIG";
/// File looked up in the working directory when the variable is unset.
pub const DEFAULT_CONFIG_FILE: &str = "compass.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompassConfig {
    pub data: DataConfig,
    pub astro: AstroConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Place table JSON.
    pub places: PathBuf,
    /// Theme overrides merged over the built-in tables.
    pub themes: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            places: PathBuf::from("data/places.json"),
            themes: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeModeSetting {
    #[default]
    Mean,
    True,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AstroConfig {
    pub node_mode: NodeModeSetting,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl CompassConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let mut config = Self::from_toml_str(&content)?;
        config.resolve_relative_to(path.parent().unwrap_or(Path::new("")));
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// `$LIFE_COMPASS_CONFIG`, else `./compass.toml`, else defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(PathBuf::from(path)),
            None => Self::discover_in(Path::new(".")),
        }
    }

    /// `compass.toml` in `dir` if present, else defaults.
    pub fn discover_in(dir: &Path) -> Result<Self, ConfigError> {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Relative data paths in a config file are relative to the file.
    fn resolve_relative_to(&mut self, base: &Path) {
        if self.data.places.is_relative() {
            self.data.places = base.join(&self.data.places);
        }
        if let Some(themes) = self.data.themes.as_mut() {
            if themes.is_relative() {
                *themes = base.join(&*themes);
            }
        }
    }
}
