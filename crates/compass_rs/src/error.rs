//! Unified error type for the pipeline.

use std::error::Error;
use std::fmt::{Display, Formatter};

use compass_astro::AstroError;
use compass_config::ConfigError;
use compass_geo::GeoError;
use compass_narrative::NarrativeError;
use compass_time::TimeError;

/// Abstract failure category, for mapping onto transport status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-range request fields.
    InvalidInput,
    /// Unknown place, or no timezone for its coordinates.
    NotFound,
    /// Resolved zone unknown to the tz database.
    InvalidTimezone,
    /// The house computation produced malformed output.
    Computation,
    UnsupportedSign,
    UnsupportedHouse,
    /// Config or data files could not be read or parsed.
    Configuration,
}

impl ErrorKind {
    /// Whether the caller can fix this by changing the request.
    pub const fn is_user_correctable(self) -> bool {
        matches!(self, Self::InvalidInput | Self::NotFound)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::NotFound => "not_found",
            Self::InvalidTimezone => "invalid_timezone",
            Self::Computation => "computation",
            Self::UnsupportedSign => "unsupported_sign",
            Self::UnsupportedHouse => "unsupported_house",
            Self::Configuration => "configuration",
        }
    }
}

/// Errors from any pipeline stage.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CompassError {
    /// Request validation failed.
    InvalidInput(String),
    Geo(GeoError),
    Time(TimeError),
    Astro(AstroError),
    Narrative(NarrativeError),
    Config(ConfigError),
}

impl CompassError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Geo(
                GeoError::UnknownPlace(_)
                | GeoError::PlaceTableUnavailable(_)
                | GeoError::NoTimezone { .. }
                | GeoError::InvalidCoordinates { .. },
            ) => ErrorKind::NotFound,
            Self::Geo(_) => ErrorKind::Configuration,
            Self::Time(TimeError::InvalidTimezone(_)) => ErrorKind::InvalidTimezone,
            Self::Time(_) => ErrorKind::InvalidInput,
            Self::Astro(_) => ErrorKind::Computation,
            Self::Narrative(NarrativeError::UnsupportedSign(_)) => ErrorKind::UnsupportedSign,
            Self::Narrative(NarrativeError::UnsupportedHouse { .. }) => {
                ErrorKind::UnsupportedHouse
            }
            Self::Narrative(_) => ErrorKind::Configuration,
            Self::Config(_) => ErrorKind::Configuration,
        }
    }

    pub fn is_user_correctable(&self) -> bool {
        self.kind().is_user_correctable()
    }
}

impl Display for CompassError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Geo(e) => write!(f, "{e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Astro(e) => write!(f, "computation error: {e}"),
            Self::Narrative(e) => write!(f, "narrative error: {e}"),
            Self::Config(e) => write!(f, "{e}"),
        }
    }
}

impl Error for CompassError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(_) => None,
            Self::Geo(e) => Some(e),
            Self::Time(e) => Some(e),
            Self::Astro(e) => Some(e),
            Self::Narrative(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<GeoError> for CompassError {
    fn from(e: GeoError) -> Self {
        Self::Geo(e)
    }
}

impl From<TimeError> for CompassError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<AstroError> for CompassError {
    fn from(e: AstroError) -> Self {
        Self::Astro(e)
    }
}

impl From<NarrativeError> for CompassError {
    fn from(e: NarrativeError) -> Self {
        Self::Narrative(e)
    }
}

impl From<ConfigError> for CompassError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
