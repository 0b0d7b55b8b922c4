//! Error types for time conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil time resolution.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// The zone identifier is not in the IANA database.
    InvalidTimezone(String),
    /// The local date/time could not be mapped to an instant.
    InvalidDateTime(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimezone(name) => write!(f, "unrecognized timezone: {name}"),
            Self::InvalidDateTime(msg) => write!(f, "invalid local date/time: {msg}"),
        }
    }
}

impl Error for TimeError {}
