//! Error types for theme lookup and narrative assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the narrative composer.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum NarrativeError {
    /// No axis theme for the north node's sign.
    UnsupportedSign(String),
    /// No house theme for one or both node houses.
    UnsupportedHouse { south: u8, north: u8 },
    /// Theme file is not valid JSON of the expected shape.
    ThemeTableParse(String),
    /// Filesystem error reading a theme file.
    Io(String),
}

impl Display for NarrativeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedSign(sign) => write!(f, "unsupported north node sign: {sign}"),
            Self::UnsupportedHouse { south, north } => {
                write!(f, "unsupported house: SN={south} NN={north}")
            }
            Self::ThemeTableParse(msg) => write!(f, "theme table parse error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for NarrativeError {}

impl From<serde_json::Error> for NarrativeError {
    fn from(e: serde_json::Error) -> Self {
        Self::ThemeTableParse(e.to_string())
    }
}
