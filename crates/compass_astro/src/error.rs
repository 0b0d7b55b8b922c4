//! Error types for node and house computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the ephemeris engine.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AstroError {
    /// A cusp array had neither 12 nor 13 entries.
    UnexpectedCuspCount(usize),
    /// Observer coordinates outside the valid range.
    InvalidLocation(&'static str),
}

impl Display for AstroError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCuspCount(n) => {
                write!(f, "unexpected house cusp count: {n} (expected 12 or 13)")
            }
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for AstroError {}
