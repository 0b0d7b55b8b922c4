//! Narrative composition for a lunar node axis.
//!
//! Pure functions over immutable theme tables: the same placements always
//! yield byte-identical text.

mod builtin;
pub mod compose;
pub mod error;
pub mod ordinal;
pub mod themes;

pub use compose::{DEFAULT_MOTTO, LifeCompassResult, Section, compose};
pub use error::NarrativeError;
pub use ordinal::ordinal;
pub use themes::{AxisTheme, HouseTheme, ThemeTables};
