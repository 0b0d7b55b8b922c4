//! Life compass: birth date, time and place → lunar node narrative.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use compass_rs::*;
//!
//! let compass = LifeCompass::from_config(&CompassConfig::discover()?)?;
//! let input = BirthInput::parse("2000-06-15", "14:30", "Paris")?;
//! let result = compass.build_profile(&input)?;
//! println!("{}", result.title);
//! ```
//!
//! Pipeline: place → coordinates → timezone → UTC instant → node sign and
//! house → narrative. Every stage is pure; [`LifeCompass`] only holds the
//! read-only lookup tables.

pub mod compass;
pub mod error;
pub mod input;
pub mod report;

pub use compass::{CompassOptions, LifeCompass};
pub use error::{CompassError, ErrorKind};
pub use input::BirthInput;
pub use report::{NodeReport, PlaceResolution, ProfileReport};

pub use compass_astro::{HouseSystem, NodeMode, NodePlacement, ZodiacSign};
pub use compass_config::CompassConfig;
pub use compass_geo::{Coordinates, PlaceTable, TimezoneResolver};
pub use compass_narrative::{LifeCompassResult, Section, ThemeTables, ordinal};
