//! Time-scale helpers for the life compass pipeline.
//!
//! This crate provides:
//! - Gregorian calendar → Julian Day conversion
//! - ΔT (TT − UT) estimates for converting UT Julian Days to TT
//! - Earth Rotation Angle and Greenwich Mean Sidereal Time
//! - The birth-moment converter: local wall-clock time under an IANA zone → UTC

pub mod birth_moment;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use birth_moment::{BirthMoment, LocalTimeResolution, parse_timezone, to_utc};
pub use delta_t::{delta_t_seconds, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, centuries_since_j2000, julian_day_ut,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
