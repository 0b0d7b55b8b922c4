//! Julian Day conversions.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 7.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Day of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one Julian day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Gregorian calendar date → Julian Day.
///
/// `day_frac` carries the time of day as a fraction (e.g. 15.5 = 15th at noon).
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    (365.25 * (f64::from(y) + 4716.0)).floor() + (30.6001 * (f64::from(m) + 1.0)).floor()
        + day_frac
        + f64::from(b)
        - 1524.5
}

/// Julian Day (UT) of a UTC instant, to sub-second precision.
pub fn julian_day_ut(utc: &DateTime<Utc>) -> f64 {
    let seconds = f64::from(utc.num_seconds_from_midnight())
        + f64::from(utc.nanosecond()) * 1e-9;
    let day_frac = f64::from(utc.day()) + seconds / SECONDS_PER_DAY;
    calendar_to_jd(utc.year(), utc.month(), day_frac)
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
