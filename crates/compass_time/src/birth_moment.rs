//! Local birth time → UTC instant under an IANA zone's historical rules.
//!
//! Offsets come from the tz database (`chrono-tz`), so DST and historical
//! offset changes are applied as of the birth date.
//!
//! Wall-clock times that the zone skips or repeats are resolved by a fixed
//! policy:
//! - repeated (fall-back overlap): the standard-time occurrence, taken as the
//!   one with the smaller UTC offset. Zones whose tz rules mark winter as
//!   negative DST (Europe/Dublin) still resolve to winter time. Equal offsets
//!   take the earlier instant.
//! - skipped (spring-forward gap): read with the offset in force just before
//!   the transition, which lands the instant after the gap by the gap's width.

use chrono::{
    DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::error::TimeError;

/// How the wall-clock time mapped onto the zone's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalTimeResolution {
    /// Exactly one instant has this wall-clock time.
    Exact,
    /// The wall-clock time occurs twice; the standard-time one was taken.
    Ambiguous,
    /// The wall-clock time never occurs; it was shifted past the gap.
    Skipped,
}

impl LocalTimeResolution {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Ambiguous => "ambiguous",
            Self::Skipped => "skipped",
        }
    }
}

/// A birth instant in both its civil and UTC forms.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthMoment {
    /// IANA zone identifier the local time was interpreted in.
    pub timezone_name: String,
    /// Civil instant with the zone's offset at that date.
    pub local: DateTime<Tz>,
    /// The same instant in UTC.
    pub utc: DateTime<Utc>,
    /// How the wall-clock time was resolved.
    pub resolution: LocalTimeResolution,
}

/// Look up a zone in the IANA database.
pub fn parse_timezone(name: &str) -> Result<Tz, TimeError> {
    name.parse::<Tz>()
        .map_err(|_| TimeError::InvalidTimezone(name.to_string()))
}

/// Combine a calendar date and wall-clock time under `timezone_name` and
/// convert to UTC.
pub fn to_utc(
    date: NaiveDate,
    time: NaiveTime,
    timezone_name: &str,
) -> Result<BirthMoment, TimeError> {
    let tz = parse_timezone(timezone_name)?;
    let wall = date.and_time(time);

    let (local, resolution) = match tz.from_local_datetime(&wall) {
        LocalResult::Single(dt) => (dt, LocalTimeResolution::Exact),
        LocalResult::Ambiguous(earlier, later) => {
            (standard_occurrence(earlier, later), LocalTimeResolution::Ambiguous)
        }
        LocalResult::None => (after_gap(&tz, wall)?, LocalTimeResolution::Skipped),
    };

    Ok(BirthMoment {
        timezone_name: timezone_name.to_string(),
        utc: local.with_timezone(&Utc),
        local,
        resolution,
    })
}

fn utc_offset_seconds(dt: &DateTime<Tz>) -> i32 {
    dt.offset().fix().local_minus_utc()
}

fn standard_occurrence(earlier: DateTime<Tz>, later: DateTime<Tz>) -> DateTime<Tz> {
    if utc_offset_seconds(&later) < utc_offset_seconds(&earlier) {
        later
    } else {
        earlier
    }
}

/// Interpret a skipped wall time with the offset in force just before the gap.
///
/// Walks back from `wall` in quarter-hour steps to the nearest wall time that
/// exists and takes its offset. Gaps longer than a day are rejected.
fn after_gap(tz: &Tz, wall: NaiveDateTime) -> Result<DateTime<Tz>, TimeError> {
    let out_of_range = || TimeError::InvalidDateTime(format!("{wall} is out of range"));

    let offset = (1..=96)
        .filter_map(|quarters| wall.checked_sub_signed(TimeDelta::minutes(15 * quarters)))
        .find_map(|before| tz.from_local_datetime(&before).latest())
        .map(|dt| dt.offset().fix())
        .ok_or_else(out_of_range)?;
    let utc = wall
        .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
        .ok_or_else(out_of_range)?;
    Ok(tz.from_utc_datetime(&utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn paris_summer_time() {
        let m = to_utc(date(2000, 6, 15), time(14, 30), "Europe/Paris").unwrap();
        assert_eq!(m.utc, utc(2000, 6, 15, 12, 30));
        assert_eq!(m.resolution, LocalTimeResolution::Exact);
        assert_eq!(m.timezone_name, "Europe/Paris");
    }

    #[test]
    fn paris_winter_time() {
        let m = to_utc(date(2000, 1, 15), time(14, 30), "Europe/Paris").unwrap();
        assert_eq!(m.utc, utc(2000, 1, 15, 13, 30));
    }

    #[test]
    fn london_british_standard_time_experiment() {
        // 1968-1971 the UK stayed on UTC+1 all year.
        let m = to_utc(date(1970, 1, 15), time(12, 0), "Europe/London").unwrap();
        assert_eq!(m.utc, utc(1970, 1, 15, 11, 0));
    }

    #[test]
    fn ambiguous_takes_standard_time() {
        // Paris falls back 03:00 CEST → 02:00 CET on 2021-10-31.
        let m = to_utc(date(2021, 10, 31), time(2, 30), "Europe/Paris").unwrap();
        assert_eq!(m.resolution, LocalTimeResolution::Ambiguous);
        assert_eq!(m.utc, utc(2021, 10, 31, 1, 30));
    }

    #[test]
    fn ambiguous_southern_hemisphere() {
        // Sydney falls back 03:00 AEDT → 02:00 AEST on 2021-04-04.
        let m = to_utc(date(2021, 4, 4), time(2, 30), "Australia/Sydney").unwrap();
        assert_eq!(m.resolution, LocalTimeResolution::Ambiguous);
        assert_eq!(m.utc, utc(2021, 4, 3, 16, 30));
    }

    #[test]
    fn gap_moves_past_transition() {
        // Paris springs forward 02:00 CET → 03:00 CEST on 2021-03-28.
        let m = to_utc(date(2021, 3, 28), time(2, 30), "Europe/Paris").unwrap();
        assert_eq!(m.resolution, LocalTimeResolution::Skipped);
        assert_eq!(m.utc, utc(2021, 3, 28, 1, 30));
        assert_eq!(m.local.hour(), 3);
        assert_eq!(m.local.minute(), 30);
    }

    #[test]
    fn ambiguous_dublin_negative_dst_takes_winter_time() {
        // Dublin's tz rules call winter GMT the DST period; the fall-back
        // overlap on 2021-10-31 is still 01:00-02:00 local.
        let m = to_utc(date(2021, 10, 31), time(1, 30), "Europe/Dublin").unwrap();
        assert_eq!(m.resolution, LocalTimeResolution::Ambiguous);
        assert_eq!(m.utc, utc(2021, 10, 31, 1, 30));
    }

    #[test]
    fn ambiguous_london_takes_winter_time() {
        let m = to_utc(date(2021, 10, 31), time(1, 30), "Europe/London").unwrap();
        assert_eq!(m.resolution, LocalTimeResolution::Ambiguous);
        assert_eq!(m.utc, utc(2021, 10, 31, 1, 30));
    }

    #[test]
    fn ambiguous_half_hour_shift() {
        // Lord Howe falls back 02:00 +11 → 01:30 +10:30 on 2021-04-04.
        let m = to_utc(date(2021, 4, 4), time(1, 45), "Australia/Lord_Howe").unwrap();
        assert_eq!(m.resolution, LocalTimeResolution::Ambiguous);
        assert_eq!(m.utc, utc(2021, 4, 3, 15, 15));
    }

    #[test]
    fn gap_half_hour_shift() {
        // Lord Howe springs forward 02:00 +10:30 → 02:30 +11 on 2021-10-03.
        let m = to_utc(date(2021, 10, 3), time(2, 15), "Australia/Lord_Howe").unwrap();
        assert_eq!(m.resolution, LocalTimeResolution::Skipped);
        assert_eq!(m.utc, utc(2021, 10, 2, 15, 45));
        assert_eq!((m.local.hour(), m.local.minute()), (2, 45));
    }

    #[test]
    fn gap_off_quarter_hour_uses_offset_before_transition() {
        let m = to_utc(date(2021, 3, 28), time(2, 7), "Europe/Paris").unwrap();
        assert_eq!(m.resolution, LocalTimeResolution::Skipped);
        assert_eq!(m.utc, utc(2021, 3, 28, 1, 7));
        assert_eq!((m.local.hour(), m.local.minute()), (3, 7));
    }

    #[test]
    fn unknown_zone() {
        let err = to_utc(date(2000, 1, 1), time(0, 0), "Mars/Olympus_Mons").unwrap_err();
        assert_eq!(err, TimeError::InvalidTimezone("Mars/Olympus_Mons".into()));
    }

    #[test]
    fn utc_zone_is_identity() {
        let m = to_utc(date(1999, 12, 31), time(23, 59), "UTC").unwrap();
        assert_eq!(m.utc, utc(1999, 12, 31, 23, 59));
    }
}
