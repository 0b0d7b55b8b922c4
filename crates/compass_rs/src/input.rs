//! Birth request fields and their validation.

use chrono::{NaiveDate, NaiveTime};

use crate::error::CompassError;

/// Earliest accepted birth date.
pub const MIN_BIRTH_DATE: (i32, u32, u32) = (1900, 1, 1);
const MIN_PLACE_CHARS: usize = 2;

/// A birth date, wall-clock time and place name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthInput {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Must match a place table key exactly.
    pub place: String,
}

impl BirthInput {
    pub fn new(date: NaiveDate, time: NaiveTime, place: impl Into<String>) -> Self {
        Self {
            date,
            time,
            place: place.into(),
        }
    }

    /// Parse `YYYY-MM-DD` and `HH:MM` or `HH:MM:SS`.
    pub fn parse(date: &str, time: &str, place: &str) -> Result<Self, CompassError> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|e| CompassError::InvalidInput(format!("birth date '{date}': {e}")))?;
        let time = parse_time(time.trim()).ok_or_else(|| {
            CompassError::InvalidInput(format!("birth time '{time}': expected HH:MM"))
        })?;
        Ok(Self::new(date, time, place))
    }

    /// Reject dates after `today` or before 1900-01-01, and place names
    /// shorter than two characters.
    pub fn validate(&self, today: NaiveDate) -> Result<(), CompassError> {
        if self.date > today {
            return Err(CompassError::InvalidInput(
                "Date can't be from the future".into(),
            ));
        }
        let (y, m, d) = MIN_BIRTH_DATE;
        if NaiveDate::from_ymd_opt(y, m, d).is_some_and(|min| self.date < min) {
            return Err(CompassError::InvalidInput(
                "Too old date (min 1900-01-01)".into(),
            ));
        }
        if self.place.chars().count() < MIN_PLACE_CHARS {
            return Err(CompassError::InvalidInput(format!(
                "birth place must be at least {MIN_PLACE_CHARS} characters"
            )));
        }
        Ok(())
    }
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[test]
    fn parses_both_time_forms() {
        let a = BirthInput::parse("2000-06-15", "14:30", "Paris").unwrap();
        let b = BirthInput::parse("2000-06-15", "14:30:00", "Paris").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
    }

    #[test]
    fn keeps_place_verbatim() {
        let input = BirthInput::parse("2000-06-15", "14:30", " Paris ").unwrap();
        assert_eq!(input.place, " Paris ");
    }

    #[test]
    fn rejects_malformed_fields() {
        let cases = [
            ("2000-13-01", "10:00"),
            ("15/06/2000", "10:00"),
            ("2000-06-15", "25:00"),
            ("2000-06-15", "noon"),
        ];
        for (d, t) in cases {
            let err = BirthInput::parse(d, t, "Paris").unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "{d} {t}");
        }
    }

    #[test]
    fn date_range() {
        let ok = BirthInput::parse("1900-01-01", "00:00", "Paris").unwrap();
        assert!(ok.validate(today()).is_ok());

        let old = BirthInput::parse("1899-12-31", "23:59", "Paris").unwrap();
        assert_eq!(
            old.validate(today()),
            Err(CompassError::InvalidInput("Too old date (min 1900-01-01)".into()))
        );

        let future = BirthInput::parse("2026-01-02", "00:00", "Paris").unwrap();
        assert_eq!(
            future.validate(today()),
            Err(CompassError::InvalidInput("Date can't be from the future".into()))
        );

        let same_day = BirthInput::parse("2026-01-01", "23:59", "Paris").unwrap();
        assert!(same_day.validate(today()).is_ok());
    }

    #[test]
    fn place_length() {
        let short = BirthInput::parse("2000-06-15", "14:30", "P").unwrap();
        assert!(short.validate(today()).is_err());
        let two = BirthInput::parse("2000-06-15", "14:30", "Ée").unwrap();
        assert!(two.validate(today()).is_ok());
    }
}
