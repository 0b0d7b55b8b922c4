//! ΔT = TT − UT, in seconds.
//!
//! Polynomial fits from Espenak & Meeus, *Five Millennium Canon of Solar
//! Eclipses* (NASA/TP-2006-214141), restricted to the segments covering
//! 1900–2150. Outside that range the long-term parabola is used.

use crate::julian::SECONDS_PER_DAY;

/// ΔT in seconds for a calendar month.
///
/// The decimal year is taken at the middle of the month.
pub fn delta_t_seconds(year: i32, month: u32) -> f64 {
    let y = f64::from(year) + (f64::from(month) - 0.5) / 12.0;

    if y < 1900.0 {
        long_term(y)
    } else if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else if y < 2150.0 {
        long_term(y) - 0.5628 * (2150.0 - y)
    } else {
        long_term(y)
    }
}

fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Shift a UT Julian Day onto the TT scale.
pub fn jd_ut_to_tt(jd_ut: f64, year: i32, month: u32) -> f64 {
    jd_ut + delta_t_seconds(year, month) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000_about_64s() {
        let dt = delta_t_seconds(2000, 1);
        assert!((dt - 63.8).abs() < 0.5, "ΔT(2000) = {dt}");
    }

    #[test]
    fn year_1900_near_zero() {
        let dt = delta_t_seconds(1900, 1);
        assert!(dt.abs() < 3.5, "ΔT(1900) = {dt}");
    }

    #[test]
    fn segments_join_smoothly() {
        // Adjacent months across each segment boundary should differ by < 1 s.
        for &(y, m) in &[(1919, 12), (1940, 12), (1960, 12), (1985, 12), (2004, 12), (2049, 12)] {
            let a = delta_t_seconds(y, m);
            let b = delta_t_seconds(y + 1, 1);
            assert!((a - b).abs() < 1.0, "{y}-{m}: {a} vs {b}");
        }
    }

    #[test]
    fn tt_is_ahead_of_ut() {
        let jd = 2_451_545.0;
        let tt = jd_ut_to_tt(jd, 2000, 1);
        let secs = (tt - jd) * SECONDS_PER_DAY;
        assert!(secs > 60.0 && secs < 70.0, "TT - UT = {secs} s");
    }
}
