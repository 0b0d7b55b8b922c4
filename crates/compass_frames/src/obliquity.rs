//! Obliquity of the ecliptic.

use crate::nutation::nutation_arcsec;

/// IAU 2006 mean obliquity of date, in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
/// Source: Capitaine et al. 2003, adopted in IERS Conventions 2010 Eq. 5.40.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84_381.406
        + t * (-46.836_769
            + t * (-0.000_183_1
                + t * (0.002_003_40 + t * (-0.000_000_576 - 0.000_000_043_4 * t))));
    arcsec / 3600.0
}

/// True obliquity of date (mean + nutation in obliquity), in degrees.
pub fn true_obliquity_deg(t: f64) -> f64 {
    let (_, deps) = nutation_arcsec(t);
    mean_obliquity_deg(t) + deps / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_at_j2000() {
        assert!((mean_obliquity_deg(0.0) - 23.439_279).abs() < 1e-6);
    }

    #[test]
    fn decreasing_this_era() {
        assert!(mean_obliquity_deg(0.2) < mean_obliquity_deg(0.0));
    }

    #[test]
    fn true_within_ten_arcsec_of_mean() {
        for &t in &[-1.0, 0.0, 0.1, 0.245] {
            let diff = (true_obliquity_deg(t) - mean_obliquity_deg(t)).abs() * 3600.0;
            assert!(diff < 10.0, "t={t}: {diff}″");
        }
    }
}
