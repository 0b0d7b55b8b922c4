//! Truncated IAU 2000B lunisolar nutation.
//!
//! The 13 largest terms of IERS Conventions 2010, Table 5.3b. Residual
//! error stays below 0.1″, far inside what house placement can resolve.

use crate::arguments::{ARCSEC_TO_RAD, fundamental_arguments};

/// `[nl, nl', nF, nD, nΩ, S, S', C, C']`, amplitudes in 0.1 μas.
#[rustfmt::skip]
static TERMS: [[i64; 9]; 13] = [
    [ 0,  0,  0,  0,  1, -172_064_161, -174_666, 92_052_331,  9_086],
    [ 0,  0,  2, -2,  2,  -13_170_906,   -1_675,  5_730_336, -3_015],
    [ 0,  0,  2,  0,  2,   -2_276_413,     -234,    978_459,   -485],
    [ 0,  0,  0,  0,  2,    2_074_554,      207,   -897_492,    470],
    [ 0,  1,  0,  0,  0,    1_475_877,   -3_633,     73_871,   -184],
    [ 0,  1,  2, -2,  2,     -516_821,    1_226,    224_386,   -677],
    [ 1,  0,  0,  0,  0,      711_159,       73,     -6_750,      0],
    [ 0,  0,  2,  0,  1,     -387_298,     -367,    200_728,     18],
    [ 1,  0,  2,  0,  2,     -301_461,      -36,    129_025,    -63],
    [ 0, -1,  2, -2,  2,      215_829,     -494,    -95_929,    299],
    [ 0,  0,  2, -2,  1,      128_227,      137,    -68_982,     -9],
    [-1,  0,  2,  0,  2,      123_457,       11,    -53_311,     32],
    [-1,  0,  0,  2,  0,      156_994,       10,     -1_235,      0],
];

/// Nutation `(Δψ, Δε)` in arcseconds.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_arcsec(t: f64) -> (f64, f64) {
    let args = fundamental_arguments(t);
    let (mut dpsi, mut deps) = (0.0_f64, 0.0_f64);

    for row in &TERMS {
        let arg: f64 = row[..5]
            .iter()
            .zip(args.iter())
            .map(|(&n, &a)| n as f64 * a)
            .sum();
        dpsi += (row[5] as f64 + row[6] as f64 * t) * arg.sin();
        deps += (row[7] as f64 + row[8] as f64 * t) * arg.cos();
    }

    (dpsi * 1e-7, deps * 1e-7)
}

/// Equation of the equinoxes, Δψ·cos ε, in radians.
///
/// Added to mean sidereal time to get apparent sidereal time.
pub fn equation_of_equinoxes_rad(t: f64, true_obliquity_rad: f64) -> f64 {
    let (dpsi, _) = nutation_arcsec(t);
    dpsi * ARCSEC_TO_RAD * true_obliquity_rad.cos()
}
