//! Delaunay fundamental arguments of lunisolar motion.
//!
//! Source: IERS Conventions 2010, Table 5.2e.

use std::f64::consts::TAU;

/// Arcseconds to radians.
pub const ARCSEC_TO_RAD: f64 = TAU / 1_296_000.0;

/// Polynomial coefficients in arcseconds, constant term first.
#[rustfmt::skip]
const COEFFS: [[f64; 5]; 5] = [
    // l: mean anomaly of the Moon
    [  485_868.249036, 1_717_915_923.2178,  31.8792,  0.051635, -0.000_244_70],
    // l': mean anomaly of the Sun
    [1_287_104.793050,   129_596_581.0481,  -0.5532,  0.000136, -0.000_011_49],
    // F: mean argument of latitude of the Moon
    [  335_779.526232, 1_739_527_262.8478, -12.7512, -0.001037,  0.000_004_17],
    // D: mean elongation of the Moon from the Sun
    [1_072_260.703690, 1_602_961_601.2090,  -6.3706,  0.006593, -0.000_031_69],
    // Ω: mean longitude of the Moon's ascending node
    [  450_160.398036,    -6_962_890.5431,   7.4722,  0.007702, -0.000_059_39],
];

/// The five Delaunay arguments `[l, l', F, D, Ω]` in radians (unreduced).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    COEFFS.map(|c| (c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4])))) * ARCSEC_TO_RAD)
}
