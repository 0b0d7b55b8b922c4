//! Ascendant and Midheaven from local sidereal time.
//!
//! Sources: Meeus, *Astronomical Algorithms* (2nd ed.), Chapters 13–14;
//! Montenbruck & Pfleger, *Astronomy on the Personal Computer*.

use std::f64::consts::TAU;

/// Ecliptic longitude (radians, [0, 2π)) of the ecliptic point with
/// right ascension `ra`.
///
/// `tan λ = tan α / cos ε`, kept in the same quadrant as α.
pub fn ecliptic_longitude_of_ra(ra: f64, eps: f64) -> f64 {
    f64::atan2(ra.sin(), ra.cos() * eps.cos()).rem_euclid(TAU)
}

/// Ascendant, MC, and RAMC (all radians, [0, 2π)).
///
/// `lst` is apparent local sidereal time, which is the RAMC by definition.
/// The Ascendant is the eastern intersection of ecliptic and horizon:
/// `Asc = atan2(cos θ, −(sin θ·cos ε + tan φ·sin ε))`.
pub fn ascendant_mc_ramc(lst: f64, latitude_rad: f64, eps: f64) -> (f64, f64, f64) {
    let ramc = lst.rem_euclid(TAU);
    let asc = f64::atan2(
        ramc.cos(),
        -(ramc.sin() * eps.cos() + latitude_rad.tan() * eps.sin()),
    );
    let mc = ecliptic_longitude_of_ra(ramc, eps);
    (asc.rem_euclid(TAU), mc, ramc)
}
