//! House cusp computation: Placidus, with Porphyry inside the polar circles.
//!
//! Sidereal time is apparent (GMST + equation of the equinoxes) and the
//! obliquity is the true obliquity of date.
//!
//! Sources: Meeus, *Astronomical Algorithms* ch. 13; Montenbruck &
//! Pfleger; the standard semi-arc formulation of Placidus.

use std::f64::consts::{FRAC_PI_2, PI};

use compass_frames::{equation_of_equinoxes_rad, true_obliquity_deg};
use compass_time::{gmst_rad, local_sidereal_time_rad};

use crate::angles::{ascendant_mc_ramc, ecliptic_longitude_of_ra};
use crate::error::AstroError;
use crate::house_types::{HouseCusps, HouseSystem};
use crate::location::GeoLocation;
use crate::util::{arc_forward, normalize_360};

/// Iteration cap for the Placidus fixed point; it converges in < 10.
const MAX_ITERATIONS: usize = 50;
const CONVERGENCE_RAD: f64 = 1e-12;

/// Sky orientation for one instant and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseFrame {
    /// Right ascension of the MC (apparent local sidereal time), radians.
    pub ramc: f64,
    /// True obliquity of date, radians.
    pub obliquity: f64,
    /// Observer latitude, radians.
    pub latitude: f64,
}

impl HouseFrame {
    /// `jd_ut` drives Earth rotation, `t_tt` (centuries of TT since J2000)
    /// drives obliquity and nutation.
    pub fn new(jd_ut: f64, t_tt: f64, location: &GeoLocation) -> Self {
        let obliquity = true_obliquity_deg(t_tt).to_radians();
        let gast = gmst_rad(jd_ut) + equation_of_equinoxes_rad(t_tt, obliquity);
        Self {
            ramc: local_sidereal_time_rad(gast, location.longitude_rad()),
            obliquity,
            latitude: location.latitude_rad(),
        }
    }

    /// Whether Placidus cusps exist: |φ| < 90° − ε.
    pub fn placidus_defined(&self) -> bool {
        self.latitude.abs() < FRAC_PI_2 - self.obliquity
    }
}

/// Cusps plus the angles and the system actually used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseResult {
    pub cusps: HouseCusps,
    /// Ascendant longitude in degrees, [0, 360).
    pub ascendant_deg: f64,
    /// Midheaven longitude in degrees, [0, 360).
    pub mc_deg: f64,
    /// May differ from the requested system (Placidus → Porphyry at the poles).
    pub system: HouseSystem,
}

/// Compute house cusps for a sky frame.
pub fn compute_houses(frame: &HouseFrame, system: HouseSystem) -> Result<HouseResult, AstroError> {
    let (asc, mc, _) = ascendant_mc_ramc(frame.ramc, frame.latitude, frame.obliquity);
    let mc_deg = normalize_360(mc.to_degrees());
    let mut asc_deg = normalize_360(asc.to_degrees());
    // Inside the polar circles the horizon can cut the ecliptic west of
    // the meridian; keep the Ascendant in the eastern half.
    if arc_forward(mc_deg, asc_deg) >= 180.0 {
        asc_deg = normalize_360(asc_deg + 180.0);
    }

    let used = if system.latitude_dependent() && !frame.placidus_defined() {
        HouseSystem::Porphyry
    } else {
        system
    };

    let raw = match used {
        HouseSystem::Placidus => placidus(frame, asc_deg, mc_deg),
        HouseSystem::Porphyry => porphyry(asc_deg, mc_deg),
    };

    Ok(HouseResult {
        cusps: HouseCusps::from_raw(&raw)?,
        ascendant_deg: asc_deg,
        mc_deg,
        system: used,
    })
}

/// Fill cusps 4, 7 and the opposite pairs from the four computed ones.
fn with_axes(asc: f64, mc: f64, c11: f64, c12: f64, c2: f64, c3: f64) -> [f64; 12] {
    [
        asc,
        c2,
        c3,
        normalize_360(mc + 180.0),
        normalize_360(c11 + 180.0),
        normalize_360(c12 + 180.0),
        normalize_360(asc + 180.0),
        normalize_360(c2 + 180.0),
        normalize_360(c3 + 180.0),
        mc,
        c11,
        c12,
    ]
}

/// Porphyry: trisect each quadrant's ecliptic arc.
fn porphyry(asc: f64, mc: f64) -> [f64; 12] {
    let ic = normalize_360(mc + 180.0);
    let upper = arc_forward(mc, asc);
    let lower = arc_forward(asc, ic);
    with_axes(
        asc,
        mc,
        normalize_360(mc + upper / 3.0),
        normalize_360(mc + 2.0 * upper / 3.0),
        normalize_360(asc + lower / 3.0),
        normalize_360(asc + 2.0 * lower / 3.0),
    )
}

/// Placidus: each intermediate cusp sits where a point has covered a
/// fixed fraction of its own semi-arc.
///
/// Above the horizon (cusps 11, 12): `RA = RAMC + f·DSA(δ)`, f = 1/3, 2/3.
/// Below the horizon (cusps 2, 3): `RA = RAMC + 180° − f·NSA(δ)`, f = 2/3, 1/3.
fn placidus(frame: &HouseFrame, asc: f64, mc: f64) -> [f64; 12] {
    let c11 = placidus_cusp(frame, 1.0 / 3.0, true);
    let c12 = placidus_cusp(frame, 2.0 / 3.0, true);
    let c2 = placidus_cusp(frame, 2.0 / 3.0, false);
    let c3 = placidus_cusp(frame, 1.0 / 3.0, false);
    with_axes(asc, mc, c11, c12, c2, c3)
}

fn placidus_cusp(frame: &HouseFrame, fraction: f64, above_horizon: bool) -> f64 {
    let HouseFrame {
        ramc,
        obliquity: eps,
        latitude: lat,
    } = *frame;

    let target = |semi_diurnal: f64| {
        if above_horizon {
            ramc + fraction * semi_diurnal
        } else {
            ramc + PI - fraction * (PI - semi_diurnal)
        }
    };

    let mut ra = target(FRAC_PI_2);
    for _ in 0..MAX_ITERATIONS {
        // Declination of the ecliptic point at this right ascension.
        let dec = (ra.sin() * eps.tan()).atan();
        let next = target(semi_diurnal_arc(dec, lat));
        let done = (next - ra).abs() < CONVERGENCE_RAD;
        ra = next;
        if done {
            break;
        }
    }

    normalize_360(ecliptic_longitude_of_ra(ra, eps).to_degrees())
}

/// Semi-diurnal arc in radians: `acos(−tan δ · tan φ)`.
fn semi_diurnal_arc(dec: f64, lat: f64) -> f64 {
    (-(dec.tan() * lat.tan())).clamp(-1.0, 1.0).acos()
}
