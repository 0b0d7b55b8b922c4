//! The lunar node axis placed by sign and house for a birth instant.

use chrono::{DateTime, Datelike, Utc};
use compass_time::{centuries_since_j2000, jd_ut_to_tt, julian_day_ut};

use crate::error::AstroError;
use crate::house_types::{HouseCusps, HouseSystem, opposite_house};
use crate::houses::{HouseFrame, compute_houses};
use crate::location::GeoLocation;
use crate::lunar_nodes::{NodeMode, north_node_deg};
use crate::util::normalize_360;
use crate::zodiac::{SignPosition, ZodiacSign, sign_from_longitude};

/// Sign and house of one node, the input to narrative composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodePlacement {
    pub sign: ZodiacSign,
    /// House number, 1..=12.
    pub house: u8,
}

/// One node with its longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePosition {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    pub sign: SignPosition,
    pub house: u8,
}

impl NodePosition {
    pub fn placement(&self) -> NodePlacement {
        NodePlacement {
            sign: self.sign.sign,
            house: self.house,
        }
    }
}

/// North and south node plus the house frame they were placed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeChart {
    pub jd_ut: f64,
    pub mode: NodeMode,
    pub north: NodePosition,
    pub south: NodePosition,
    pub cusps: HouseCusps,
    pub ascendant_deg: f64,
    pub mc_deg: f64,
    /// The house system actually used.
    pub system: HouseSystem,
}

/// Compute the node axis for a UTC instant and observer location.
///
/// The south node's sign is the opposite of the north node's, and its
/// house is the opposite house (`(h + 5) mod 12 + 1`), even when the
/// cusps are unequal.
pub fn compute_nodes(
    utc: &DateTime<Utc>,
    location: &GeoLocation,
    system: HouseSystem,
    mode: NodeMode,
) -> Result<NodeChart, AstroError> {
    location.validate()?;

    let jd_ut = julian_day_ut(utc);
    let jd_tt = jd_ut_to_tt(jd_ut, utc.year(), utc.month());
    let t = centuries_since_j2000(jd_tt);

    let frame = HouseFrame::new(jd_ut, t, location);
    let houses = compute_houses(&frame, system)?;
    let north_lon = north_node_deg(t, mode);

    Ok(NodeChart {
        jd_ut,
        mode,
        north: north_position(north_lon, &houses.cusps),
        south: south_position(north_lon, &houses.cusps),
        cusps: houses.cusps,
        ascendant_deg: houses.ascendant_deg,
        mc_deg: houses.mc_deg,
        system: houses.system,
    })
}

/// Place the node axis against cusps computed elsewhere.
///
/// `raw_cusps` may have 12 entries, or 13 with an unused slot at index 0.
/// Node longitude is evaluated at `jd_ut` with ΔT applied.
pub fn compute_nodes_with_cusps(
    jd_ut: f64,
    raw_cusps: &[f64],
    mode: NodeMode,
) -> Result<(NodePosition, NodePosition), AstroError> {
    let cusps = HouseCusps::from_raw(raw_cusps)?;
    let (year, month) = approximate_year_month(jd_ut);
    let t = centuries_since_j2000(jd_ut_to_tt(jd_ut, year, month));
    let north_lon = north_node_deg(t, mode);
    Ok((
        north_position(north_lon, &cusps),
        south_position(north_lon, &cusps),
    ))
}

fn north_position(lon: f64, cusps: &HouseCusps) -> NodePosition {
    NodePosition {
        longitude_deg: lon,
        sign: sign_from_longitude(lon),
        house: cusps.house_of(lon),
    }
}

fn south_position(north_lon: f64, cusps: &HouseCusps) -> NodePosition {
    let lon = normalize_360(north_lon + 180.0);
    NodePosition {
        longitude_deg: lon,
        sign: sign_from_longitude(lon),
        house: opposite_house(cusps.house_of(north_lon)),
    }
}

/// Calendar year and month for ΔT lookup; month precision is plenty.
fn approximate_year_month(jd: f64) -> (i32, u32) {
    let years = (jd - 2_451_544.5) / 365.2425;
    let decimal_year = 2000.0 + years;
    let year = decimal_year.floor();
    let month = (((decimal_year - year) * 12.0).floor() as u32 + 1).min(12);
    (year as i32, month)
}
