//! Serializable views of intermediate pipeline values.

use compass_astro::{NodeChart, NodePosition};
use compass_time::BirthMoment;
use serde::Serialize;

/// A place name resolved to coordinates and timezone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceResolution {
    pub query: String,
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
}

/// One node's longitude, sign and house.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeReport {
    pub longitude_deg: f64,
    pub sign: String,
    pub degrees_in_sign: f64,
    /// Position within the sign, e.g. `26°15′11.1″`.
    pub dms: String,
    pub house: u8,
}

impl From<&NodePosition> for NodeReport {
    fn from(p: &NodePosition) -> Self {
        Self {
            longitude_deg: p.longitude_deg,
            sign: p.sign.sign.name().to_string(),
            degrees_in_sign: p.sign.degrees_in_sign,
            dms: p.sign.dms.to_string(),
            house: p.house,
        }
    }
}

/// Everything computed for a birth before narrative composition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileReport {
    pub place: PlaceResolution,
    /// Local civil time with offset, RFC 3339.
    pub local_time: String,
    /// UTC instant, RFC 3339.
    pub utc_time: String,
    /// `exact`, `ambiguous` or `skipped`.
    pub local_time_resolution: &'static str,
    pub jd_ut: f64,
    pub node_mode: &'static str,
    /// House system actually used.
    pub house_system: &'static str,
    pub ascendant_deg: f64,
    pub mc_deg: f64,
    pub cusps: [f64; 12],
    pub north: NodeReport,
    pub south: NodeReport,
}

impl ProfileReport {
    pub fn new(place: PlaceResolution, moment: &BirthMoment, chart: &NodeChart) -> Self {
        Self {
            place,
            local_time: moment.local.to_rfc3339(),
            utc_time: moment.utc.to_rfc3339(),
            local_time_resolution: moment.resolution.name(),
            jd_ut: chart.jd_ut,
            node_mode: chart.mode.name(),
            house_system: chart.system.name(),
            ascendant_deg: chart.ascendant_deg,
            mc_deg: chart.mc_deg,
            cusps: *chart.cusps.as_array(),
            north: NodeReport::from(&chart.north),
            south: NodeReport::from(&chart.south),
        }
    }
}
