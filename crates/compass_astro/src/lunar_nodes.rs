//! Ecliptic longitude of the Moon's nodes.
//!
//! Mean node: the fifth Delaunay argument (IERS Conventions 2010).
//! True node: mean node plus the five largest periodic terms from Meeus,
//! *Astronomical Algorithms* (2nd ed.), Chapter 47.
//!
//! The south node is always the north node + 180°.

use compass_frames::fundamental_arguments;

use crate::util::normalize_360;

/// Mean or true (perturbed) node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeMode {
    /// Smooth polynomial regression only.
    #[default]
    Mean,
    /// Mean node plus short-period perturbations (swings up to ~1.7°).
    True,
}

impl NodeMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::True => "true",
        }
    }

    /// Parse `"mean"` or `"true"` (case-insensitive).
    pub fn from_name(s: &str) -> Option<NodeMode> {
        match s.to_ascii_lowercase().as_str() {
            "mean" => Some(Self::Mean),
            "true" => Some(Self::True),
            _ => None,
        }
    }
}

/// Mean north node longitude in degrees, [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_north_node_deg(t: f64) -> f64 {
    normalize_360(fundamental_arguments(t)[4].to_degrees())
}

/// True north node longitude in degrees, [0, 360).
pub fn true_north_node_deg(t: f64) -> f64 {
    let [l, lp, f, d, om] = fundamental_arguments(t);
    let correction = -1.4979 * (2.0 * (d - f)).sin() - 0.1500 * lp.sin()
        + 0.1226 * (2.0 * d).sin()
        + 0.1176 * (2.0 * f).sin()
        - 0.0801 * (2.0 * (l - f)).sin();
    normalize_360(om.to_degrees() + correction)
}

/// North (ascending) node longitude in degrees, [0, 360).
pub fn north_node_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_north_node_deg(t),
        NodeMode::True => true_north_node_deg(t),
    }
}

/// South (descending) node longitude in degrees, [0, 360).
pub fn south_node_deg(t: f64, mode: NodeMode) -> f64 {
    normalize_360(north_node_deg(t, mode) + 180.0)
}
