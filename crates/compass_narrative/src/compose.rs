//! Assembly of the life-compass narrative.

use compass_astro::NodePlacement;
use serde::{Deserialize, Serialize};

use crate::error::NarrativeError;
use crate::ordinal::ordinal;
use crate::themes::ThemeTables;

/// Used when the axis theme has no motto.
pub const DEFAULT_MOTTO: &str = "Shift the center of gravity toward growth.";

/// One narrative section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub context: String,
    pub meaning: String,
    pub direction: Option<String>,
}

/// The composed narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeCompassResult {
    pub title: String,
    pub bridge: String,
    /// South axis, south house, north axis, north house.
    pub sections: Vec<Section>,
    pub recommendations: Vec<String>,
    pub motto: String,
}

/// Compose the narrative for a south/north node pair.
///
/// The axis theme is looked up by the north node's sign; house themes by
/// each node's own house.
pub fn compose(
    tables: &ThemeTables,
    south: NodePlacement,
    north: NodePlacement,
) -> Result<LifeCompassResult, NarrativeError> {
    let axis = tables
        .axis(north.sign.name())
        .ok_or_else(|| NarrativeError::UnsupportedSign(north.sign.name().to_string()))?;
    let (Some(sn_house), Some(nn_house)) = (tables.house(south.house), tables.house(north.house))
    else {
        return Err(NarrativeError::UnsupportedHouse {
            south: south.house,
            north: north.house,
        });
    };

    let south_ord = ordinal(u32::from(south.house));
    let north_ord = ordinal(u32::from(north.house));

    let title = format!(
        "{} South Node ({south_ord} House) → {} North Node ({north_ord} House)",
        south.sign.name(),
        north.sign.name(),
    );

    let sections = vec![
        Section {
            context: format!("☋ South {}", axis.south_title),
            meaning: axis.south.clone(),
            direction: None,
        },
        Section {
            context: format!("☋ South Node in the {south_ord} House — familiar life scenario"),
            meaning: sn_house.sn.clone(),
            direction: Some(sn_house.key.clone()),
        },
        Section {
            context: format!("☊ {}", axis.north_title),
            meaning: axis.north.clone(),
            direction: None,
        },
        Section {
            context: format!("☊ North Node in the {north_ord} House — where growth happens"),
            meaning: nn_house.nn.clone(),
            direction: Some(nn_house.key.clone()),
        },
    ];

    let recommendations = vec![
        format!("Consciously develop: {}", axis.north),
        format!("Let growth unfold through: {}", nn_house.title),
        format!("Notice when you fall back into: {}", sn_house.title),
        format!("Keep the core transition in mind: {}", axis.bridge),
    ];

    Ok(LifeCompassResult {
        title,
        bridge: axis.bridge.clone(),
        sections,
        recommendations,
        motto: axis
            .motto
            .clone()
            .unwrap_or_else(|| DEFAULT_MOTTO.to_string()),
    })
}
