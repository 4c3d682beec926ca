//! Influence (wing) resolver.
//!
//! The wing is a *selection* between the two fixed wing types of the primary
//! type, never a score: the first building block picks left or right, the
//! second sets the strength.

use serde::{Deserialize, Serialize};

use crate::reference::ReferenceTables;
use crate::types::{BlockChoice, Strength, TypeNumber};

/// Secondary influence on the primary type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluenceResult {
    pub adjacent_type: TypeNumber,
    pub strength: Strength,
}

impl InfluenceResult {
    /// Conventional short form, e.g. `"1w9"`.
    pub fn notation(&self, primary: TypeNumber) -> String {
        format!("{}w{}", primary, self.adjacent_type)
    }
}

/// Resolve the wing for `primary`.
///
/// `wing_pick` missing ⇒ `None`.  `strength_pick` missing ⇒ moderate.
pub fn resolve_influence(
    tables: &ReferenceTables,
    primary: TypeNumber,
    wing_pick: Option<BlockChoice>,
    strength_pick: Option<BlockChoice>,
) -> Option<InfluenceResult> {
    let wing_pick = wing_pick?;
    let pair = tables.wings(primary);
    let adjacent_type = match wing_pick {
        BlockChoice::Left => pair.left,
        BlockChoice::Right => pair.right,
    };
    let strength = strength_pick
        .map(Strength::from_choice)
        .unwrap_or(Strength::Moderate);

    Some(InfluenceResult {
        adjacent_type,
        strength,
    })
}
