//! Mood-shift resolver.
//!
//! Targets come from the arrow table and depend on the primary type alone.
//! Only the strengths are read from the user's picks.

use serde::{Deserialize, Serialize};

use crate::reference::ReferenceTables;
use crate::types::{BlockChoice, Strength, TypeNumber};

/// Strength of each shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodShiftStrengths {
    /// Good-mood shift.
    pub integration: Strength,
    /// Bad-mood shift.
    pub disintegration: Strength,
}

/// Where the primary type moves under good and bad conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodShiftResult {
    pub integration_type: TypeNumber,
    pub disintegration_type: TypeNumber,
    pub strengths: MoodShiftStrengths,
}

/// Resolve both mood shifts for `primary`.  Either pick missing ⇒ `None`.
pub fn resolve_mood_shift(
    tables: &ReferenceTables,
    primary: TypeNumber,
    good_mood_pick: Option<BlockChoice>,
    bad_mood_pick: Option<BlockChoice>,
) -> Option<MoodShiftResult> {
    let (good, bad) = (good_mood_pick?, bad_mood_pick?);
    let arrows = tables.arrows(primary);

    Some(MoodShiftResult {
        integration_type: arrows.integration,
        disintegration_type: arrows.disintegration,
        strengths: MoodShiftStrengths {
            integration: Strength::from_choice(good),
            disintegration: Strength::from_choice(bad),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::ReferenceData;

    fn tables() -> ReferenceTables {
        ReferenceData::builtin().compile().unwrap()
    }

    #[test]
    fn test_type_one_arrows() {
        let one = TypeNumber::new(1).unwrap();
        let result =
            resolve_mood_shift(&tables(), one, Some(BlockChoice::Left), Some(BlockChoice::Left))
                .unwrap();
        assert_eq!(result.integration_type.get(), 7);
        assert_eq!(result.disintegration_type.get(), 4);
        assert_eq!(result.strengths.integration, Strength::Strong);
        assert_eq!(result.strengths.disintegration, Strength::Strong);
    }

    #[test]
    fn test_targets_ignore_picks() {
        let tables = tables();
        let picks = [BlockChoice::Left, BlockChoice::Right];
        for primary in TypeNumber::ALL {
            let baseline =
                resolve_mood_shift(&tables, primary, Some(BlockChoice::Left), Some(BlockChoice::Left))
                    .unwrap();
            for good in picks {
                for bad in picks {
                    let r = resolve_mood_shift(&tables, primary, Some(good), Some(bad)).unwrap();
                    assert_eq!(r.integration_type, baseline.integration_type);
                    assert_eq!(r.disintegration_type, baseline.disintegration_type);
                    assert_eq!(r.strengths.integration, Strength::from_choice(good));
                    assert_eq!(r.strengths.disintegration, Strength::from_choice(bad));
                }
            }
        }
    }

    #[test]
    fn test_missing_pick_yields_none() {
        let tables = tables();
        let four = TypeNumber::new(4).unwrap();
        assert!(resolve_mood_shift(&tables, four, Some(BlockChoice::Left), None).is_none());
        assert!(resolve_mood_shift(&tables, four, None, Some(BlockChoice::Right)).is_none());
    }
}
