//! Selection normalizer — raw UI selections → canonical [`SelectionSet`].
//!
//! The UI hands over whatever shapes its components produce: numbers,
//! numeric strings, `"left"`/`"right"`, small objects.  Normalization never
//! fails; each field degrades to a documented default:
//!
//! | Field                  | Missing / null      | Bad entry                     |
//! |------------------------|---------------------|-------------------------------|
//! | `foundationChoices`    | all sets unanswered | slot unanswered               |
//! | `buildingBlockChoices` | no blocks           | position kept, unanswered     |
//! | `colorSelections`      | no colors           | entry skipped                 |
//! | `detailSelections`     | no tokens           | entry (or count) skipped      |
//!
//! Every coerced or dropped entry is logged at `warn`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{
    ActivationBand, BlockChoice, ColorSelection, Instinct, InstinctTally, SelectionSet,
    StoneChoice, FOUNDATION_SETS,
};

/// Object keys accepted for a color's activation category.
const CATEGORY_KEYS: [&str; 3] = ["category", "state", "activation"];
/// Object keys accepted for a color's content id.
const COLOR_ID_KEYS: [&str; 2] = ["color", "id"];
/// Object keys accepted for a building-block pick.
const BLOCK_KEYS: [&str; 2] = ["choice", "side"];
/// Object keys accepted for a detail token's instinct tag.
const INSTINCT_KEYS: [&str; 2] = ["instinct", "category"];

/// Selections as delivered by the UI.  Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSelectionSet {
    #[serde(default)]
    pub foundation_choices: Option<Value>,
    #[serde(default)]
    pub building_block_choices: Option<Value>,
    #[serde(default)]
    pub color_selections: Option<Value>,
    #[serde(default)]
    pub detail_selections: Option<Value>,
}

impl RawSelectionSet {
    /// Coerce into canonical selections.
    pub fn normalize(&self) -> SelectionSet {
        normalize(self)
    }
}

impl From<&RawSelectionSet> for SelectionSet {
    fn from(raw: &RawSelectionSet) -> Self {
        normalize(raw)
    }
}

/// Coerce raw selections into canonical form.
pub fn normalize(raw: &RawSelectionSet) -> SelectionSet {
    let selections = SelectionSet {
        foundation_choices: normalize_foundation(raw.foundation_choices.as_ref()),
        building_block_choices: normalize_blocks(raw.building_block_choices.as_ref()),
        color_selections: normalize_colors(raw.color_selections.as_ref()),
        detail_selections: normalize_details(raw.detail_selections.as_ref()),
    };
    log::debug!(
        "Normalized selections: {}/{} foundation, {} blocks, {} colors, {} tokens",
        selections.answered_foundation(),
        FOUNDATION_SETS,
        selections.answered_blocks(),
        selections.color_selections.len(),
        selections.detail_selections.total()
    );
    selections
}

// ============================================================================
// Scalar coercion
// ============================================================================

/// Integer from a JSON number (integral floats allowed) or numeric string.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// First present key of `keys` in an object.
fn first_key<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let object = value.as_object()?;
    keys.iter().find_map(|k| object.get(*k))
}

// ============================================================================
// Per-phase coercion
// ============================================================================

fn normalize_foundation(value: Option<&Value>) -> [Option<StoneChoice>; FOUNDATION_SETS] {
    let mut choices = [None; FOUNDATION_SETS];
    let items = match value {
        None | Some(Value::Null) => return choices,
        Some(Value::Array(items)) => items,
        Some(other) => {
            log::warn!("foundationChoices is not an array ({}); treating all sets as unanswered", other);
            return choices;
        }
    };

    if items.len() > FOUNDATION_SETS {
        log::warn!(
            "foundationChoices has {} entries; ignoring all past {}",
            items.len(),
            FOUNDATION_SETS
        );
    }

    for (slot, item) in choices.iter_mut().zip(items.iter()) {
        if item.is_null() {
            continue;
        }
        *slot = as_integer(item)
            .and_then(|n| usize::try_from(n).ok())
            .and_then(StoneChoice::from_index);
        if slot.is_none() {
            log::warn!("foundation choice {} is not 0, 1 or 2; set left unanswered", item);
        }
    }
    choices
}

fn parse_block(item: &Value) -> Option<BlockChoice> {
    match item {
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Some(BlockChoice::Left),
            "right" | "r" => Some(BlockChoice::Right),
            other => other.parse::<i64>().ok().and_then(block_from_index),
        },
        Value::Number(_) => as_integer(item).and_then(block_from_index),
        Value::Object(_) => first_key(item, &BLOCK_KEYS)
            .filter(|inner| !inner.is_object())
            .and_then(parse_block),
        _ => None,
    }
}

fn block_from_index(n: i64) -> Option<BlockChoice> {
    match n {
        0 => Some(BlockChoice::Left),
        1 => Some(BlockChoice::Right),
        _ => None,
    }
}

fn normalize_blocks(value: Option<&Value>) -> Vec<Option<BlockChoice>> {
    let items = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            log::warn!("buildingBlockChoices is not an array ({}); ignoring", other);
            return Vec::new();
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            if item.is_null() {
                return None;
            }
            let choice = parse_block(item);
            if choice.is_none() {
                log::warn!(
                    "building block {} has unrecognised choice {}; left unanswered",
                    position,
                    item
                );
            }
            choice
        })
        .collect()
}

fn parse_color(item: &Value) -> Option<ColorSelection> {
    let (category, color) = match item {
        Value::Object(_) => {
            let category = first_key(item, &CATEGORY_KEYS)?;
            let color = first_key(item, &COLOR_ID_KEYS).and_then(|c| match c {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            });
            (category, color)
        }
        _ => (item, None),
    };

    let band = as_integer(category)
        .and_then(|n| u8::try_from(n).ok())
        .and_then(ActivationBand::from_category)?;
    Some(ColorSelection {
        color,
        category: band,
    })
}

fn normalize_colors(value: Option<&Value>) -> Vec<ColorSelection> {
    let items = match value {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            log::warn!("colorSelections is not an array ({}); ignoring", other);
            return Vec::new();
        }
    };

    items
        .iter()
        .filter_map(|item| {
            let parsed = parse_color(item);
            if parsed.is_none() {
                log::warn!("color selection {} has no activation category 0..=2; skipped", item);
            }
            parsed
        })
        .collect()
}

fn parse_token(item: &Value) -> Option<Instinct> {
    match item {
        Value::String(s) => Instinct::from_tag(s),
        Value::Object(_) => first_key(item, &INSTINCT_KEYS)
            .and_then(Value::as_str)
            .and_then(Instinct::from_tag),
        _ => None,
    }
}

fn normalize_details(value: Option<&Value>) -> InstinctTally {
    let mut tally = InstinctTally::default();
    match value {
        None | Some(Value::Null) => {}
        Some(Value::Array(items)) => {
            for item in items {
                match parse_token(item) {
                    Some(instinct) => tally.add(instinct, 1),
                    None => log::warn!("detail token {} is not sp, so or sx; skipped", item),
                }
            }
        }
        Some(Value::Object(counts)) => {
            for (key, count) in counts {
                let Some(instinct) = Instinct::from_tag(key) else {
                    log::warn!("detail count key '{}' is not sp, so or sx; skipped", key);
                    continue;
                };
                match as_integer(count).and_then(|n| u32::try_from(n).ok()) {
                    Some(n) => tally.add(instinct, n),
                    None => log::warn!("detail count {} for '{}' is not a non-negative integer; skipped", count, key),
                }
            }
        }
        Some(other) => {
            log::warn!("detailSelections is neither an array nor a count map ({}); ignoring", other);
        }
    }
    tally
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawSelectionSet {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_input_defaults() {
        let set = raw(json!({})).normalize();
        assert_eq!(set, SelectionSet::default());
        assert_eq!(set.answered_foundation(), 0);
    }

    #[test]
    fn test_null_fields_default() {
        let set = raw(json!({
            "foundationChoices": null,
            "buildingBlockChoices": null,
            "colorSelections": null,
            "detailSelections": null,
        }))
        .normalize();
        assert_eq!(set, SelectionSet::default());
    }

    #[test]
    fn test_foundation_coercion() {
        let set = raw(json!({
            "foundationChoices": [0, "1", 2.0, 3, -1, "x", null, 1]
        }))
        .normalize();
        assert_eq!(
            set.foundation_choices,
            [
                Some(StoneChoice::First),
                Some(StoneChoice::Second),
                Some(StoneChoice::Third),
                None,
                None,
                None,
                None,
                Some(StoneChoice::Second),
                None,
            ]
        );
    }

    #[test]
    fn test_foundation_extra_entries_ignored() {
        let set = raw(json!({ "foundationChoices": [1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2] })).normalize();
        assert!(set.foundation_choices.iter().all(|c| *c == Some(StoneChoice::Second)));
    }

    #[test]
    fn test_foundation_wrong_shape() {
        let set = raw(json!({ "foundationChoices": "0,1,2" })).normalize();
        assert_eq!(set.answered_foundation(), 0);
    }

    #[test]
    fn test_block_coercion_keeps_positions() {
        let set = raw(json!({
            "buildingBlockChoices": ["left", "R", 0, {"choice": "right"}, "up", 1, {"side": "l"}]
        }))
        .normalize();
        assert_eq!(
            set.building_block_choices,
            vec![
                Some(BlockChoice::Left),
                Some(BlockChoice::Right),
                Some(BlockChoice::Left),
                Some(BlockChoice::Right),
                None,
                Some(BlockChoice::Right),
                Some(BlockChoice::Left),
            ]
        );
        assert_eq!(set.block(4), None);
        assert_eq!(set.block(5), Some(BlockChoice::Right));
    }

    #[test]
    fn test_color_coercion() {
        let set = raw(json!({
            "colorSelections": [
                0,
                "2",
                {"color": "amber", "category": 1},
                {"id": 14, "state": 0},
                {"color": "grey"},
                7,
                {"activation": "1"}
            ]
        }))
        .normalize();
        assert_eq!(
            set.color_selections,
            vec![
                ColorSelection::new(ActivationBand::Healthy),
                ColorSelection::new(ActivationBand::Unhealthy),
                ColorSelection::with_color("amber", ActivationBand::Average),
                ColorSelection::with_color("14", ActivationBand::Healthy),
                ColorSelection::new(ActivationBand::Average),
            ]
        );
    }

    #[test]
    fn test_detail_tokens_from_array() {
        let set = raw(json!({
            "detailSelections": ["sp", "SP", {"instinct": "so"}, {"category": "sx"}, "xx", 3]
        }))
        .normalize();
        assert_eq!(set.detail_selections, InstinctTally::new(2, 1, 1));
    }

    #[test]
    fn test_detail_tokens_from_counts() {
        let set = raw(json!({
            "detailSelections": {"sp": 6, "so": "2", "sx": 2, "zz": 4}
        }))
        .normalize();
        assert_eq!(set.detail_selections, InstinctTally::new(6, 2, 2));

        let set = raw(json!({ "detailSelections": {"sp": -3, "so": 1} })).normalize();
        assert_eq!(set.detail_selections, InstinctTally::new(0, 1, 0));
    }

    #[test]
    fn test_from_trait_matches_normalize() {
        let r = raw(json!({ "foundationChoices": [2], "buildingBlockChoices": ["left"] }));
        assert_eq!(SelectionSet::from(&r), r.normalize());
    }
}
