//! Canonical selection types for the four questionnaire phases.
//!
//! ```text
//! Phase 1  foundation      9 stone sets × 3 options  → [Option<StoneChoice>; 9]
//! Phase 2  building blocks ordered left/right picks  → Vec<Option<BlockChoice>>
//! Phase 3  colors          activation-tagged picks   → Vec<ColorSelection>
//! Phase 4  details         sp/so/sx tokens           → InstinctTally
//! ```
//!
//! The loosely-typed wire shape lives in [`crate::selection::RawSelectionSet`];
//! the normalizer turns it into a [`SelectionSet`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of foundation stone sets.
pub const FOUNDATION_SETS: usize = 9;

/// Options offered per foundation stone set.
pub const OPTIONS_PER_SET: usize = 3;

// ============================================================================
// Phase 1 — foundation stones
// ============================================================================

/// One of the three thematic options in a foundation stone set.
///
/// Serializes as `0`, `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StoneChoice {
    First,
    Second,
    Third,
}

/// Raised when a number outside `0..=2` is used as a stone choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stone choice {0} is outside 0..=2")]
pub struct InvalidStoneChoice(pub u8);

impl StoneChoice {
    /// Zero-based option index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Option for a zero-based index, `None` past the third option.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(StoneChoice::First),
            1 => Some(StoneChoice::Second),
            2 => Some(StoneChoice::Third),
            _ => None,
        }
    }
}

impl TryFrom<u8> for StoneChoice {
    type Error = InvalidStoneChoice;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Self::from_index(v as usize).ok_or(InvalidStoneChoice(v))
    }
}

impl From<StoneChoice> for u8 {
    fn from(c: StoneChoice) -> u8 {
        c as u8
    }
}

// ============================================================================
// Phase 2 — building blocks
// ============================================================================

/// A binary building-block pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockChoice {
    Left,
    Right,
}

// ============================================================================
// Phase 3 — colors / activation
// ============================================================================

/// Activation band a color selection is tagged with.
///
/// Category `0` is the highest activation (healthy), `2` the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationBand {
    Healthy,
    Average,
    Unhealthy,
}

impl ActivationBand {
    /// Bands in severity order, which is also the tie-break order.
    pub const ALL: [ActivationBand; 3] = [
        ActivationBand::Healthy,
        ActivationBand::Average,
        ActivationBand::Unhealthy,
    ];

    /// Band for a numeric category `0..=2`.
    pub fn from_category(category: u8) -> Option<Self> {
        match category {
            0 => Some(ActivationBand::Healthy),
            1 => Some(ActivationBand::Average),
            2 => Some(ActivationBand::Unhealthy),
            _ => None,
        }
    }

    /// Numeric category, `0` = healthy.
    pub fn category(self) -> u8 {
        self as u8
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            ActivationBand::Healthy => "Healthy",
            ActivationBand::Average => "Average",
            ActivationBand::Unhealthy => "Unhealthy",
        }
    }
}

/// A single color pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSelection {
    /// Content id of the color, if the UI supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Activation band the color belongs to.
    pub category: ActivationBand,
}

impl ColorSelection {
    pub fn new(category: ActivationBand) -> Self {
        Self {
            color: None,
            category,
        }
    }

    pub fn with_color(color: impl Into<String>, category: ActivationBand) -> Self {
        Self {
            color: Some(color.into()),
            category,
        }
    }
}

// ============================================================================
// Phase 4 — detail tokens
// ============================================================================

/// The three instinctual priority domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Instinct {
    /// Self-preservation.
    #[serde(rename = "sp")]
    SelfPreservation,
    /// Social.
    #[serde(rename = "so")]
    Social,
    /// One-to-one.
    #[serde(rename = "sx")]
    OneToOne,
}

impl Instinct {
    /// Fixed precedence used for tie-breaks: sp > so > sx.
    pub const ALL: [Instinct; 3] = [Instinct::SelfPreservation, Instinct::Social, Instinct::OneToOne];

    /// Parse a short tag (`"sp"`, `"so"`, `"sx"`), case-insensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "sp" => Some(Instinct::SelfPreservation),
            "so" => Some(Instinct::Social),
            "sx" => Some(Instinct::OneToOne),
            _ => None,
        }
    }

    /// Short tag.
    pub fn tag(self) -> &'static str {
        match self {
            Instinct::SelfPreservation => "sp",
            Instinct::Social => "so",
            Instinct::OneToOne => "sx",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Token counts per instinct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstinctTally {
    #[serde(default)]
    pub sp: u32,
    #[serde(default)]
    pub so: u32,
    #[serde(default)]
    pub sx: u32,
}

impl InstinctTally {
    pub fn new(sp: u32, so: u32, sx: u32) -> Self {
        Self { sp, so, sx }
    }

    pub fn get(&self, instinct: Instinct) -> u32 {
        match instinct {
            Instinct::SelfPreservation => self.sp,
            Instinct::Social => self.so,
            Instinct::OneToOne => self.sx,
        }
    }

    fn slot(&mut self, instinct: Instinct) -> &mut u32 {
        match instinct {
            Instinct::SelfPreservation => &mut self.sp,
            Instinct::Social => &mut self.so,
            Instinct::OneToOne => &mut self.sx,
        }
    }

    /// Add `count` tokens, saturating.
    pub fn add(&mut self, instinct: Instinct, count: u32) {
        let slot = self.slot(instinct);
        *slot = slot.saturating_add(count);
    }

    /// Remove one token if any are present.
    pub fn remove_one(&mut self, instinct: Instinct) {
        let slot = self.slot(instinct);
        *slot = slot.saturating_sub(1);
    }

    /// Total tokens across all three instincts.
    pub fn total(&self) -> u64 {
        self.sp as u64 + self.so as u64 + self.sx as u64
    }
}

// ============================================================================
// SelectionSet
// ============================================================================

/// Canonical, fully-populated selections for one assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSet {
    /// One slot per foundation stone set; `None` = unanswered.
    #[serde(default)]
    pub foundation_choices: [Option<StoneChoice>; FOUNDATION_SETS],
    /// Building-block picks in order; `None` keeps an unanswered position.
    #[serde(default)]
    pub building_block_choices: Vec<Option<BlockChoice>>,
    /// Color picks.
    #[serde(default)]
    pub color_selections: Vec<ColorSelection>,
    /// Detail-token allocation.
    #[serde(default)]
    pub detail_selections: InstinctTally,
}

impl SelectionSet {
    /// Building-block pick at a zero-based position, if answered.
    pub fn block(&self, position: usize) -> Option<BlockChoice> {
        self.building_block_choices.get(position).copied().flatten()
    }

    /// Number of answered foundation sets.
    pub fn answered_foundation(&self) -> usize {
        self.foundation_choices.iter().filter(|c| c.is_some()).count()
    }

    /// Number of answered building blocks.
    pub fn answered_blocks(&self) -> usize {
        self.building_block_choices.iter().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stone_choice_serializes_as_index() {
        assert_eq!(serde_json::to_string(&StoneChoice::Third).unwrap(), "2");
        assert_eq!(serde_json::from_str::<StoneChoice>("1").unwrap(), StoneChoice::Second);
        assert!(serde_json::from_str::<StoneChoice>("3").is_err());
    }

    #[test]
    fn test_stone_choice_try_from_error() {
        assert_eq!(StoneChoice::try_from(0), Ok(StoneChoice::First));
        assert_eq!(StoneChoice::try_from(3), Err(InvalidStoneChoice(3)));

        let err = serde_json::from_str::<StoneChoice>("7").unwrap_err();
        assert!(err.to_string().contains("stone choice 7 is outside 0..=2"), "{}", err);
    }

    #[test]
    fn test_instinct_tags() {
        for instinct in Instinct::ALL {
            assert_eq!(Instinct::from_tag(instinct.tag()), Some(instinct));
        }
        assert_eq!(Instinct::from_tag(" SX "), Some(Instinct::OneToOne));
        assert_eq!(Instinct::from_tag("xx"), None);
        assert_eq!(serde_json::to_string(&Instinct::Social).unwrap(), "\"so\"");
    }

    #[test]
    fn test_tally_add_remove() {
        let mut tally = InstinctTally::default();
        tally.add(Instinct::Social, 3);
        tally.remove_one(Instinct::Social);
        tally.remove_one(Instinct::OneToOne);
        assert_eq!(tally, InstinctTally::new(0, 2, 0));
        assert_eq!(tally.total(), 2);
    }

    #[test]
    fn test_block_lookup_skips_unanswered() {
        let set = SelectionSet {
            building_block_choices: vec![Some(BlockChoice::Left), None],
            ..Default::default()
        };
        assert_eq!(set.block(0), Some(BlockChoice::Left));
        assert_eq!(set.block(1), None);
        assert_eq!(set.block(7), None);
        assert_eq!(set.answered_blocks(), 1);
    }

    #[test]
    fn test_selection_set_deserializes_with_defaults() {
        let set: SelectionSet =
            serde_json::from_str(r#"{"foundationChoices":[0,null,2,null,null,null,null,null,null]}"#)
                .unwrap();
        assert_eq!(set.foundation_choices[0], Some(StoneChoice::First));
        assert_eq!(set.foundation_choices[2], Some(StoneChoice::Third));
        assert_eq!(set.answered_foundation(), 2);
        assert!(set.color_selections.is_empty());
        assert_eq!(set.detail_selections.total(), 0);
    }
}
