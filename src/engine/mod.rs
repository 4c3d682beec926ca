//! The profile engine — one call from selections to a complete report.
//!
//! An [`Engine`] owns validated reference tables and is immutable after
//! construction, so a single instance can serve any number of concurrent
//! callers without locking.
//!
//! # Building-block positions
//!
//! | Position | Drives                          |
//! |----------|---------------------------------|
//! | 1        | wing (left / right of the pair) |
//! | 2        | wing strength                   |
//! | 3        | good-mood shift strength        |
//! | 4        | bad-mood shift strength         |

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::reference::{ReferenceData, ReferenceError, ReferenceTables};
use crate::scoring::{
    analyze_activation, analyze_priority, calculate_life_domains, resolve_influence,
    resolve_mood_shift, score_types, ActivationResult, InfluenceResult, LifeDomainScore,
    MoodShiftResult, PrimaryTypeResult, PriorityFocusResult,
};
use crate::selection::RawSelectionSet;
use crate::types::SelectionSet;

/// Zero-based building-block position selecting the wing.
pub const WING_BLOCK: usize = 0;
/// Zero-based building-block position setting wing strength.
pub const WING_STRENGTH_BLOCK: usize = 1;
/// Zero-based building-block position setting good-mood strength.
pub const GOOD_MOOD_BLOCK: usize = 2;
/// Zero-based building-block position setting bad-mood strength.
pub const BAD_MOOD_BLOCK: usize = 3;

/// Complete typed profile for one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport {
    pub primary_type: PrimaryTypeResult,
    /// `None` when the wing block was not answered.
    pub influence: Option<InfluenceResult>,
    /// `None` when either mood block was not answered.
    pub mood_shift: Option<MoodShiftResult>,
    pub activation: ActivationResult,
    pub priority_focus: PriorityFocusResult,
    /// Eight entries in fixed domain order.
    pub life_domains: Vec<LifeDomainScore>,
}

impl ProfileReport {
    /// Short headline such as `"1w9 sp/so/sx"`.
    pub fn headline(&self) -> String {
        let primary = self.primary_type.number;
        let core = match &self.influence {
            Some(influence) => influence.notation(primary),
            None => primary.to_string(),
        };
        format!("{} {}", core, self.priority_focus.stack_notation())
    }
}

/// Deterministic classification engine.
#[derive(Debug, Clone)]
pub struct Engine {
    tables: ReferenceTables,
}

impl Engine {
    /// Build an engine from reference data, validating every table.
    pub fn new(reference: &ReferenceData) -> Result<Self, ReferenceError> {
        Ok(Self {
            tables: reference.compile()?,
        })
    }

    /// Engine over the built-in tables.
    pub fn builtin() -> Self {
        Self::new(ReferenceData::builtin()).expect("built-in reference tables are inconsistent")
    }

    /// Engine over tables loaded from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ReferenceError> {
        Self::new(&ReferenceData::from_yaml_file(path)?)
    }

    /// The validated tables in use.
    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// Run the full pipeline over canonical selections.
    pub fn assess(&self, selections: &SelectionSet) -> ProfileReport {
        let tables = &self.tables;

        let primary_type = score_types(tables, &selections.foundation_choices);
        let primary = primary_type.number;

        let influence = resolve_influence(
            tables,
            primary,
            selections.block(WING_BLOCK),
            selections.block(WING_STRENGTH_BLOCK),
        );
        let mood_shift = resolve_mood_shift(
            tables,
            primary,
            selections.block(GOOD_MOOD_BLOCK),
            selections.block(BAD_MOOD_BLOCK),
        );

        let activation = analyze_activation(&selections.color_selections);
        let priority_focus = analyze_priority(&selections.detail_selections);
        let life_domains = calculate_life_domains(
            tables,
            primary,
            activation.percentage,
            priority_focus.dominant(),
        );

        let report = ProfileReport {
            primary_type,
            influence,
            mood_shift,
            activation,
            priority_focus,
            life_domains,
        };
        log::debug!("Assessment complete: {}", report.headline());
        report
    }

    /// Normalize raw UI selections, then assess.
    pub fn assess_raw(&self, raw: &RawSelectionSet) -> ProfileReport {
        self.assess(&raw.normalize())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Tests
// ============================================================================
