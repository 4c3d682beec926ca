//! Type Scorer — foundation stones → primary type.
//!
//! Every answered stone set adds its option's weights into a nine-slot score
//! vector.  The primary type is the highest score; equal scores go to the
//! lowest type number.  When nothing scored at all the result is
//! [`TypeNumber::DEFAULT`] with confidence 0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::reference::ReferenceTables;
use crate::types::{StoneChoice, TypeNumber, FOUNDATION_SETS};

/// Accumulated score per type.  Always holds all nine types.
pub type TypeScoreVector = BTreeMap<TypeNumber, u32>;

/// A (type, score) pair in a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedType {
    #[serde(rename = "type")]
    pub type_number: TypeNumber,
    pub score: u32,
}

/// Primary type determination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryTypeResult {
    pub number: TypeNumber,
    /// `round(100 × top / (top + second))`, in `0..=100`.
    pub confidence: u8,
    pub scores: TypeScoreVector,
    /// The three best-scoring types, best first.
    pub top_three: Vec<RankedType>,
}

/// Sum the option weights of every answered foundation set.
pub fn score_foundation(
    tables: &ReferenceTables,
    choices: &[Option<StoneChoice>; FOUNDATION_SETS],
) -> TypeScoreVector {
    let mut totals = [0u32; TypeNumber::COUNT];
    for (set, choice) in choices.iter().enumerate() {
        let Some(choice) = choice else { continue };
        for &(type_number, weight) in tables.weights(set, choice.index()) {
            let slot = &mut totals[type_number.index()];
            *slot = slot.saturating_add(weight);
        }
    }

    TypeNumber::ALL
        .iter()
        .map(|t| (*t, totals[t.index()]))
        .collect()
}

/// Rank a score vector: descending score, ascending type number on ties.
pub fn rank(scores: &TypeScoreVector) -> Vec<RankedType> {
    let mut ranked: Vec<RankedType> = TypeNumber::ALL
        .iter()
        .map(|t| RankedType {
            type_number: *t,
            score: scores.get(t).copied().unwrap_or(0),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score).then(a.type_number.cmp(&b.type_number)));
    ranked
}

/// Pick the primary type and confidence from a score vector.
pub fn determine_primary(scores: &TypeScoreVector) -> PrimaryTypeResult {
    let ranked = rank(scores);
    let top = ranked[0];
    let second = ranked[1].score;

    let (number, confidence) = if top.score == 0 {
        (TypeNumber::DEFAULT, 0)
    } else {
        let total = top.score as u64 + second as u64;
        (top.type_number, super::percent::round_percent(top.score as u64, total) as u8)
    };

    PrimaryTypeResult {
        number,
        confidence,
        scores: scores.clone(),
        top_three: ranked.into_iter().take(3).collect(),
    }
}

/// Score the foundation phase and determine the primary type.
pub fn score_types(
    tables: &ReferenceTables,
    choices: &[Option<StoneChoice>; FOUNDATION_SETS],
) -> PrimaryTypeResult {
    let scores = score_foundation(tables, choices);
    let result = determine_primary(&scores);
    log::debug!(
        "Type scorer: primary {} at {}% confidence from {} answered sets",
        result.number,
        result.confidence,
        choices.iter().filter(|c| c.is_some()).count()
    );
    result
}
