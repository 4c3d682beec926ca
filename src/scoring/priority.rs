//! Priority-focus analyzer — detail tokens → ranked instinct stack.
//!
//! Percentages are `round(100 × count / total)` apportioned so they sum to
//! 100.  The stack is sorted by percentage, highest first; equal
//! percentages keep the fixed precedence sp > so > sx.

use serde::{Deserialize, Serialize};

use super::percent::apportion;
use crate::types::{Instinct, InstinctTally};

/// Percentage per instinct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityPercentages {
    pub sp: u32,
    pub so: u32,
    pub sx: u32,
}

impl PriorityPercentages {
    pub fn get(&self, instinct: Instinct) -> u32 {
        match instinct {
            Instinct::SelfPreservation => self.sp,
            Instinct::Social => self.so,
            Instinct::OneToOne => self.sx,
        }
    }

    pub fn total(&self) -> u32 {
        self.sp + self.so + self.sx
    }
}

/// One rung of the priority stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityEntry {
    pub category: Instinct,
    pub percentage: u32,
}

/// Priority-focus analysis of the detail phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityFocusResult {
    pub percentages: PriorityPercentages,
    /// Exactly three entries, highest percentage first.
    pub stack: [PriorityEntry; 3],
    pub token_count: u64,
}

impl PriorityFocusResult {
    /// Top of the stack.
    pub fn dominant(&self) -> Instinct {
        self.stack[0].category
    }

    /// e.g. `"sp/so/sx"`.
    pub fn stack_notation(&self) -> String {
        self.stack
            .iter()
            .map(|e| e.category.tag())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Analyze a token tally.  No tokens ⇒ all zero, stack in precedence order.
pub fn analyze_priority(tally: &InstinctTally) -> PriorityFocusResult {
    let counts = Instinct::ALL.map(|i| tally.get(i) as u64);
    let shares = apportion(counts).unwrap_or([0; 3]);

    let percentages = PriorityPercentages {
        sp: shares[0],
        so: shares[1],
        sx: shares[2],
    };

    let mut ranked = Instinct::ALL;
    ranked.sort_by(|a, b| percentages.get(*b).cmp(&percentages.get(*a)));
    let stack = ranked.map(|category| PriorityEntry {
        category,
        percentage: percentages.get(category),
    });

    let result = PriorityFocusResult {
        percentages,
        stack,
        token_count: tally.total(),
    };
    log::debug!(
        "Priority analyzer: stack {} from {} tokens",
        result.stack_notation(),
        result.token_count
    );
    result
}
