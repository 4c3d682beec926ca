//! Activation analyzer — color picks → activation level and band split.
//!
//! | Band      | Category | Weight |
//! |-----------|----------|--------|
//! | Healthy   | 0        | 2      |
//! | Average   | 1        | 1      |
//! | Unhealthy | 2        | 0      |
//!
//! The overall percentage is `round(100 × Σweight / (count × 2))`.  The band
//! split apportions the per-band counts so it always sums to 100.

use serde::{Deserialize, Serialize};

use super::percent::{apportion, round_percent};
use crate::types::{ActivationBand, ColorSelection};

/// Highest per-selection weight.
pub const MAX_WEIGHT: u64 = 2;

/// Activation percentage reported when nothing was selected.
pub const NEUTRAL_PERCENTAGE: u32 = 50;

/// Weight a band contributes to the activation sum.
pub fn band_weight(band: ActivationBand) -> u64 {
    match band {
        ActivationBand::Healthy => 2,
        ActivationBand::Average => 1,
        ActivationBand::Unhealthy => 0,
    }
}

/// Percentage split across the three bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationDistribution {
    pub healthy: u32,
    pub average: u32,
    pub unhealthy: u32,
}

impl ActivationDistribution {
    /// Split used when there are no selections.
    pub const NEUTRAL: ActivationDistribution = ActivationDistribution {
        healthy: 33,
        average: 34,
        unhealthy: 33,
    };

    pub fn get(&self, band: ActivationBand) -> u32 {
        match band {
            ActivationBand::Healthy => self.healthy,
            ActivationBand::Average => self.average,
            ActivationBand::Unhealthy => self.unhealthy,
        }
    }

    pub fn total(&self) -> u32 {
        self.healthy + self.average + self.unhealthy
    }
}

/// Activation analysis of the color phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationResult {
    /// Overall activation, `0..=100`.
    pub percentage: u32,
    pub distribution: ActivationDistribution,
    pub dominant: ActivationBand,
    pub secondary: ActivationBand,
    pub selection_count: usize,
}

impl ActivationResult {
    /// Result for an empty color phase.
    pub fn neutral() -> Self {
        Self {
            percentage: NEUTRAL_PERCENTAGE,
            distribution: ActivationDistribution::NEUTRAL,
            dominant: ActivationBand::Average,
            secondary: ActivationBand::Healthy,
            selection_count: 0,
        }
    }

    /// e.g. `"Healthy / Average"`.
    pub fn band_label(&self) -> String {
        format!("{} / {}", self.dominant.label(), self.secondary.label())
    }
}

/// Analyze color selections.  No selections ⇒ [`ActivationResult::neutral`].
pub fn analyze_activation(selections: &[ColorSelection]) -> ActivationResult {
    let mut counts = [0u64; 3];
    for selection in selections {
        counts[selection.category.category() as usize] += 1;
    }

    let Some(shares) = apportion(counts) else {
        log::debug!("Activation analyzer: no color selections, using neutral split");
        return ActivationResult::neutral();
    };

    let count = selections.len() as u64;
    let weighted: u64 = selections.iter().map(|s| band_weight(s.category)).sum();
    let percentage = round_percent(weighted, count * MAX_WEIGHT);

    // Highest count first; equal counts keep severity order.
    let mut ranked = ActivationBand::ALL;
    ranked.sort_by(|a, b| counts[b.category() as usize].cmp(&counts[a.category() as usize]));

    let result = ActivationResult {
        percentage,
        distribution: ActivationDistribution {
            healthy: shares[0],
            average: shares[1],
            unhealthy: shares[2],
        },
        dominant: ranked[0],
        secondary: ranked[1],
        selection_count: selections.len(),
    };
    log::debug!(
        "Activation analyzer: {}% over {} selections ({})",
        result.percentage,
        result.selection_count,
        result.band_label()
    );
    result
}
