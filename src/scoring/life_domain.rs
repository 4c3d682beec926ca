//! Life-domain impact calculator.
//!
//! ```text
//! score = clamp(0, 100, activation% + priority bonus + type bonus)
//! ```
//!
//! The priority bonus applies to the two domains aligned with the dominant
//! instinct.  The type bonus comes from the sensitivity table and is 0 for a
//! type without a row.

use serde::{Deserialize, Serialize};

use crate::reference::ReferenceTables;
use crate::types::{Instinct, LifeDomain, TypeNumber};

/// Scores at or above this use the high-impact text and the improving trend.
pub const HIGH_IMPACT_THRESHOLD: u32 = 60;

/// Scores below this are declining.
pub const DECLINING_THRESHOLD: u32 = 40;

/// Direction a domain is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Declining,
    Stable,
    Improving,
}

impl Trend {
    pub fn classify(score: u32) -> Self {
        if score < DECLINING_THRESHOLD {
            Trend::Declining
        } else if score < HIGH_IMPACT_THRESHOLD {
            Trend::Stable
        } else {
            Trend::Improving
        }
    }
}

/// Score and labels for one life domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeDomainScore {
    pub domain: LifeDomain,
    pub activation_score: u32,
    pub trend: Trend,
    pub short_term: String,
    pub medium_term: String,
    pub long_term: String,
    pub current_impact: String,
}

/// Score all eight domains, in [`LifeDomain::ALL`] order.
pub fn calculate_life_domains(
    tables: &ReferenceTables,
    primary: TypeNumber,
    activation_percentage: u32,
    dominant: Instinct,
) -> Vec<LifeDomainScore> {
    let aligned = tables.aligned_domains(dominant);
    let base = activation_percentage.min(100) as i64;

    LifeDomain::ALL
        .iter()
        .map(|&domain| {
            let priority_bonus = if aligned.contains(&domain) {
                tables.priority_bonus() as i64
            } else {
                0
            };
            let type_bonus = tables.type_bonus(primary, domain) as i64;
            let activation_score = (base + priority_bonus + type_bonus).clamp(0, 100) as u32;

            let trend = Trend::classify(activation_score);
            let row = match trend {
                Trend::Declining => &tables.trajectories().declining,
                Trend::Stable => &tables.trajectories().stable,
                Trend::Improving => &tables.trajectories().improving,
            };
            let (high, low) = tables.impact_text(domain);
            let current_impact = if activation_score >= HIGH_IMPACT_THRESHOLD {
                high
            } else {
                low
            };

            LifeDomainScore {
                domain,
                activation_score,
                trend,
                short_term: row[0].clone(),
                medium_term: row[1].clone(),
                long_term: row[2].clone(),
                current_impact: current_impact.to_string(),
            }
        })
        .collect()
}
