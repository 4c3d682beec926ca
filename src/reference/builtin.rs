//! Built-in reference tables.
//!
//! These are the tables the questionnaire ships with.  A deployment can
//! replace them wholesale with a YAML file (see [`super::ReferenceData`]).

use std::collections::BTreeMap;

use crate::types::{Instinct, LifeDomain, TypeNumber};

use super::{
    ArrowEntry, ImpactText, PriorityAlignment, ReferenceData, SensitivityEntry, TrajectoryTable,
    WeightEntry, WingEntry,
};

/// Bonus added to the two domains aligned with the dominant priority.
pub const PRIORITY_BONUS: i32 = 15;

const fn t(n: u8) -> TypeNumber {
    match TypeNumber::new(n) {
        Some(t) => t,
        None => panic!("built-in table references a type outside 1..=9"),
    }
}

// ============================================================================
// Foundation weights: 9 stone sets × 3 options → (type, weight)
// ============================================================================

type OptionWeights = &'static [(TypeNumber, u32)];

/// Indexed `[set][option]`.
const FOUNDATION_WEIGHTS: [[OptionWeights; 3]; 9] = [
    // Set 1
    [
        &[(t(1), 2), (t(9), 2), (t(8), 1)],
        &[(t(2), 3), (t(3), 1), (t(4), 1)],
        &[(t(5), 3), (t(6), 1), (t(7), 1)],
    ],
    // Set 2
    [
        &[(t(1), 2), (t(6), 1), (t(3), 1)],
        &[(t(4), 3), (t(9), 2)],
        &[(t(7), 3), (t(8), 2)],
    ],
    // Set 3
    [
        &[(t(1), 2), (t(5), 1), (t(6), 1)],
        &[(t(3), 3), (t(8), 1), (t(2), 1)],
        &[(t(9), 3), (t(4), 1), (t(6), 1)],
    ],
    // Set 4
    [
        &[(t(8), 3), (t(3), 2)],
        &[(t(1), 2), (t(6), 2), (t(5), 1)],
        &[(t(2), 2), (t(9), 1), (t(4), 1)],
    ],
    // Set 5
    [
        &[(t(1), 2), (t(4), 2), (t(5), 1)],
        &[(t(2), 3), (t(7), 2)],
        &[(t(8), 2), (t(9), 2), (t(6), 1)],
    ],
    // Set 6
    [
        &[(t(1), 2), (t(3), 1), (t(8), 1)],
        &[(t(4), 2), (t(6), 2), (t(9), 1)],
        &[(t(5), 2), (t(7), 2), (t(2), 1)],
    ],
    // Set 7
    [
        &[(t(7), 3), (t(2), 1), (t(3), 1)],
        &[(t(1), 2), (t(4), 1), (t(9), 1)],
        &[(t(6), 2), (t(5), 2), (t(8), 1)],
    ],
    // Set 8
    [
        &[(t(1), 2), (t(2), 1), (t(7), 1)],
        &[(t(3), 2), (t(7), 2), (t(8), 1)],
        &[(t(4), 2), (t(5), 2), (t(6), 1)],
    ],
    // Set 9
    [
        &[(t(8), 2), (t(7), 1), (t(3), 2)],
        &[(t(1), 2), (t(5), 1), (t(6), 1)],
        &[(t(2), 2), (t(6), 2), (t(9), 2)],
    ],
];

// ============================================================================
// Wings and arrows
// ============================================================================

/// (type, left wing, right wing)
const WINGS: [(TypeNumber, TypeNumber, TypeNumber); 9] = [
    (t(1), t(9), t(2)),
    (t(2), t(1), t(3)),
    (t(3), t(2), t(4)),
    (t(4), t(3), t(5)),
    (t(5), t(4), t(6)),
    (t(6), t(5), t(7)),
    (t(7), t(6), t(8)),
    (t(8), t(7), t(9)),
    (t(9), t(8), t(1)),
];

/// (type, integration, disintegration)
const ARROWS: [(TypeNumber, TypeNumber, TypeNumber); 9] = [
    (t(1), t(7), t(4)),
    (t(2), t(4), t(8)),
    (t(3), t(6), t(9)),
    (t(4), t(1), t(2)),
    (t(5), t(8), t(7)),
    (t(6), t(9), t(3)),
    (t(7), t(5), t(1)),
    (t(8), t(2), t(5)),
    (t(9), t(3), t(6)),
];

// ============================================================================
// Life domains
// ============================================================================

const PRIORITY_DOMAINS: [(Instinct, [LifeDomain; 2]); 3] = [
    (Instinct::SelfPreservation, [LifeDomain::Health, LifeDomain::Finances]),
    (Instinct::Social, [LifeDomain::Family, LifeDomain::SocialConnection]),
    (Instinct::OneToOne, [LifeDomain::Relationships, LifeDomain::Growth]),
];

/// Per-type domain bonuses in `LifeDomain::ALL` order:
/// health, career, finances, relationships, family, social, growth, spirituality.
const SENSITIVITY: [(TypeNumber, [i32; 8]); 9] = [
    (t(1), [5, 5, 5, -5, 0, 0, 5, 0]),
    (t(2), [-5, 0, 0, 10, 10, 5, 0, 0]),
    (t(3), [0, 10, 5, -5, 0, 5, 0, -5]),
    (t(4), [0, 0, -5, 5, 0, -5, 10, 5]),
    (t(5), [-5, 5, 5, -5, 0, -10, 10, 0]),
    (t(6), [0, 5, 5, 5, 10, 0, 0, 0]),
    (t(7), [5, 0, -5, 0, 0, 10, 5, 0]),
    (t(8), [5, 10, 5, 0, 5, 0, 0, -5]),
    (t(9), [0, -5, 0, 5, 5, 5, 0, 10]),
];

/// (domain, high-impact text, low-impact text)
const IMPACT_TEXTS: [(LifeDomain, &str, &str); 8] = [
    (
        LifeDomain::Health,
        "Energy is available and routines of rest and movement are holding.",
        "Stress is showing up in the body; sleep and recovery need attention.",
    ),
    (
        LifeDomain::Career,
        "Work draws on your strengths and effort turns into visible progress.",
        "Work feels effortful or misaligned and progress is hard to see.",
    ),
    (
        LifeDomain::Finances,
        "Money decisions are steady and grounded in clear priorities.",
        "Money decisions are reactive and security feels uncertain.",
    ),
    (
        LifeDomain::Relationships,
        "Close bonds feel open, reciprocal and nourishing.",
        "Close bonds carry tension or distance that is hard to bridge.",
    ),
    (
        LifeDomain::Family,
        "Family ties offer support and a sense of belonging.",
        "Family dynamics pull on your reserves more than they replenish them.",
    ),
    (
        LifeDomain::SocialConnection,
        "You feel part of a wider circle and contribute to it freely.",
        "Social contact feels draining or out of reach.",
    ),
    (
        LifeDomain::Growth,
        "You are learning, stretching and integrating new perspectives.",
        "Growth has stalled behind old patterns and defensive habits.",
    ),
    (
        LifeDomain::Spirituality,
        "A sense of meaning and inner quiet is easy to return to.",
        "Meaning feels thin and inner quiet is hard to find.",
    ),
];

/// `[trend][timeframe]`, trend = declining / stable / improving,
/// timeframe = short / medium / long.
const TRAJECTORIES: [[&str; 3]; 3] = [
    ["Under strain", "Gradual erosion", "Risk of depletion"],
    ["Holding steady", "Maintaining balance", "Sustained equilibrium"],
    ["Gaining momentum", "Building strength", "Flourishing"],
];

// ============================================================================
// Assembly
// ============================================================================

/// Assemble the built-in tables into owned [`ReferenceData`].
pub(super) fn reference_data() -> ReferenceData {
    let foundation_weights = FOUNDATION_WEIGHTS
        .iter()
        .map(|set| {
            set.iter()
                .map(|option| {
                    option
                        .iter()
                        .map(|&(type_number, weight)| WeightEntry {
                            type_number,
                            weight,
                        })
                        .collect()
                })
                .collect()
        })
        .collect();

    let wings = WINGS
        .iter()
        .map(|&(type_number, left, right)| WingEntry {
            type_number,
            left,
            right,
        })
        .collect();

    let arrows = ARROWS
        .iter()
        .map(|&(type_number, integration, disintegration)| ArrowEntry {
            type_number,
            integration,
            disintegration,
        })
        .collect();

    let priority_domains = PRIORITY_DOMAINS
        .iter()
        .map(|&(instinct, domains)| PriorityAlignment { instinct, domains })
        .collect();

    let sensitivity = SENSITIVITY
        .iter()
        .map(|(type_number, bonuses)| SensitivityEntry {
            type_number: *type_number,
            bonuses: LifeDomain::ALL
                .iter()
                .zip(bonuses.iter())
                .filter(|(_, bonus)| **bonus != 0)
                .map(|(domain, bonus)| (*domain, *bonus))
                .collect::<BTreeMap<_, _>>(),
        })
        .collect();

    let impact_texts = IMPACT_TEXTS
        .iter()
        .map(|&(domain, high, low)| ImpactText {
            domain,
            high: high.to_string(),
            low: low.to_string(),
        })
        .collect();

    let row = |r: &[&str; 3]| -> [String; 3] { r.map(str::to_string) };
    let trajectories = TrajectoryTable {
        declining: row(&TRAJECTORIES[0]),
        stable: row(&TRAJECTORIES[1]),
        improving: row(&TRAJECTORIES[2]),
    };

    ReferenceData {
        foundation_weights,
        wings,
        arrows,
        priority_domains,
        sensitivity,
        impact_texts,
        trajectories,
        priority_bonus: PRIORITY_BONUS,
    }
}
