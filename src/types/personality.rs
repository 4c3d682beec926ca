//! Personality type identifiers, shift strengths, and life domains.
//!
//! All three are closed vocabularies: invalid values are rejected when they
//! enter the crate (at deserialization or construction), so scorers never
//! handle an out-of-range type number or an unknown domain name.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::selection::BlockChoice;

// ============================================================================
// Type numbers
// ============================================================================

/// A personality type number in `1..=9`.
///
/// Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TypeNumber(u8);

/// Raised when a number outside `1..=9` is used as a type number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("type number {0} is outside 1..=9")]
pub struct InvalidTypeNumber(pub u8);

impl TypeNumber {
    /// Number of personality types.
    pub const COUNT: usize = 9;

    /// Type reported when no foundation selection produced a score.
    pub const DEFAULT: TypeNumber = TypeNumber(9);

    /// All nine types in ascending order.
    pub const ALL: [TypeNumber; 9] = [
        TypeNumber(1),
        TypeNumber(2),
        TypeNumber(3),
        TypeNumber(4),
        TypeNumber(5),
        TypeNumber(6),
        TypeNumber(7),
        TypeNumber(8),
        TypeNumber(9),
    ];

    /// Create a type number, returning `None` outside `1..=9`.
    pub const fn new(n: u8) -> Option<Self> {
        if n >= 1 && n <= 9 {
            Some(Self(n))
        } else {
            None
        }
    }

    /// The raw number.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index for table lookups.
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Inverse of [`TypeNumber::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl TryFrom<u8> for TypeNumber {
    type Error = InvalidTypeNumber;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n).ok_or(InvalidTypeNumber(n))
    }
}

impl From<TypeNumber> for u8 {
    fn from(t: TypeNumber) -> u8 {
        t.0
    }
}

impl fmt::Display for TypeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Strength qualifier
// ============================================================================

/// How pronounced a wing or mood shift is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strength {
    Strong,
    Moderate,
}

impl Strength {
    /// Left ⇒ strong, right ⇒ moderate.
    pub fn from_choice(choice: BlockChoice) -> Self {
        match choice {
            BlockChoice::Left => Strength::Strong,
            BlockChoice::Right => Strength::Moderate,
        }
    }
}

// ============================================================================
// Life domains
// ============================================================================

/// The eight life areas scored by the impact calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeDomain {
    Health,
    Career,
    Finances,
    Relationships,
    Family,
    SocialConnection,
    Growth,
    Spirituality,
}

impl LifeDomain {
    /// All eight domains in report order.
    pub const ALL: [LifeDomain; 8] = [
        LifeDomain::Health,
        LifeDomain::Career,
        LifeDomain::Finances,
        LifeDomain::Relationships,
        LifeDomain::Family,
        LifeDomain::SocialConnection,
        LifeDomain::Growth,
        LifeDomain::Spirituality,
    ];

    /// Zero-based index in report order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            LifeDomain::Health => "Health",
            LifeDomain::Career => "Career",
            LifeDomain::Finances => "Finances",
            LifeDomain::Relationships => "Relationships",
            LifeDomain::Family => "Family",
            LifeDomain::SocialConnection => "Social Connection",
            LifeDomain::Growth => "Personal Growth",
            LifeDomain::Spirituality => "Spirituality",
        }
    }
}

impl fmt::Display for LifeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Tests
// ============================================================================
