//! Scoring pipeline — pure functions from canonical selections to results.
//!
//! ```text
//! foundation ──► type_scorer ──► primary ─┬─► influence
//!                                         ├─► mood_shift
//! colors ──────► activation ──► % ────────┤
//! details ─────► priority ────► dominant ─┴─► life_domain
//! ```
//!
//! Every function here takes its reference tables by shared reference and
//! allocates only its own result.

pub mod activation;
pub mod influence;
pub mod life_domain;
pub mod mood_shift;
pub mod percent;
pub mod priority;
pub mod type_scorer;

pub use activation::{analyze_activation, ActivationDistribution, ActivationResult};
pub use influence::{resolve_influence, InfluenceResult};
pub use life_domain::{calculate_life_domains, LifeDomainScore, Trend};
pub use mood_shift::{resolve_mood_shift, MoodShiftResult, MoodShiftStrengths};
pub use priority::{analyze_priority, PriorityEntry, PriorityFocusResult, PriorityPercentages};
pub use type_scorer::{score_types, PrimaryTypeResult, RankedType, TypeScoreVector};
