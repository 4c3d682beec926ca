//! # tower-profile
//!
//! Deterministic personality-classification engine for the tower
//! questionnaire.
//!
//! A user works through four phases (foundation stones, building blocks,
//! colors, detail tokens).  The [`Engine`] turns those selections into a
//! [`ProfileReport`]: a primary type with confidence, a wing influence, a
//! mood-shift pair, an activation level, a priority stack and eight
//! life-domain impact scores.
//!
//! ```no_run
//! use tower_profile::{Engine, RawSelectionSet};
//!
//! let raw: RawSelectionSet = serde_json::from_str(r#"{"foundationChoices": [0, 1, 2]}"#)?;
//! let report = Engine::builtin().assess_raw(&raw);
//! println!("{}", report.headline());
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod assessment;
pub mod engine;
pub mod reference;
pub mod scoring;
pub mod selection;
pub mod server;
pub mod types;

pub use assessment::{reduce, Action, AssessmentState, Phase};
pub use engine::{Engine, ProfileReport};
pub use reference::{ReferenceData, ReferenceError, ReferenceTables};
pub use selection::{normalize, RawSelectionSet};
pub use types::{SelectionSet, TypeNumber};

/// Library version.
pub const VERSION: &str = "0.3.0";
