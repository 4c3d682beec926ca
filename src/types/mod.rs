//! Closed vocabularies shared by every scorer.

pub mod personality;
pub mod selection;

pub use personality::{InvalidTypeNumber, LifeDomain, Strength, TypeNumber};
pub use selection::{
    ActivationBand, BlockChoice, ColorSelection, Instinct, InstinctTally, SelectionSet,
    InvalidStoneChoice, StoneChoice, FOUNDATION_SETS, OPTIONS_PER_SET,
};
