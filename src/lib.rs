//! Gearcraft - pantogram crafting resolver and stillsuit distillate aggregator
//!
//! Pure lookup and compute over static game tables. Callers own the game
//! state queries and the requests that act on the results.

pub mod core;
pub mod pantogram;
pub mod stillsuit;

pub use crate::core::error::{GearError, Result};
pub use pantogram::{
    compute_encoded_selection, compute_requirements, CompleteSelection, EncodedSelection,
    PartialSelection, RequirementSet,
};
pub use stillsuit::{compute_distribution, select_best, ModifierWeights};
