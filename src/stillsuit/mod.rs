//! Tiny stillsuit - familiar sweat distillate
//!
//! Which modifiers a familiar's distillate grants depends on its tags. The
//! aggregator turns a tag set into per-modifier weights and ranks familiars
//! for a wanted modifier.

pub mod distillate;
pub mod distribution;
pub mod familiar;
pub mod tags;

pub use distillate::{distillate_adventures, distillate_modifier, parse_distillate_mods};
pub use distribution::{compute_distribution, ModifierWeights};
pub use familiar::{select_best, select_best_by, Familiar, FamiliarRoster, Tagged};
pub use tags::{DistillateModifier, FamiliarTag};
