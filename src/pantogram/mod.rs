//! Portable pantogram - configurable pants crafting
//!
//! A selection picks one variant in each of five slots. The three sacrifice
//! slots may consume a component item; the resolver prices a selection and
//! encodes it into the request fields the game expects.

pub mod cost;
pub mod encoding;
pub mod plan;
pub mod requirements;
pub mod resolver;
pub mod slots;
pub mod tables;

pub use cost::{Sentinel, SlotCost};
pub use encoding::{EncodedSelection, SacrificeCode};
pub use plan::{plan_pants, PantogramRequest, PlanError};
pub use requirements::{Requirement, RequirementSet, Shortfall};
pub use resolver::{
    compute_encoded_selection, compute_requirements, CompleteSelection, Configurator,
    PartialSelection,
};
pub use slots::{Alignment, Element, LeftSacrifice, MiddleSacrifice, RightSacrifice, Slot, SlotVariant};
pub use tables::{default_tables, SacrificeTables};
