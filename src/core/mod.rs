pub mod config;
pub mod error;
pub mod inventory;
pub mod types;

pub use config::{config, GearConfig};
pub use error::{GearError, Result};
pub use inventory::{Inventory, ItemCounts};
pub use types::{ComponentItem, ItemId};
