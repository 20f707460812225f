//! Inventory snapshots - item counts supplied by the game-state layer

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::ItemId;

/// Read access to item counts
///
/// The game-state query layer implements this for live data; `Inventory`
/// implements it for snapshots and tests.
pub trait ItemCounts {
    /// Get current count of an item
    fn count(&self, item: ItemId) -> u32;

    /// Check whether at least `quantity` of an item is held
    fn has(&self, item: ItemId, quantity: u32) -> bool {
        self.count(item) >= quantity
    }
}

/// An in-memory snapshot of held items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    items: AHashMap<ItemId, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add items, returns the new count
    pub fn add(&mut self, item: ItemId, amount: u32) -> u32 {
        let entry = self.items.entry(item).or_insert(0);
        *entry = entry.saturating_add(amount);
        *entry
    }

    /// Try to remove items, returns amount actually removed
    pub fn remove(&mut self, item: ItemId, amount: u32) -> u32 {
        if let Some(entry) = self.items.get_mut(&item) {
            let removed = amount.min(*entry);
            *entry -= removed;
            if *entry == 0 {
                self.items.remove(&item);
            }
            removed
        } else {
            0
        }
    }

    /// Check if enough of all required items is held
    pub fn has_materials(&self, requirements: &[(ItemId, u32)]) -> bool {
        requirements.iter().all(|(item, amount)| self.has(*item, *amount))
    }

    /// Number of distinct items held
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemCounts for Inventory {
    fn count(&self, item: ItemId) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }
}

impl FromIterator<(ItemId, u32)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (ItemId, u32)>>(iter: T) -> Self {
        let mut inventory = Inventory::new();
        for (item, amount) in iter {
            inventory.add(item, amount);
        }
        inventory
    }
}
