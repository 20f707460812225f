//! Requirement sets - component items a selection consumes

use serde::{Deserialize, Serialize};

use crate::core::inventory::ItemCounts;
use crate::core::types::{ComponentItem, ItemId};

/// One required component and how many are consumed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub item: ComponentItem,
    pub quantity: u32,
}

/// A requirement the inventory does not cover
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub item: ComponentItem,
    pub needed: u32,
    pub held: u32,
}

/// Component items required by a selection
///
/// Keeps first-seen order. Entries are keyed by item id: adding an id already
/// present sums quantities and keeps the first name seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementSet {
    entries: Vec<Requirement>,
}

impl RequirementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a requirement, summing with any existing entry for the item id
    pub fn add(&mut self, item: &ComponentItem, quantity: u32) {
        if let Some(existing) = self.entries.iter_mut().find(|r| r.item.id == item.id) {
            if existing.item.name != item.name {
                tracing::debug!(
                    "Item #{} listed as both {:?} and {:?}",
                    item.id,
                    existing.item.name,
                    item.name
                );
            }
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.entries.push(Requirement {
                item: item.clone(),
                quantity,
            });
        }
    }

    /// Required quantity of an item (0 when not required)
    pub fn quantity_of(&self, item: ItemId) -> u32 {
        self.entries
            .iter()
            .filter(|r| r.item.id == item)
            .map(|r| r.quantity)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Requirement> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(item id, quantity)` pairs
    pub fn as_pairs(&self) -> Vec<(ItemId, u32)> {
        self.entries.iter().map(|r| (r.item.id, r.quantity)).collect()
    }

    /// Requirements not covered by the given counts
    pub fn shortfalls(&self, counts: &impl ItemCounts) -> Vec<Shortfall> {
        self.entries
            .iter()
            .filter(|r| !counts.has(r.item.id, r.quantity))
            .map(|r| Shortfall {
                item: r.item.clone(),
                needed: r.quantity,
                held: counts.count(r.item.id),
            })
            .collect()
    }

    /// Check that every requirement is covered
    pub fn is_satisfied_by(&self, counts: &impl ItemCounts) -> bool {
        self.entries.iter().all(|r| counts.has(r.item.id, r.quantity))
    }
}

impl<'a> IntoIterator for &'a RequirementSet {
    type Item = &'a Requirement;
    type IntoIter = std::slice::Iter<'a, Requirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
