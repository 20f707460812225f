//! What a sacrifice variant consumes

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::GearError;
use crate::core::types::ComponentItem;

/// Marker for a variant that consumes nothing
///
/// Each sacrifice slot has exactly two free variants, told apart by these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Sentinel {
    /// Encoded as `-1`
    First,
    /// Encoded as `-2`
    Second,
}

impl Sentinel {
    pub fn code(self) -> i32 {
        match self {
            Sentinel::First => -1,
            Sentinel::Second => -2,
        }
    }
}

impl TryFrom<i32> for Sentinel {
    type Error = GearError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Sentinel::First),
            -2 => Ok(Sentinel::Second),
            other => Err(GearError::InvalidTable(format!(
                "sentinel must be -1 or -2, got {}",
                other
            ))),
        }
    }
}

impl From<Sentinel> for i32 {
    fn from(value: Sentinel) -> Self {
        value.code()
    }
}

/// Cost of one sacrifice variant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotCost {
    /// Free variant, no component item required
    NoComponent(Sentinel),
    /// Consumes `quantity` of `item`
    Component { item: ComponentItem, quantity: u32 },
}

impl SlotCost {
    pub fn component(id: u32, name: impl Into<String>, quantity: u32) -> Self {
        SlotCost::Component {
            item: ComponentItem::new(id, name),
            quantity,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, SlotCost::NoComponent(_))
    }

    /// The consumed item and quantity, if any
    pub fn requirement(&self) -> Option<(&ComponentItem, u32)> {
        match self {
            SlotCost::NoComponent(_) => None,
            SlotCost::Component { item, quantity } => Some((item, *quantity)),
        }
    }

    /// The `cost` half of the request pair: sentinel code or item id
    pub fn cost_code(&self) -> i64 {
        match self {
            SlotCost::NoComponent(sentinel) => i64::from(sentinel.code()),
            SlotCost::Component { item, .. } => i64::from(item.id.0),
        }
    }

    /// The `quantity` half of the request pair (0 for free variants)
    pub fn quantity(&self) -> u32 {
        match self {
            SlotCost::NoComponent(_) => 0,
            SlotCost::Component { quantity, .. } => *quantity,
        }
    }
}

impl fmt::Display for SlotCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotCost::NoComponent(_) => f.write_str("free"),
            SlotCost::Component { item, quantity } => write!(f, "{} x{}", item.name, quantity),
        }
    }
}
