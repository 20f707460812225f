//! Sacrifice tables - what each sacrifice variant consumes
//!
//! The built-in tables match the game. Tables can also be loaded from TOML,
//! which is how alternative or test data is supplied. Every table is total:
//! each variant of each sacrifice slot has exactly one cost.

use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::core::error::{GearError, Result};
use crate::core::types::ComponentItem;
use crate::pantogram::cost::{Sentinel, SlotCost};
use crate::pantogram::slots::{LeftSacrifice, MiddleSacrifice, RightSacrifice, SlotVariant};

/// Costs for the three sacrifice slots, indexed by variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SacrificeTables {
    left: Vec<SlotCost>,
    middle: Vec<SlotCost>,
    right: Vec<SlotCost>,
}

impl SacrificeTables {
    /// The game's tables
    pub fn with_defaults() -> Self {
        use Sentinel::{First, Second};
        use SlotCost::NoComponent;

        // Entries are in variant order.
        let left = vec![
            NoComponent(First),
            NoComponent(Second),
            SlotCost::component(464, "red pixel potion", 1),
            SlotCost::component(830, "royal jelly", 1),
            SlotCost::component(2164, "scented massage oil", 1),
            SlotCost::component(1334, "Cherry Cloaca Cola", 1),
            SlotCost::component(5789, "bubblin' crude", 1),
            SlotCost::component(3276, "glowing New Age crystal", 1),
            SlotCost::component(8181, "baconstone", 1),
        ];

        let middle = vec![
            NoComponent(First),
            NoComponent(Second),
            SlotCost::component(8182, "hamethyst", 1),
            SlotCost::component(70, "bar skin", 1),
            SlotCost::component(865, "lead necklace", 11),
            SlotCost::component(4510, "huge bowl of candy", 1),
            SlotCost::component(6026, "sea salt crystal", 11),
            SlotCost::component(6055, "wriggling worm", 1),
            SlotCost::component(1356, "8-ball", 15),
            SlotCost::component(1600, "moxie weed", 99),
            SlotCost::component(24, "ten-leaf clover", 1),
        ];

        let right = vec![
            NoComponent(First),
            NoComponent(Second),
            SlotCost::component(173, "taco shell", 1),
            SlotCost::component(8183, "porquoise", 1),
            SlotCost::component(5110, "fairy gravy boat", 1),
            SlotCost::component(5300, "tiny dancer", 1),
            SlotCost::component(747, "Knob Goblin firecracker", 3),
            SlotCost::component(559, "razor-sharp can lid", 3),
            SlotCost::component(27, "spider web", 3),
            SlotCost::component(7391, "synthetic marrow", 5),
            SlotCost::component(7392, "haunted battery", 5),
            SlotCost::component(7393, "the funk", 5),
        ];

        Self { left, middle, right }
    }

    pub fn left(&self, variant: LeftSacrifice) -> &SlotCost {
        &self.left[variant.index()]
    }

    pub fn middle(&self, variant: MiddleSacrifice) -> &SlotCost {
        &self.middle[variant.index()]
    }

    pub fn right(&self, variant: RightSacrifice) -> &SlotCost {
        &self.right[variant.index()]
    }

    /// Replace the cost of a left sacrifice variant
    pub fn set_left(&mut self, variant: LeftSacrifice, cost: SlotCost) {
        self.left[variant.index()] = cost;
    }

    /// Replace the cost of a middle sacrifice variant
    pub fn set_middle(&mut self, variant: MiddleSacrifice, cost: SlotCost) {
        self.middle[variant.index()] = cost;
    }

    /// Replace the cost of a right sacrifice variant
    pub fn set_right(&mut self, variant: RightSacrifice, cost: SlotCost) {
        self.right[variant.index()] = cost;
    }

    /// Load tables from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let tables = Self::parse_toml(&content)?;
        tracing::info!("Loaded sacrifice tables from {}", path.display());
        Ok(tables)
    }

    /// Parse tables from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let data: TomlTables = toml::from_str(content)?;

        Ok(Self {
            left: build_table::<LeftSacrifice>(data.left)?,
            middle: build_table::<MiddleSacrifice>(data.middle)?,
            right: build_table::<RightSacrifice>(data.right)?,
        })
    }
}

impl Default for SacrificeTables {
    fn default() -> Self {
        Self::with_defaults()
    }
}

static DEFAULT_TABLES: OnceLock<SacrificeTables> = OnceLock::new();

/// The process-wide built-in tables
pub fn default_tables() -> &'static SacrificeTables {
    DEFAULT_TABLES.get_or_init(SacrificeTables::with_defaults)
}

/// TOML representation of a tables file
#[derive(Debug, Deserialize)]
struct TomlTables {
    #[serde(default)]
    left: Vec<TomlEntry>,
    #[serde(default)]
    middle: Vec<TomlEntry>,
    #[serde(default)]
    right: Vec<TomlEntry>,
}

/// TOML representation of a single variant's cost
#[derive(Debug, Deserialize)]
struct TomlEntry {
    modifier: String,
    sentinel: Option<i32>,
    item: Option<String>,
    id: Option<u32>,
    #[serde(default)]
    quantity: u32,
}

impl TomlEntry {
    fn into_cost(self) -> Result<SlotCost> {
        match (self.sentinel, self.item, self.id) {
            (Some(code), None, None) => {
                if self.quantity != 0 {
                    return Err(GearError::InvalidTable(format!(
                        "{}: free variant must have quantity 0, got {}",
                        self.modifier, self.quantity
                    )));
                }
                Ok(SlotCost::NoComponent(Sentinel::try_from(code)?))
            }
            (None, Some(name), Some(id)) => {
                if self.quantity == 0 {
                    return Err(GearError::InvalidTable(format!(
                        "{}: component quantity must be at least 1",
                        self.modifier
                    )));
                }
                Ok(SlotCost::Component {
                    item: ComponentItem::new(id, name),
                    quantity: self.quantity,
                })
            }
            _ => Err(GearError::InvalidTable(format!(
                "{}: expected either `sentinel` or both `item` and `id`",
                self.modifier
            ))),
        }
    }
}

/// Place entries by variant, rejecting duplicates and gaps
fn build_table<V: SlotVariant>(entries: Vec<TomlEntry>) -> Result<Vec<SlotCost>> {
    let mut slots: Vec<Option<SlotCost>> = vec![None; V::all().len()];

    for entry in entries {
        let variant = V::from_label(&entry.modifier)?;
        let cost = entry.into_cost()?;
        let slot = &mut slots[variant.index()];
        if slot.is_some() {
            return Err(GearError::InvalidTable(format!(
                "duplicate {} entry for {:?}",
                V::SLOT,
                variant.label()
            )));
        }
        *slot = Some(cost);
    }

    V::all()
        .iter()
        .zip(slots)
        .map(|(variant, cost)| {
            cost.ok_or_else(|| {
                GearError::InvalidTable(format!(
                    "missing {} entry for {:?}",
                    V::SLOT,
                    variant.label()
                ))
            })
        })
        .collect()
}
