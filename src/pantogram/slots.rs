//! The five categorical slots of a pantogram configuration
//!
//! Each slot is a closed set of variants labelled by the modifier they grant.
//! A variant's code is its 1-indexed position in the slot's table; the game
//! uses those codes for the alignment and element fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::GearError;

/// Which of the five slots a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Slot {
    Alignment,
    Element,
    LeftSacrifice,
    MiddleSacrifice,
    RightSacrifice,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Alignment => "alignment",
            Slot::Element => "element",
            Slot::LeftSacrifice => "left sacrifice",
            Slot::MiddleSacrifice => "middle sacrifice",
            Slot::RightSacrifice => "right sacrifice",
        };
        f.write_str(name)
    }
}

/// Common behaviour of every slot's variant enum
pub trait SlotVariant: Copy + Eq + std::hash::Hash + fmt::Debug + 'static {
    /// The slot this variant type fills
    const SLOT: Slot;

    /// All variants in table order
    fn all() -> &'static [Self];

    /// The modifier text shown in game, e.g. `"Meat Drop: 30"`
    fn label(&self) -> &'static str;

    /// 1-indexed table position
    fn code(&self) -> u8;

    /// 0-indexed table position
    fn index(&self) -> usize {
        usize::from(self.code()) - 1
    }

    /// Parse a label, ignoring case and surrounding whitespace
    fn from_label(label: &str) -> Result<Self, GearError> {
        let wanted = label.trim();
        Self::all()
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GearError::InvalidSlotValue {
                slot: Self::SLOT,
                value: label.to_string(),
            })
    }
}

macro_rules! slot_variants {
    (
        $(#[$meta:meta])*
        $name:ident ($slot:ident) {
            $( $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $( $variant ),+
        }

        impl SlotVariant for $name {
            const SLOT: Slot = Slot::$slot;

            fn all() -> &'static [Self] {
                &[ $( $name::$variant ),+ ]
            }

            fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            fn code(&self) -> u8 {
                *self as u8 + 1
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = GearError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_label(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = GearError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_label(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.label().to_string()
            }
        }
    };
}

slot_variants! {
    /// The stat the pants improve
    Alignment (Alignment) {
        Muscle => "Muscle",
        Mysticality => "Mysticality",
        Moxie => "Moxie",
    }
}

slot_variants! {
    /// The element the pants resist
    Element (Element) {
        Hot => "Hot Resistance: 2",
        Cold => "Cold Resistance: 2",
        Spooky => "Spooky Resistance: 2",
        Sleaze => "Sleaze Resistance: 2",
        Stench => "Stench Resistance: 2",
    }
}

slot_variants! {
    /// Modifier granted by the leftmost sacrifice
    LeftSacrifice (LeftSacrifice) {
        MaximumHp40 => "Maximum HP: 40",
        MaximumMp20 => "Maximum MP: 20",
        HpRegen10 => "HP Regen Max: 10",
        HpRegen15 => "HP Regen Max: 15",
        HpRegen20 => "HP Regen Max: 20",
        MpRegen10 => "MP Regen Max: 10",
        MpRegen15 => "MP Regen Max: 15",
        MpRegen20 => "MP Regen Max: 20",
        ManaCost => "Mana Cost: -3",
    }
}

slot_variants! {
    /// Modifier granted by the middle sacrifice
    MiddleSacrifice (MiddleSacrifice) {
        CombatRateDown => "Combat Rate: -5",
        CombatRateUp => "Combat Rate: 5",
        CriticalHit => "Critical Hit Percent: 10",
        Initiative => "Initiative: 50",
        FamiliarWeight => "Familiar Weight: 10",
        CandyDrop => "Candy Drop: 100",
        ItemDropPenalty => "Item Drop Penalty: -10",
        FishingSkill => "Fishing Skill: 5",
        PoolSkill => "Pool Skill: 5",
        AvatarPurple => "Avatar: Purple",
        DropsItems => "Drops Items: true",
    }
}

slot_variants! {
    /// Modifier granted by the rightmost sacrifice
    RightSacrifice (RightSacrifice) {
        WeaponDamage => "Weapon Damage: 20",
        SpellDamage => "Spell Damage Percent: 20",
        MeatDrop30 => "Meat Drop: 30",
        MeatDrop60 => "Meat Drop: 60",
        ItemDrop15 => "Item Drop: 15",
        ItemDrop30 => "Item Drop: 30",
        MuscleExperience => "Muscle Experience: 3",
        MysticalityExperience => "Mysticality Experience: 3",
        MoxieExperience => "Moxie Experience: 3",
        MuscleExperiencePercent => "Muscle Experience Percent: 25",
        MysticalityExperiencePercent => "Mysticality Experience Percent: 25",
        MoxieExperiencePercent => "Moxie Experience Percent: 25",
    }
}
