//! Familiar tags and the distillate modifier each one feeds
//!
//! Every tag buckets into exactly one modifier, except `pokefam`, which
//! marks a different game mode and never contributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::GearError;

/// A modifier stillsuit distillate can grant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DistillateModifier {
    Muscle,
    Mysticality,
    Moxie,
    ItemDrop,
    FoodDrop,
    DamageReduction,
    Initiative,
    SpookyDamage,
    HotDamage,
    ColdDamage,
    SleazeDamage,
    StenchDamage,
    WeaponDamage,
}

impl DistillateModifier {
    pub const ALL: [DistillateModifier; 13] = [
        DistillateModifier::Muscle,
        DistillateModifier::Mysticality,
        DistillateModifier::Moxie,
        DistillateModifier::ItemDrop,
        DistillateModifier::FoodDrop,
        DistillateModifier::DamageReduction,
        DistillateModifier::Initiative,
        DistillateModifier::SpookyDamage,
        DistillateModifier::HotDamage,
        DistillateModifier::ColdDamage,
        DistillateModifier::SleazeDamage,
        DistillateModifier::StenchDamage,
        DistillateModifier::WeaponDamage,
    ];

    /// The game's modifier name
    pub fn name(&self) -> &'static str {
        match self {
            DistillateModifier::Muscle => "Muscle",
            DistillateModifier::Mysticality => "Mysticality",
            DistillateModifier::Moxie => "Moxie",
            DistillateModifier::ItemDrop => "Item Drop",
            DistillateModifier::FoodDrop => "Food Drop",
            DistillateModifier::DamageReduction => "Damage Reduction",
            DistillateModifier::Initiative => "Initiative",
            DistillateModifier::SpookyDamage => "Spooky Damage",
            DistillateModifier::HotDamage => "Hot Damage",
            DistillateModifier::ColdDamage => "Cold Damage",
            DistillateModifier::SleazeDamage => "Sleaze Damage",
            DistillateModifier::StenchDamage => "Stench Damage",
            DistillateModifier::WeaponDamage => "Weapon Damage",
        }
    }
}

impl fmt::Display for DistillateModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistillateModifier {
    type Err = GearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DistillateModifier::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GearError::UnknownModifier(s.to_string()))
    }
}

impl TryFrom<String> for DistillateModifier {
    type Error = GearError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DistillateModifier> for String {
    fn from(value: DistillateModifier) -> Self {
        value.name().to_string()
    }
}

macro_rules! familiar_tags {
    ( $( $variant:ident => $label:literal => $modifier:expr ),+ $(,)? ) => {
        /// A descriptive tag the game attaches to familiars
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum FamiliarTag {
            $( $variant ),+
        }

        impl FamiliarTag {
            pub const ALL: &'static [FamiliarTag] = &[ $( FamiliarTag::$variant ),+ ];

            /// The game's spelling, always lowercase
            pub fn label(&self) -> &'static str {
                match self {
                    $( FamiliarTag::$variant => $label ),+
                }
            }

            /// The bucket this tag feeds, `None` for the excluded tag
            pub fn modifier(&self) -> Option<DistillateModifier> {
                use DistillateModifier::*;
                match self {
                    $( FamiliarTag::$variant => $modifier ),+
                }
            }
        }
    };
}

familiar_tags! {
    Mineral => "mineral" => Some(Muscle),
    Robot => "robot" => Some(Muscle),
    Organic => "organic" => Some(Muscle),
    HasBones => "hasbones" => Some(Muscle),
    Technological => "technological" => Some(Mysticality),
    Orb => "orb" => Some(Mysticality),
    Sentient => "sentient" => Some(Mysticality),
    Polygonal => "polygonal" => Some(Mysticality),
    Software => "software" => Some(Mysticality),
    CanTalk => "cantalk" => Some(Mysticality),
    Humanoid => "humanoid" => Some(Moxie),
    HasHands => "hashands" => Some(Moxie),
    Cute => "cute" => Some(Moxie),
    Good => "good" => Some(Moxie),
    Phallic => "phallic" => Some(Moxie),
    AnimatedArt => "animatedart" => Some(Moxie),
    Person => "person" => Some(Moxie),
    HasEyes => "haseyes" => Some(ItemDrop),
    Object => "object" => Some(ItemDrop),
    HasLegs => "haslegs" => Some(ItemDrop),
    Food => "food" => Some(FoodDrop),
    Vegetable => "vegetable" => Some(FoodDrop),
    Edible => "edible" => Some(FoodDrop),
    Animal => "animal" => Some(DamageReduction),
    Insect => "insect" => Some(DamageReduction),
    WearsClothes => "wearsclothes" => Some(DamageReduction),
    IsClothes => "isclothes" => Some(DamageReduction),
    HasShell => "hasshell" => Some(DamageReduction),
    HasWings => "haswings" => Some(Initiative),
    Fast => "fast" => Some(Initiative),
    Flies => "flies" => Some(Initiative),
    Hovers => "hovers" => Some(Initiative),
    Swims => "swims" => Some(Initiative),
    Aquatic => "aquatic" => Some(Initiative),
    Spooky => "spooky" => Some(SpookyDamage),
    Undead => "undead" => Some(SpookyDamage),
    Evil => "evil" => Some(SpookyDamage),
    ReallyEvil => "reallyevil" => Some(SpookyDamage),
    Hot => "hot" => Some(HotDamage),
    Cold => "cold" => Some(ColdDamage),
    Sleaze => "sleaze" => Some(SleazeDamage),
    Stench => "stench" => Some(StenchDamage),
    Bite => "bite" => Some(WeaponDamage),
    HasClaws => "hasclaws" => Some(WeaponDamage),
    HasBeak => "hasbeak" => Some(WeaponDamage),
    HasStinger => "hasstinger" => Some(WeaponDamage),
    Hard => "hard" => Some(WeaponDamage),
    Pokefam => "pokefam" => None,
}

impl FamiliarTag {
    pub fn is_excluded(&self) -> bool {
        self.modifier().is_none()
    }
}

impl fmt::Display for FamiliarTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FamiliarTag {
    type Err = GearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FamiliarTag::ALL
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GearError::UnknownTag(s.to_string()))
    }
}

impl TryFrom<String> for FamiliarTag {
    type Error = GearError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FamiliarTag> for String {
    fn from(value: FamiliarTag) -> Self {
        value.label().to_string()
    }
}
