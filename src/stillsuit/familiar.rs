//! Familiars and choosing the best one for a modifier

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{GearError, Result};
use crate::stillsuit::distribution::{compute_distribution, ModifierWeights};
use crate::stillsuit::tags::{DistillateModifier, FamiliarTag};

/// Anything carrying familiar tags
pub trait Tagged {
    fn tags(&self) -> &[FamiliarTag];

    fn distribution(&self) -> ModifierWeights {
        compute_distribution(self.tags().iter().copied())
    }
}

/// A familiar and its tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Familiar {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<FamiliarTag>,
}

impl Familiar {
    pub fn new(id: u32, name: impl Into<String>, tags: &[FamiliarTag]) -> Self {
        Self {
            id,
            name: name.into(),
            tags: tags.to_vec(),
        }
    }
}

impl Tagged for Familiar {
    fn tags(&self) -> &[FamiliarTag] {
        &self.tags
    }
}

impl Tagged for [FamiliarTag] {
    fn tags(&self) -> &[FamiliarTag] {
        self
    }
}

impl Tagged for Vec<FamiliarTag> {
    fn tags(&self) -> &[FamiliarTag] {
        self
    }
}

/// Pick the candidate whose distillate weighs `target` the most
///
/// Ties go to the earliest candidate, so when nothing feeds `target` the
/// first candidate is returned. `None` only for an empty candidate list.
pub fn select_best<'c, C, I>(target: DistillateModifier, candidates: I) -> Option<&'c C>
where
    C: Tagged + ?Sized + 'c,
    I: IntoIterator<Item = &'c C>,
{
    select_best_by(target, candidates, |c| c.distribution())
}

/// `select_best` with a caller-supplied distribution, e.g. a cached one
pub fn select_best_by<T, I, F>(target: DistillateModifier, candidates: I, distribution: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> ModifierWeights,
{
    let mut best: Option<(T, f64)> = None;

    for candidate in candidates {
        let score = distribution(&candidate).get(target);
        let better = match &best {
            Some((_, best_score)) => score > *best_score,
            None => true,
        };
        if better {
            best = Some((candidate, score));
        }
    }

    if let Some((_, score)) = &best {
        tracing::debug!("Best candidate for {} scores {:.3}", target, score);
    }
    best.map(|(candidate, _)| candidate)
}

/// A named collection of familiars
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamiliarRoster {
    #[serde(default)]
    familiars: Vec<Familiar>,
}

impl FamiliarRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// A small built-in roster
    pub fn with_defaults() -> Self {
        use FamiliarTag::*;

        let mut roster = Self::new();
        roster.add(Familiar::new(1, "Mosquito", &[Animal, Insect, HasWings, Flies, Bite, Evil]));
        roster.add(Familiar::new(
            4,
            "Angry Goat",
            &[Animal, HasBones, HasEyes, HasLegs, Hard, Bite],
        ));
        roster.add(Familiar::new(
            9,
            "Baby Gravy Fairy",
            &[Humanoid, HasWings, Flies, HasEyes, HasHands, Cute, Good],
        ));
        roster.add(Familiar::new(
            19,
            "Leprechaun",
            &[Humanoid, HasEyes, HasLegs, HasHands, WearsClothes, CanTalk, Person],
        ));
        roster.add(Familiar::new(
            72,
            "Cocoabo",
            &[Animal, HasWings, Flies, Food, Edible, HasBeak, HasEyes],
        ));
        roster.add(Familiar::new(
            113,
            "Hovering Sombrero",
            &[Object, IsClothes, Hovers, Polygonal],
        ));
        roster.add(Familiar::new(
            168,
            "Stocking Mimic",
            &[Object, IsClothes, Evil, Bite, HasEyes, Organic],
        ));
        roster
    }

    /// Add a familiar to the roster
    pub fn add(&mut self, familiar: Familiar) {
        self.familiars.push(familiar);
    }

    /// Get a familiar by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Familiar> {
        self.familiars
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn all(&self) -> &[Familiar] {
        &self.familiars
    }

    /// The roster member best suited to a modifier
    pub fn best_for(&self, target: DistillateModifier) -> Option<&Familiar> {
        select_best(target, self.familiars.iter())
    }

    /// Load a roster from a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let roster = Self::parse_toml(&content)?;
        tracing::info!("Loaded {} familiars from {}", roster.familiars.len(), path.display());
        Ok(roster)
    }

    /// Parse a roster from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let roster: FamiliarRoster = toml::from_str(content)?;

        for (i, familiar) in roster.familiars.iter().enumerate() {
            if roster.familiars[..i].iter().any(|f| f.name.eq_ignore_ascii_case(&familiar.name)) {
                return Err(GearError::InvalidTable(format!(
                    "duplicate familiar {:?}",
                    familiar.name
                )));
            }
            if familiar.tags.iter().all(|t| t.is_excluded()) {
                tracing::warn!("Familiar {:?} has no contributing tags", familiar.name);
            }
        }

        Ok(roster)
    }
}
