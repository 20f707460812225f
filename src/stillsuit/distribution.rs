//! Weighted modifier aggregation
//!
//! A familiar's distillate spreads evenly over its tags: with `n` contributing
//! tags, each adds `1/n` to the bucket of the modifier it maps to.

use std::collections::BTreeSet;

use ahash::AHashMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::stillsuit::tags::{DistillateModifier, FamiliarTag};

/// Relative weight of each modifier for one familiar
///
/// Buckets no tag feeds are absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierWeights {
    weights: AHashMap<DistillateModifier, f64>,
}

impl ModifierWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight of a modifier, 0 when absent
    pub fn get(&self, modifier: DistillateModifier) -> f64 {
        self.weights.get(&modifier).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, modifier: DistillateModifier) -> bool {
        self.weights.contains_key(&modifier)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DistillateModifier, f64)> + '_ {
        self.weights.iter().map(|(m, w)| (*m, *w))
    }

    /// Sum of all weights (1.0 for any familiar with a contributing tag)
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Buckets by descending weight, ties in modifier order
    pub fn ranked(&self) -> Vec<(DistillateModifier, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by_key(|(m, w)| (std::cmp::Reverse(OrderedFloat(*w)), *m));
        ranked
    }

    fn add(&mut self, modifier: DistillateModifier, weight: f64) {
        *self.weights.entry(modifier).or_insert(0.0) += weight;
    }
}

/// Distribute weight across a familiar's tags
///
/// Tags are treated as a set. The excluded tag neither contributes nor counts
/// towards `n`, so the result always sums to 1.0 unless it is empty.
pub fn compute_distribution<I>(tags: I) -> ModifierWeights
where
    I: IntoIterator<Item = FamiliarTag>,
{
    let buckets: Vec<DistillateModifier> = tags
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .filter_map(|tag| tag.modifier())
        .collect();

    let mut weights = ModifierWeights::new();
    if buckets.is_empty() {
        return weights;
    }

    let share = 1.0 / buckets.len() as f64;
    for modifier in buckets {
        weights.add(modifier, share);
    }
    weights
}
