//! The built-in attribute catalog: ten species, ten behavioral traits, and
//! health components 1 through 10.
//!
//! These are the fixed vocabularies the evolver searches over. Species are
//! drawn uniformly and never reweighted; the trait and health pools start
//! uniform and are mutated (and occasionally reset) between generations.

use crate::{Trait, WeightedPool};

/// Highest health component value; the health pool covers `1..=HEALTH_MAX`.
pub const HEALTH_MAX: u32 = 10;

/// The fixed species roster. Drawn uniformly, not subject to mutation.
#[must_use]
pub fn default_species() -> Vec<String> {
    [
        "Bullfrog",
        "Rat",
        "Bat",
        "Spider",
        "Meerkat",
        "Lizard",
        "Snake",
        "Rabbit",
        "Owl",
        "Pomeranian",
    ]
    .map(String::from)
    .to_vec()
}

/// The ten built-in traits with uniform starting weights.
#[must_use]
pub fn default_trait_pool() -> WeightedPool<Trait> {
    WeightedPool::uniform([
        Trait::new("Reserved", -1, 2, 0),
        Trait::new("Brave", 1, 0, -1),
        Trait::new("Reckless", 2, 0, -1),
        Trait::new("Cocky", 0, -2, 0),
        Trait::new("Buff", 1, 1, 2),
        Trait::new("Cheerful", 0, 0, 0),
        Trait::new("Lonely", -1, -1, 0),
        Trait::new("Desperate", 2, 0, -2),
        Trait::new("Weird", 0, 0, 0),
        Trait::new("Aloof", -1, 0, 1),
    ])
}

/// Health components `1..=10` with uniform starting weights.
#[must_use]
pub fn default_health_pool() -> WeightedPool<u32> {
    WeightedPool::uniform(1..=HEALTH_MAX)
}
