//! The enemy data model: behavioral traits and generated enemies.

use std::fmt;

use serde::Serialize;

/// A behavioral trait an enemy can carry.
///
/// `attack` and `defense` are not consumed by the fitness function yet; they
/// are kept for future combat modeling. `vulnerability` is a signed offset
/// applied to the enemy's power.
///
/// Traits compare by structural value and hash on all fields, which lets a
/// trait act as its own frequency-table key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Trait {
    name: String,
    attack: i32,
    defense: i32,
    vulnerability: i32,
}

impl Trait {
    #[must_use]
    pub fn new(name: impl Into<String>, attack: i32, defense: i32, vulnerability: i32) -> Self {
        Self {
            name: name.into(),
            attack,
            defense,
            vulnerability,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn attack(&self) -> i32 {
        self.attack
    }

    #[must_use]
    pub fn defense(&self) -> i32 {
        self.defense
    }

    #[must_use]
    pub fn vulnerability(&self) -> i32 {
        self.vulnerability
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One generated enemy.
///
/// Enemies are immutable once built. A generation is rebuilt from scratch
/// every iteration; no enemy survives across generations, only the pool
/// weights do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enemy {
    species: String,
    trait_: Trait,
    health: [u32; 2],
}

impl Enemy {
    #[must_use]
    pub fn new(species: impl Into<String>, trait_: Trait, health: [u32; 2]) -> Self {
        Self {
            species: species.into(),
            trait_,
            health,
        }
    }

    #[must_use]
    pub fn species(&self) -> &str {
        &self.species
    }

    #[must_use]
    pub fn trait_(&self) -> &Trait {
        &self.trait_
    }

    /// The two health components in draw order. Order is irrelevant to
    /// scoring but preserved for reporting.
    #[must_use]
    pub fn health(&self) -> [u32; 2] {
        self.health
    }

    /// Derived difficulty value: the health sum plus the trait's
    /// vulnerability offset. May be negative for low health and a strongly
    /// negative vulnerability.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamstergen_engine::{Enemy, Trait};
    ///
    /// let enemy = Enemy::new("Rat", Trait::new("Brave", 1, 0, -1), [3, 4]);
    /// assert_eq!(enemy.power(), 6);
    /// ```
    #[must_use]
    pub fn power(&self) -> i64 {
        i64::from(self.health[0]) + i64::from(self.health[1]) + i64::from(self.trait_.vulnerability)
    }
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} with {} health",
            self.trait_,
            self.species,
            self.power()
        )
    }
}
