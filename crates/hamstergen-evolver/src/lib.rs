//! The evolutionary engine: fitness scoring, survivor selection, pool
//! mutation, plateau detection, and the generation loop that ties them
//! together.
//!
//! # Algorithm Overview
//!
//! Each generation:
//!
//! 1. **Generate** - draw a fresh population from the current pools
//!    (`hamstergen-engine`); no enemy survives across generations
//! 2. **Evaluate** - score every enemy as its absolute power deviation from
//!    the target; the population metric is the fraction scoring 0
//! 3. **Select** - stable-sort by score ascending and keep the top slice
//! 4. **Mutate pools** - blend survivor attribute frequencies into the trait
//!    and health pool weights (mutation acts on *distributions*, never on
//!    individual genomes)
//! 5. **Plateau check** - when the fitness metric's rate of change stays near
//!    zero long enough, reset both pools to uniform and keep searching
//! 6. **Terminate** - converged (metric reached the desired fitness) or
//!    exhausted (generation limit reached)
//!
//! The engine threads an explicit [`EngineState`] value through ticks and
//! emits one [`GenerationRecord`] per generation to a [`Reporter`];
//! everything else is pure computation.

pub use self::{config::*, engine::*, plateau::*, record::*, selection::*};

pub mod config;
pub mod engine;
pub mod fitness;
pub mod mutation;
pub mod plateau;
pub mod record;
pub mod selection;
