//! Survivor selection: rank by fitness, keep the best slice.

use hamstergen_engine::Enemy;
use serde::Serialize;

use crate::fitness;

/// How many of the best-ranked enemies survive a generation.
///
/// Both modes exist because the survivor cutoff varies between use cases: a
/// fixed head count independent of population size, or a fixed share of the
/// population (`TopFraction(0.5)` keeps the top half).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SelectionPolicy {
    /// Keep exactly this many enemies.
    TopCount(usize),
    /// Keep `floor(fraction * population_size)` enemies; the fraction must
    /// lie in `(0, 1]`.
    TopFraction(f64),
}

impl SelectionPolicy {
    /// Resolves the policy to an absolute survivor count for a population of
    /// `generation_size`.
    #[must_use]
    pub fn keep_count(&self, generation_size: usize) -> usize {
        match *self {
            Self::TopCount(count) => count,
            #[expect(
                clippy::cast_precision_loss,
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss
            )]
            Self::TopFraction(fraction) => (fraction * generation_size as f64).floor() as usize,
        }
    }

    /// Stable-sorts the population ascending by score and returns the first
    /// `keep_count` enemies. Ties keep their original generation order.
    #[must_use]
    pub fn select(&self, population: &[Enemy], target: i64) -> Vec<Enemy> {
        let mut ranked = population.to_vec();
        ranked.sort_by_key(|enemy| fitness::score(enemy, target));
        ranked.truncate(self.keep_count(population.len()));
        ranked
    }
}
