//! Fitness scoring against a target power value.
//!
//! A score is the absolute deviation of an enemy's power from the target;
//! zero is perfectly fit. The population-level metric is the fraction of
//! enemies scoring at or below a cutoff. These functions are pure and
//! infallible.

use hamstergen_engine::Enemy;

/// Absolute deviation of the enemy's power from `target`. Zero means
/// perfectly fit.
///
/// # Examples
///
/// ```
/// use hamstergen_engine::{Enemy, Trait};
/// use hamstergen_evolver::fitness;
///
/// let fit = Enemy::new("Rat", Trait::new("Cheerful", 0, 0, 0), [3, 4]);
/// assert_eq!(fitness::score(&fit, 7), 0);
///
/// let weak = Enemy::new("Rat", Trait::new("Cheerful", 0, 0, 0), [1, 1]);
/// assert_eq!(fitness::score(&weak, 7), 5);
/// ```
#[must_use]
pub fn score(enemy: &Enemy, target: i64) -> u64 {
    target.abs_diff(enemy.power())
}

/// Fraction of the population scoring at or below `cutoff`, in `[0, 1]`.
///
/// This is the run's sole stopping metric. It depends on the random draw,
/// so it is noisy: termination is probabilistic, not monotonic. An empty
/// population yields 0.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn fit_fraction(population: &[Enemy], target: i64, cutoff: u64) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let fit = population
        .iter()
        .filter(|enemy| score(enemy, target) <= cutoff)
        .count();
    fit as f64 / population.len() as f64
}

/// Sum of all scores in the population. Useful as an aggregate difficulty
/// error for reporting.
#[must_use]
pub fn total_score(population: &[Enemy], target: i64) -> u64 {
    population.iter().map(|enemy| score(enemy, target)).sum()
}
