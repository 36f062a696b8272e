//! Weighted attribute pools.
//!
//! A [`WeightedPool`] is a discrete probability distribution over a fixed set
//! of attribute values: an ordered sequence of `(item, weight)` entries whose
//! weights sum to 1.0. Pools support three operations:
//!
//! - [`draw`](WeightedPool::draw) - weighted random sampling
//! - [`reweight`](WeightedPool::reweight) - blend observed attribute
//!   frequencies into the weights (the evolutionary "mutation" step, which
//!   operates on distributions rather than on individuals)
//! - [`reset`](WeightedPool::reset) - back to the uniform distribution
//!
//! Pools are immutable; every operation returns a new pool. The generation
//! loop replaces its pool snapshot once per iteration instead of mutating
//! shared state.
//!
//! # Normalization
//!
//! `reweight` re-normalizes the blended weights so they sum to exactly 1.0.
//! Without this, repeated blending accumulates floating-point drift and the
//! cumulative walk in `draw` can run past the last entry. `draw` still treats
//! that case as a defined error ([`PoolExhaustedError`]) rather than relying
//! on normalization alone.

use std::collections::HashMap;
use std::hash::Hash;

use rand::Rng;

use crate::PoolExhaustedError;

/// One `(item, weight)` entry of a [`WeightedPool`].
#[derive(Debug, Clone, PartialEq)]
pub struct PoolEntry<T> {
    item: T,
    weight: f64,
}

impl<T> PoolEntry<T> {
    #[must_use]
    pub fn new(item: T, weight: f64) -> Self {
        Self { item, weight }
    }

    #[must_use]
    pub fn item(&self) -> &T {
        &self.item
    }

    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// A weighted discrete probability distribution over a fixed item set.
///
/// Entry order is fixed at construction and preserved by every operation, so
/// reports and exports see a stable column order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPool<T> {
    entries: Vec<PoolEntry<T>>,
}

impl<T> WeightedPool<T> {
    /// Creates a pool from explicit entries.
    ///
    /// The caller is responsible for the weights summing to 1.0; prefer
    /// [`Self::uniform`] unless specific weights are needed.
    ///
    /// # Panics
    ///
    /// Panics if `entries` is empty.
    #[must_use]
    pub fn from_entries(entries: Vec<PoolEntry<T>>) -> Self {
        assert!(!entries.is_empty(), "pool must contain at least one item");
        Self { entries }
    }

    /// Creates a pool with uniform weights (1/N each) over `items`.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamstergen_engine::WeightedPool;
    ///
    /// let pool = WeightedPool::uniform(1..=4);
    /// assert_eq!(pool.len(), 4);
    /// assert_eq!(pool.entries()[0].weight(), 0.25);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn uniform(items: impl IntoIterator<Item = T>) -> Self {
        let items: Vec<T> = items.into_iter().collect();
        assert!(!items.is_empty(), "pool must contain at least one item");
        let weight = 1.0 / items.len() as f64;
        Self {
            entries: items
                .into_iter()
                .map(|item| PoolEntry::new(item, weight))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[PoolEntry<T>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &PoolEntry<T>> {
        self.entries.iter()
    }

    #[must_use]
    pub fn weight_sum(&self) -> f64 {
        self.entries.iter().map(PoolEntry::weight).sum()
    }

    /// Draws one item according to the weight distribution.
    ///
    /// Samples `r` uniformly in `[0, 1)` and walks the entries in order,
    /// accumulating weight; the first entry whose cumulative weight reaches
    /// `r` wins.
    ///
    /// # Errors
    ///
    /// Returns [`PoolExhaustedError`] when no entry satisfies the cumulative
    /// condition, i.e. the weights sum to less than the sampled point.
    pub fn draw<R>(&self, rng: &mut R) -> Result<&T, PoolExhaustedError>
    where
        R: Rng + ?Sized,
    {
        let r = rng.random_range(0.0..1.0);
        let mut cumulative = 0.0;
        for entry in &self.entries {
            cumulative += entry.weight;
            if cumulative >= r {
                return Ok(&entry.item);
            }
        }
        Err(PoolExhaustedError)
    }

    /// Returns the uniform-weight pool over the same item set.
    #[must_use]
    pub fn reset(&self) -> Self
    where
        T: Clone,
    {
        Self::uniform(self.entries.iter().map(|entry| entry.item.clone()))
    }

    /// Blends observed attribute frequencies into the weights.
    ///
    /// Every item's new weight is the arithmetic mean of its observed
    /// fraction and its current weight; items absent from `frequencies`
    /// observe 0. The mean blend is intentionally conservative: stable but
    /// slow-converging, half the distance per step.
    ///
    /// The blended weights are re-normalized to sum to 1.0 before the new
    /// pool is returned (skipped if the sum is non-positive, which cannot
    /// happen for well-formed inputs).
    ///
    /// Reweighting with frequencies equal to the current weights is a
    /// fixed point: the pool comes back unchanged.
    #[must_use]
    pub fn reweight(&self, frequencies: &HashMap<T, f64>) -> Self
    where
        T: Clone + Eq + Hash,
    {
        let mut entries: Vec<PoolEntry<T>> = self
            .entries
            .iter()
            .map(|entry| {
                let observed = frequencies.get(&entry.item).copied().unwrap_or(0.0);
                PoolEntry::new(entry.item.clone(), f64::midpoint(observed, entry.weight))
            })
            .collect();
        let sum: f64 = entries.iter().map(PoolEntry::weight).sum();
        if sum > 0.0 {
            for entry in &mut entries {
                entry.weight /= sum;
            }
        }
        Self { entries }
    }

    /// Adds `factor` to one item's weight, redistributing the deduction
    /// evenly across all other items so the total stays 1.0.
    ///
    /// No-op (returns a clone) when `factor` is 0, when `item` is not in the
    /// pool, or when the item's weight is already at or above 1.0.
    #[must_use]
    pub fn buff(&self, item: &T, factor: f64) -> Self
    where
        T: Clone + PartialEq,
    {
        if factor == 0.0 || self.entries.len() < 2 {
            return self.clone();
        }
        let Some(target) = self.entries.iter().find(|entry| entry.item == *item) else {
            return self.clone();
        };
        if target.weight >= 1.0 {
            return self.clone();
        }
        #[expect(clippy::cast_precision_loss)]
        let nerf = factor / (self.entries.len() - 1) as f64;
        Self {
            entries: self
                .entries
                .iter()
                .map(|entry| {
                    let weight = if entry.item == *item {
                        entry.weight + factor
                    } else {
                        entry.weight - nerf
                    };
                    PoolEntry::new(entry.item.clone(), weight)
                })
                .collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a WeightedPool<T> {
    type Item = &'a PoolEntry<T>;
    type IntoIter = std::slice::Iter<'a, PoolEntry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn pool_of(weights: &[(u32, f64)]) -> WeightedPool<u32> {
        WeightedPool::from_entries(
            weights
                .iter()
                .map(|&(item, weight)| PoolEntry::new(item, weight))
                .collect(),
        )
    }

    #[test]
    fn test_uniform_weights() {
        let pool = WeightedPool::uniform(1..=10);
        assert_eq!(pool.len(), 10);
        for entry in &pool {
            assert!((entry.weight() - 0.1).abs() < 1e-12);
        }
        assert!((pool.weight_sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_draw_converges_to_weight_distribution() {
        // Chi-squared goodness of fit against the configured weights.
        let pool = pool_of(&[(1, 0.5), (2, 0.3), (3, 0.2)]);
        let mut rng = Pcg32::seed_from_u64(42);

        const DRAWS: usize = 10_000;
        let mut counts = [0_usize; 3];
        for _ in 0..DRAWS {
            let item = *pool.draw(&mut rng).unwrap();
            counts[item as usize - 1] += 1;
        }

        #[expect(clippy::cast_precision_loss)]
        let chi_squared: f64 = pool
            .iter()
            .zip(&counts)
            .map(|(entry, &count)| {
                let expected = entry.weight() * DRAWS as f64;
                (count as f64 - expected).powi(2) / expected
            })
            .sum();

        // 99% critical value for 2 degrees of freedom.
        assert!(
            chi_squared < 9.21,
            "draws diverge from configured weights: chi^2 = {chi_squared}"
        );
    }

    #[test]
    fn test_draw_exhausted_pool_is_an_error() {
        let pool = pool_of(&[(1, 0.0), (2, 0.0)]);
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(pool.draw(&mut rng), Err(PoolExhaustedError));
    }

    #[test]
    fn test_reweight_blends_observed_and_prior() {
        // Ten equal-weight items, every survivor observed as item 3:
        // item 3 -> mean(1.0, 0.1) = 0.55, all others -> mean(0.0, 0.1) = 0.05.
        let pool = WeightedPool::uniform(1..=10);
        let frequencies = HashMap::from([(3, 1.0)]);
        let reweighted = pool.reweight(&frequencies);

        for entry in &reweighted {
            let expected = if *entry.item() == 3 { 0.55 } else { 0.05 };
            assert!(
                (entry.weight() - expected).abs() < 1e-12,
                "item {}: got {}, expected {expected}",
                entry.item(),
                entry.weight()
            );
        }
        assert!((reweighted.weight_sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reweight_is_idempotent_at_fixed_point() {
        let pool = pool_of(&[(1, 0.5), (2, 0.3), (3, 0.2)]);
        let frequencies = HashMap::from([(1, 0.5), (2, 0.3), (3, 0.2)]);
        let reweighted = pool.reweight(&frequencies);
        for (before, after) in pool.iter().zip(&reweighted) {
            assert!((before.weight() - after.weight()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_reweight_preserves_entry_order() {
        let pool = pool_of(&[(7, 0.2), (1, 0.5), (4, 0.3)]);
        let reweighted = pool.reweight(&HashMap::from([(4, 1.0)]));
        let items: Vec<u32> = reweighted.iter().map(|entry| *entry.item()).collect();
        assert_eq!(items, vec![7, 1, 4]);
    }

    #[test]
    fn test_reset_restores_uniform() {
        let pool = pool_of(&[(1, 0.9), (2, 0.05), (3, 0.05)]);
        let reset = pool.reset();
        for entry in &reset {
            assert!((entry.weight() - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_buff_conserves_total_weight() {
        let pool = WeightedPool::uniform(1..=10);
        let buffed = pool.buff(&5, 0.09);
        let entry = &buffed.entries()[4];
        assert!((entry.weight() - 0.19).abs() < 1e-12);
        assert!((buffed.weight_sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_buff_noop_cases() {
        let pool = pool_of(&[(1, 1.0), (2, 0.0)]);
        assert_eq!(pool.buff(&1, 0.1), pool); // weight already >= 1
        assert_eq!(pool.buff(&9, 0.1), pool); // item absent
        assert_eq!(pool.buff(&2, 0.0), pool); // zero factor
    }
}
