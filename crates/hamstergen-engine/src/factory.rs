//! Drawing complete enemies from the current pool distributions.

use rand::Rng;

use crate::{Enemy, PoolExhaustedError, Trait, WeightedPool};

/// Builds enemies from a species roster and the current trait/health pools.
///
/// The factory borrows the pools for one generation; the evolver replaces its
/// pool snapshots between generations, so a fresh factory is constructed per
/// tick. Species are drawn uniformly, the trait via one weighted draw, and
/// health as two independent weighted draws (which may repeat).
#[derive(Debug, Clone, Copy)]
pub struct EnemyFactory<'a> {
    species: &'a [String],
    trait_pool: &'a WeightedPool<Trait>,
    health_pool: &'a WeightedPool<u32>,
}

impl<'a> EnemyFactory<'a> {
    /// # Panics
    ///
    /// Panics if `species` is empty.
    #[must_use]
    pub fn new(
        species: &'a [String],
        trait_pool: &'a WeightedPool<Trait>,
        health_pool: &'a WeightedPool<u32>,
    ) -> Self {
        assert!(!species.is_empty(), "species roster must not be empty");
        Self {
            species,
            trait_pool,
            health_pool,
        }
    }

    /// Draws one enemy.
    ///
    /// # Errors
    ///
    /// Returns [`PoolExhaustedError`] if the trait draw or either health draw
    /// fails; the partially built enemy is discarded.
    pub fn build<R>(&self, rng: &mut R) -> Result<Enemy, PoolExhaustedError>
    where
        R: Rng + ?Sized,
    {
        let species = self.species[rng.random_range(0..self.species.len())].clone();
        let trait_ = self.trait_pool.draw(rng)?.clone();
        let health = [*self.health_pool.draw(rng)?, *self.health_pool.draw(rng)?];
        Ok(Enemy::new(species, trait_, health))
    }

    /// Draws `count` independent enemies with no inter-enemy correlation.
    ///
    /// # Errors
    ///
    /// The first failed draw aborts generation; no partial population is
    /// returned.
    pub fn generate<R>(&self, count: usize, rng: &mut R) -> Result<Vec<Enemy>, PoolExhaustedError>
    where
        R: Rng + ?Sized,
    {
        (0..count).map(|_| self.build(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use crate::{PoolEntry, catalog};

    use super::*;

    #[test]
    fn test_build_draws_from_catalog() {
        let species = catalog::default_species();
        let trait_pool = catalog::default_trait_pool();
        let health_pool = catalog::default_health_pool();
        let factory = EnemyFactory::new(&species, &trait_pool, &health_pool);
        let mut rng = Pcg32::seed_from_u64(7);

        let enemy = factory.build(&mut rng).unwrap();
        assert!(species.contains(&enemy.species().to_string()));
        assert!(
            trait_pool
                .iter()
                .any(|entry| entry.item() == enemy.trait_())
        );
        for component in enemy.health() {
            assert!((1..=catalog::HEALTH_MAX).contains(&component));
        }
    }

    #[test]
    fn test_generate_returns_requested_count() {
        let species = catalog::default_species();
        let trait_pool = catalog::default_trait_pool();
        let health_pool = catalog::default_health_pool();
        let factory = EnemyFactory::new(&species, &trait_pool, &health_pool);
        let mut rng = Pcg32::seed_from_u64(7);

        let population = factory.generate(50, &mut rng).unwrap();
        assert_eq!(population.len(), 50);
    }

    #[test]
    fn test_exhausted_health_pool_fails_the_build() {
        let species = catalog::default_species();
        let trait_pool = catalog::default_trait_pool();
        let health_pool =
            crate::WeightedPool::from_entries(vec![PoolEntry::new(1, 0.0), PoolEntry::new(2, 0.0)]);
        let factory = EnemyFactory::new(&species, &trait_pool, &health_pool);
        let mut rng = Pcg32::seed_from_u64(7);

        assert_eq!(factory.generate(10, &mut rng), Err(PoolExhaustedError));
    }

    #[test]
    fn test_same_seed_same_population() {
        let species = catalog::default_species();
        let trait_pool = catalog::default_trait_pool();
        let health_pool = catalog::default_health_pool();
        let factory = EnemyFactory::new(&species, &trait_pool, &health_pool);

        let a = factory.generate(20, &mut Pcg32::seed_from_u64(99)).unwrap();
        let b = factory.generate(20, &mut Pcg32::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }
}
