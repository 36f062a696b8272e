//! Pool mutation: reweighting the attribute pools from survivor frequencies.
//!
//! "Mutation" here acts on the pool *distributions*, not on individuals:
//! each pool's weights are blended (arithmetic mean) with the frequency of
//! attributes among the surviving enemies. Traits are counted once per
//! survivor; health components twice, since every enemy carries two.

use hamstergen_engine::{Enemy, Trait, WeightedPool};
use hamstergen_stats::frequency::FrequencyTable;

/// Reweights the trait pool from the survivors' trait frequencies.
///
/// An empty survivor set degrades to a no-op (the pool is returned
/// unchanged) rather than dividing by zero.
#[must_use]
pub fn mutate_trait_pool(survivors: &[Enemy], pool: &WeightedPool<Trait>) -> WeightedPool<Trait> {
    if survivors.is_empty() {
        return pool.clone();
    }
    let table = FrequencyTable::new(survivors.iter().map(|enemy| enemy.trait_().clone()));
    pool.reweight(&table.fractions())
}

/// Reweights the health pool from the survivors' health-component
/// frequencies. Both components of every survivor are counted, so the
/// denominator is twice the survivor count.
///
/// An empty survivor set degrades to a no-op.
#[must_use]
pub fn mutate_health_pool(survivors: &[Enemy], pool: &WeightedPool<u32>) -> WeightedPool<u32> {
    if survivors.is_empty() {
        return pool.clone();
    }
    let table = FrequencyTable::new(survivors.iter().flat_map(Enemy::health));
    pool.reweight(&table.fractions())
}

#[cfg(test)]
mod tests {
    use hamstergen_engine::catalog;

    use super::*;

    fn brave_enemy(health: [u32; 2]) -> Enemy {
        Enemy::new("Rat", Trait::new("Brave", 1, 0, -1), health)
    }

    #[test]
    fn test_unanimous_survivors_shift_trait_weight() {
        // Survivors all Brave: Brave -> mean(1.0, 0.1) = 0.55, others 0.05.
        let pool = catalog::default_trait_pool();
        let survivors = vec![brave_enemy([3, 4]), brave_enemy([4, 4])];
        let mutated = mutate_trait_pool(&survivors, &pool);

        for entry in &mutated {
            let expected = if entry.item().name() == "Brave" {
                0.55
            } else {
                0.05
            };
            assert!((entry.weight() - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_health_components_count_twice_per_survivor() {
        // Two survivors, four components: 3 appears twice (fraction 0.5),
        // 4 and 5 once each (0.25). Blended with uniform 0.1 and the sum is
        // already 1, so no renormalization shift.
        let pool = catalog::default_health_pool();
        let survivors = vec![brave_enemy([3, 4]), brave_enemy([3, 5])];
        let mutated = mutate_health_pool(&survivors, &pool);

        for entry in &mutated {
            let expected = match entry.item() {
                3 => f64::midpoint(0.5, 0.1),
                4 | 5 => f64::midpoint(0.25, 0.1),
                _ => 0.05,
            };
            assert!(
                (entry.weight() - expected).abs() < 1e-12,
                "health {}: got {}",
                entry.item(),
                entry.weight()
            );
        }
    }

    #[test]
    fn test_empty_survivors_are_a_noop() {
        let trait_pool = catalog::default_trait_pool();
        let health_pool = catalog::default_health_pool();
        assert_eq!(mutate_trait_pool(&[], &trait_pool), trait_pool);
        assert_eq!(mutate_health_pool(&[], &health_pool), health_pool);
    }

    #[test]
    fn test_mutated_pools_stay_normalized() {
        let pool = catalog::default_health_pool();
        let mut current = pool;
        let survivors = vec![brave_enemy([7, 7]), brave_enemy([6, 1])];
        for _ in 0..1000 {
            current = mutate_health_pool(&survivors, &current);
        }
        assert!((current.weight_sum() - 1.0).abs() < 1e-9);
    }
}
