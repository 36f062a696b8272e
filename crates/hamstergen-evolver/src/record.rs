//! Per-generation summaries emitted to external collaborators.

use hamstergen_engine::{Enemy, Trait, WeightedPool};
use hamstergen_stats::{descriptive::DescriptiveStats, frequency::FrequencyTable};
use serde::Serialize;

use crate::fitness;

/// Everything an external collaborator gets to see about one generation.
///
/// Pool snapshots are taken after mutation (and after a plateau reset, if
/// one fired), so they describe the distributions the *next* generation
/// will be drawn from. Entry order matches the pools' fixed entry order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRecord {
    /// Generation index, counted from 0.
    pub generation: usize,
    /// Fraction of the population that hit the target exactly.
    pub fit_fraction: f64,
    /// Most common trait among the survivors.
    pub best_trait: Option<String>,
    /// Most common health component among the survivors.
    pub best_health: Option<u32>,
    /// Lowest score in the full population (0 = someone hit the target).
    pub score_min: f64,
    /// Mean score across the full population.
    pub score_mean: f64,
    /// Highest score in the full population.
    pub score_max: f64,
    /// Mean rate of change of the fitness metric over the trailing window,
    /// once enough history exists.
    pub fitness_rate_of_change: Option<f64>,
    /// Trait pool weights by trait name, in pool order.
    pub trait_weights: Vec<(String, f64)>,
    /// Health pool weights by component value, in pool order.
    pub health_weights: Vec<(u32, f64)>,
    /// Whether the plateau monitor reset the pools this generation.
    pub pools_reset: bool,
}

impl GenerationRecord {
    /// Assembles the record for one finished tick.
    #[expect(clippy::too_many_arguments, clippy::cast_precision_loss)]
    #[must_use]
    pub(crate) fn assemble(
        generation: usize,
        fit_fraction: f64,
        population: &[Enemy],
        survivors: &[Enemy],
        target_power: i64,
        trait_pool: &WeightedPool<Trait>,
        health_pool: &WeightedPool<u32>,
        fitness_rate_of_change: Option<f64>,
        pools_reset: bool,
    ) -> Self {
        let trait_mode =
            FrequencyTable::new(survivors.iter().map(|enemy| enemy.trait_().name().to_owned()));
        let health_mode = FrequencyTable::new(survivors.iter().flat_map(Enemy::health));
        let scores = DescriptiveStats::new(
            population
                .iter()
                .map(|enemy| fitness::score(enemy, target_power) as f64),
        );

        Self {
            generation,
            fit_fraction,
            best_trait: trait_mode.mode().cloned(),
            best_health: health_mode.mode().copied(),
            score_min: scores.as_ref().map_or(0.0, |stats| stats.min),
            score_mean: scores.as_ref().map_or(0.0, |stats| stats.mean),
            score_max: scores.as_ref().map_or(0.0, |stats| stats.max),
            fitness_rate_of_change,
            trait_weights: trait_pool
                .iter()
                .map(|entry| (entry.item().name().to_owned(), entry.weight()))
                .collect(),
            health_weights: health_pool
                .iter()
                .map(|entry| (*entry.item(), entry.weight()))
                .collect(),
            pools_reset,
        }
    }
}

/// Receives one [`GenerationRecord`] per tick.
///
/// Fire and forget: implementations must not block the loop and have no way
/// to mutate engine state. The engine calls this exactly once per
/// generation, terminal generations included.
pub trait Reporter {
    fn on_generation(&mut self, record: &GenerationRecord);
}

/// Discards every record. Useful in tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn on_generation(&mut self, _record: &GenerationRecord) {}
}

/// Collects records into a vector, mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    pub records: Vec<GenerationRecord>,
}

impl Reporter for CollectingReporter {
    fn on_generation(&mut self, record: &GenerationRecord) {
        self.records.push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use hamstergen_engine::catalog;

    use super::*;

    #[test]
    fn test_record_serializes_with_pool_snapshots() {
        let population = vec![Enemy::new(
            "Rat",
            Trait::new("Cheerful", 0, 0, 0),
            [3, 4],
        )];
        let record = GenerationRecord::assemble(
            3,
            1.0,
            &population,
            &population,
            7,
            &catalog::default_trait_pool(),
            &catalog::default_health_pool(),
            Some(0.01),
            false,
        );

        assert_eq!(record.best_trait.as_deref(), Some("Cheerful"));
        assert_eq!(record.best_health, Some(3));
        assert_eq!(record.score_max, 0.0);

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        assert_eq!(json["generation"], 3);
        assert_eq!(json["fit_fraction"], 1.0);
        assert_eq!(json["trait_weights"][0][0], "Reserved");
        assert_eq!(json["health_weights"].as_array().unwrap().len(), 10);
    }
}
