use chrono::{DateTime, Utc};
use hamstergen_engine::RunSeed;
use hamstergen_evolver::{RunConfig, RunOutcome, RunStatus};
use serde::Serialize;

/// The JSON document written at the end of a run: how the run was
/// configured, how it ended, and the final pool distributions.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RunSummary {
    seed: RunSeed,
    finished_at: DateTime<Utc>,
    status: RunStatus,
    generations: usize,
    final_fitness: f64,
    config: RunConfig,
    trait_weights: Vec<(String, f64)>,
    health_weights: Vec<(u32, f64)>,
}

impl RunSummary {
    pub(crate) fn new(
        seed: RunSeed,
        config: &RunConfig,
        outcome: &RunOutcome,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let last = outcome.records.last();
        Self {
            seed,
            finished_at,
            status: outcome.status,
            generations: outcome.records.len(),
            final_fitness: outcome.fit_fraction,
            config: config.clone(),
            trait_weights: last.map(|record| record.trait_weights.clone()).unwrap_or_default(),
            health_weights: last.map(|record| record.health_weights.clone()).unwrap_or_default(),
        }
    }
}
