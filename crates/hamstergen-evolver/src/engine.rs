//! The generation loop.

use hamstergen_engine::{Enemy, EnemyFactory, PoolExhaustedError, Trait, WeightedPool};
use rand::Rng;
use serde::Serialize;

use crate::{
    config::{InvalidConfigError, RunConfig},
    fitness, mutation,
    plateau::{PlateauMonitor, PlateauSignal},
    record::{GenerationRecord, Reporter},
};

/// Everything that persists between generations.
///
/// The state is an explicit value threaded through [`EvolutionEngine::tick`]:
/// each tick consumes the previous state and returns the next one. Nothing
/// else survives a generation; populations are rebuilt from scratch.
#[derive(Debug, Clone)]
pub struct EngineState {
    generation: usize,
    trait_pool: WeightedPool<Trait>,
    health_pool: WeightedPool<u32>,
    plateau: PlateauMonitor,
}

impl EngineState {
    /// Starts at generation 0 with the given pools (typically the uniform
    /// catalog pools).
    #[must_use]
    pub fn new(trait_pool: WeightedPool<Trait>, health_pool: WeightedPool<u32>) -> Self {
        Self {
            generation: 0,
            trait_pool,
            health_pool,
            plateau: PlateauMonitor::new(),
        }
    }

    /// Index of the next generation to be built.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    #[must_use]
    pub fn trait_pool(&self) -> &WeightedPool<Trait> {
        &self.trait_pool
    }

    #[must_use]
    pub fn health_pool(&self) -> &WeightedPool<u32> {
        &self.health_pool
    }

    #[must_use]
    pub fn plateau(&self) -> &PlateauMonitor {
        &self.plateau
    }
}

/// Where a run stands after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunStatus {
    Running,
    /// The fitness metric reached the desired threshold.
    Converged,
    /// The generation limit was reached first.
    Exhausted,
}

impl RunStatus {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        *self != Self::Running
    }
}

/// The products of one tick: the successor state, the record emitted for
/// collaborators, the full population that was evaluated, and the run status
/// after this generation.
#[derive(Debug, Clone)]
pub struct Tick {
    pub state: EngineState,
    pub record: GenerationRecord,
    pub population: Vec<Enemy>,
    pub status: RunStatus,
}

/// Final output of a completed run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Terminal status ([`RunStatus::Converged`] or [`RunStatus::Exhausted`]).
    pub status: RunStatus,
    /// The last generation's population.
    pub population: Vec<Enemy>,
    /// The last generation's fitness metric.
    pub fit_fraction: f64,
    /// One record per generation, in order.
    pub records: Vec<GenerationRecord>,
}

/// A run failed mid-loop.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum EvolveError {
    /// Pool-weight normalization degraded below usability; the run is
    /// aborted rather than sampling from a corrupted distribution.
    #[display("generation could not be built: {_0}")]
    PoolExhausted(PoolExhaustedError),
}

/// Drives the generation loop over an explicit [`EngineState`].
///
/// Each tick: generate, evaluate, select, mutate pools, plateau check,
/// increment the generation counter, test the termination predicates
/// (convergence before exhaustion), and emit one [`GenerationRecord`].
///
/// # Example
///
/// ```
/// use hamstergen_engine::{RunSeed, catalog};
/// use hamstergen_evolver::{
///     EngineState, EvolutionEngine, NullReporter, RunConfig, RunStatus, SelectionPolicy,
/// };
///
/// let engine = EvolutionEngine::new(
///     RunConfig {
///         target_power: 7,
///         generation_size: 50,
///         selection: SelectionPolicy::TopFraction(0.5),
///         generation_limit: 100,
///         desired_fitness: 1.0,
///     },
///     catalog::default_species(),
/// )
/// .unwrap();
///
/// let state = EngineState::new(catalog::default_trait_pool(), catalog::default_health_pool());
/// let mut rng = RunSeed::from_bytes([7; 16]).rng();
/// let outcome = engine.run(state, &mut rng, &mut NullReporter).unwrap();
/// assert!(outcome.status.is_terminal());
/// assert_eq!(outcome.records.len(), outcome.records.last().unwrap().generation + 1);
/// ```
#[derive(Debug, Clone)]
pub struct EvolutionEngine {
    config: RunConfig,
    species: Vec<String>,
}

impl EvolutionEngine {
    /// Validates the configuration and species roster up front.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfigError`] for a malformed configuration or an
    /// empty roster.
    pub fn new(config: RunConfig, species: Vec<String>) -> Result<Self, InvalidConfigError> {
        config.validate()?;
        if species.is_empty() {
            return Err(InvalidConfigError::EmptySpeciesSet);
        }
        Ok(Self { config, species })
    }

    #[must_use]
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs one generation, consuming `state` and producing its successor.
    ///
    /// # Errors
    ///
    /// Returns [`PoolExhaustedError`] if the population could not be drawn;
    /// the consumed state is lost, which is fine because the error is fatal
    /// to the whole run.
    pub fn tick<R>(&self, state: EngineState, rng: &mut R) -> Result<Tick, PoolExhaustedError>
    where
        R: Rng + ?Sized,
    {
        let EngineState {
            generation,
            trait_pool,
            health_pool,
            mut plateau,
        } = state;

        let factory = EnemyFactory::new(&self.species, &trait_pool, &health_pool);
        let population = factory.generate(self.config.generation_size, rng)?;

        let fit_fraction = fitness::fit_fraction(&population, self.config.target_power, 0);
        let survivors = self
            .config
            .selection
            .select(&population, self.config.target_power);

        let trait_pool = mutation::mutate_trait_pool(&survivors, &trait_pool);
        let health_pool = mutation::mutate_health_pool(&survivors, &health_pool);

        let signal = plateau.observe(fit_fraction);
        let pools_reset = signal == PlateauSignal::Reset;
        let (trait_pool, health_pool) = if pools_reset {
            (trait_pool.reset(), health_pool.reset())
        } else {
            (trait_pool, health_pool)
        };

        let next_generation = generation + 1;
        let status = if fit_fraction >= self.config.desired_fitness {
            RunStatus::Converged
        } else if next_generation >= self.config.generation_limit {
            RunStatus::Exhausted
        } else {
            RunStatus::Running
        };

        let record = GenerationRecord::assemble(
            generation,
            fit_fraction,
            &population,
            &survivors,
            self.config.target_power,
            &trait_pool,
            &health_pool,
            plateau.rate_of_change(),
            pools_reset,
        );

        Ok(Tick {
            state: EngineState {
                generation: next_generation,
                trait_pool,
                health_pool,
                plateau,
            },
            record,
            population,
            status,
        })
    }

    /// Drives ticks until a terminal status and returns the collected
    /// outcome. The reporter sees every generation's record as it is
    /// produced.
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::PoolExhausted`] if any generation could not be
    /// built.
    pub fn run<R>(
        &self,
        mut state: EngineState,
        rng: &mut R,
        reporter: &mut dyn Reporter,
    ) -> Result<RunOutcome, EvolveError>
    where
        R: Rng + ?Sized,
    {
        let mut records = Vec::new();
        loop {
            let tick = self.tick(state, rng)?;
            reporter.on_generation(&tick.record);
            let fit_fraction = tick.record.fit_fraction;
            records.push(tick.record);
            if tick.status.is_terminal() {
                return Ok(RunOutcome {
                    status: tick.status,
                    population: tick.population,
                    fit_fraction,
                    records,
                });
            }
            state = tick.state;
        }
    }
}

#[cfg(test)]
mod tests {
    use hamstergen_engine::{PoolEntry, RunSeed, catalog};

    use crate::{CollectingReporter, NullReporter, SelectionPolicy};

    use super::*;

    fn engine(config: RunConfig) -> EvolutionEngine {
        EvolutionEngine::new(config, catalog::default_species()).unwrap()
    }

    fn default_state() -> EngineState {
        EngineState::new(catalog::default_trait_pool(), catalog::default_health_pool())
    }

    fn config() -> RunConfig {
        RunConfig {
            target_power: 7,
            generation_size: 50,
            selection: SelectionPolicy::TopFraction(0.5),
            generation_limit: 40,
            desired_fitness: 1.0,
        }
    }

    #[test]
    fn test_zero_desired_fitness_converges_at_generation_zero() {
        // Convergence uses >=, so a zero threshold is met by any fraction.
        let mut cfg = config();
        cfg.desired_fitness = 0.0;
        let mut rng = RunSeed::from_bytes([1; 16]).rng();

        let outcome = engine(cfg)
            .run(default_state(), &mut rng, &mut NullReporter)
            .unwrap();
        assert_eq!(outcome.status, RunStatus::Converged);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].generation, 0);
    }

    #[test]
    fn test_generation_limit_exhausts_the_run() {
        let mut cfg = config();
        cfg.generation_limit = 5;
        let mut rng = RunSeed::from_bytes([2; 16]).rng();
        let outcome = engine(cfg)
            .run(default_state(), &mut rng, &mut NullReporter)
            .unwrap();

        // A perfect fit fraction of 1.0 is unreachable in 5 generations of
        // near-uniform pools, so the limit must fire.
        assert_eq!(outcome.status, RunStatus::Exhausted);
        assert_eq!(outcome.records.len(), 5);
        assert_eq!(outcome.population.len(), 50);
    }

    #[test]
    fn test_reporter_sees_every_generation_in_order() {
        let mut rng = RunSeed::from_bytes([3; 16]).rng();
        let mut reporter = CollectingReporter::default();
        let outcome = engine(config())
            .run(default_state(), &mut rng, &mut reporter)
            .unwrap();

        assert_eq!(reporter.records, outcome.records);
        for (index, record) in reporter.records.iter().enumerate() {
            assert_eq!(record.generation, index);
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_run() {
        let seed = RunSeed::from_bytes([4; 16]);
        let a = engine(config())
            .run(default_state(), &mut seed.rng(), &mut NullReporter)
            .unwrap();
        let b = engine(config())
            .run(default_state(), &mut seed.rng(), &mut NullReporter)
            .unwrap();

        assert_eq!(a.records, b.records);
        assert_eq!(a.population, b.population);
    }

    #[test]
    fn test_tick_reweights_pools_toward_survivors() {
        let mut rng = RunSeed::from_bytes([5; 16]).rng();
        let tick = engine(config()).tick(default_state(), &mut rng).unwrap();

        // One blend step away from uniform the weights must still be a
        // distribution, and no longer all 0.1.
        let sum: f64 = tick.record.trait_weights.iter().map(|(_, w)| w).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(
            tick.record
                .trait_weights
                .iter()
                .any(|(_, w)| (w - 0.1).abs() > 1e-6)
        );
        assert_eq!(tick.state.generation(), 1);
    }

    #[test]
    fn test_exhausted_pool_aborts_the_run() {
        let state = EngineState::new(
            catalog::default_trait_pool(),
            WeightedPool::from_entries(vec![PoolEntry::new(1, 0.0), PoolEntry::new(2, 0.0)]),
        );
        let mut rng = RunSeed::from_bytes([6; 16]).rng();

        let result = engine(config()).run(state, &mut rng, &mut NullReporter);
        assert_eq!(
            result.unwrap_err(),
            EvolveError::PoolExhausted(PoolExhaustedError)
        );
    }

    #[test]
    fn test_invalid_config_is_rejected_up_front() {
        let mut cfg = config();
        cfg.desired_fitness = 2.0;
        assert!(EvolutionEngine::new(cfg, catalog::default_species()).is_err());

        assert_eq!(
            EvolutionEngine::new(config(), Vec::new()).unwrap_err(),
            InvalidConfigError::EmptySpeciesSet
        );
    }
}
