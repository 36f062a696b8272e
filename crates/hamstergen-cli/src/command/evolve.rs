use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use hamstergen_engine::{RunSeed, catalog};
use hamstergen_evolver::{EngineState, EvolutionEngine, RunConfig, SelectionPolicy};
use rand::Rng as _;

use crate::{
    export, report::ConsoleReporter, summary::RunSummary, util::Output,
};

const DEFAULT_TARGET_POWER: i64 = 7;
const DEFAULT_GENERATION_SIZE: usize = 100;
const DEFAULT_GENERATION_LIMIT: usize = 1000;
const DEFAULT_DESIRED_FITNESS: f64 = 0.9;
const DEFAULT_KEEP_FRACTION: f64 = 0.5;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvolveArg {
    /// Power value the population is evolved toward
    #[arg(long, default_value_t = DEFAULT_TARGET_POWER)]
    target_power: i64,
    /// Enemies drawn per generation
    #[arg(long, default_value_t = DEFAULT_GENERATION_SIZE)]
    generation_size: usize,
    /// Hard cap on the number of generations
    #[arg(long, default_value_t = DEFAULT_GENERATION_LIMIT)]
    generation_limit: usize,
    /// Fraction of perfectly fit enemies at which the run converges
    #[arg(long, default_value_t = DEFAULT_DESIRED_FITNESS)]
    desired_fitness: f64,
    /// Keep exactly this many survivors per generation
    #[arg(long, conflicts_with = "keep_fraction")]
    keep_count: Option<usize>,
    /// Keep this fraction of each generation (default: 0.5)
    #[arg(long)]
    keep_fraction: Option<f64>,
    /// Hex seed for a reproducible run (random when omitted)
    #[arg(long)]
    seed: Option<RunSeed>,
    /// Write one CSV row per generation to this file
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Write a JSON run summary to this file (stdout when omitted)
    #[arg(long)]
    summary: Option<PathBuf>,
}

impl Default for EvolveArg {
    fn default() -> Self {
        Self {
            target_power: DEFAULT_TARGET_POWER,
            generation_size: DEFAULT_GENERATION_SIZE,
            generation_limit: DEFAULT_GENERATION_LIMIT,
            desired_fitness: DEFAULT_DESIRED_FITNESS,
            keep_count: None,
            keep_fraction: None,
            seed: None,
            csv: None,
            summary: None,
        }
    }
}

impl EvolveArg {
    fn selection(&self) -> SelectionPolicy {
        match (self.keep_count, self.keep_fraction) {
            (Some(count), _) => SelectionPolicy::TopCount(count),
            (None, Some(fraction)) => SelectionPolicy::TopFraction(fraction),
            (None, None) => SelectionPolicy::TopFraction(DEFAULT_KEEP_FRACTION),
        }
    }
}

pub(crate) fn run(arg: &EvolveArg) -> anyhow::Result<()> {
    let config = RunConfig {
        target_power: arg.target_power,
        generation_size: arg.generation_size,
        selection: arg.selection(),
        generation_limit: arg.generation_limit,
        desired_fitness: arg.desired_fitness,
    };
    let engine = EvolutionEngine::new(config, catalog::default_species())
        .context("invalid run parameters")?;

    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    eprintln!("Seed: {seed}");
    let mut rng = seed.rng();

    let state = EngineState::new(catalog::default_trait_pool(), catalog::default_health_pool());
    let mut reporter = ConsoleReporter::new();
    let outcome = engine
        .run(state, &mut rng, &mut reporter)
        .context("evolution run aborted")?;

    eprintln!();
    eprintln!("The Chosen Ones ({:?} after {} generations)", outcome.status, outcome.records.len());
    for enemy in &outcome.population {
        eprintln!("  {enemy}");
    }

    if let Some(path) = &arg.csv {
        export::write_csv(&outcome.records, path)?;
        eprintln!();
        eprintln!("Generation data saved to {}", path.display());
    }

    let summary = RunSummary::new(seed, engine.config(), &outcome, Utc::now());
    Output::save_json(&summary, arg.summary.clone())?;
    if let Some(path) = &arg.summary {
        eprintln!("Run summary saved to {}", path.display());
    }

    Ok(())
}
