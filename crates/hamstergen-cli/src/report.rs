use hamstergen_evolver::{GenerationRecord, Reporter};

/// Prints one progress block per generation to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ConsoleReporter;

impl ConsoleReporter {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn on_generation(&mut self, record: &GenerationRecord) {
        eprint!(
            "Generation: {} | Overall Fitness: {:.3}",
            record.generation, record.fit_fraction
        );
        if let Some(best_health) = record.best_health {
            eprint!(" | Best Health Component: {best_health}");
        }
        if let Some(best_trait) = &record.best_trait {
            eprint!(" | Best Trait: {best_trait}");
        }
        eprintln!();

        eprintln!(
            "  Scores: min {:.0} | mean {:.2} | max {:.0}",
            record.score_min, record.score_mean, record.score_max
        );

        eprint!("  Trait Probabilities: ");
        for (name, weight) in &record.trait_weights {
            eprint!("{name} = {weight:.3} | ");
        }
        eprintln!();

        eprint!("  Health Probabilities: ");
        for (value, weight) in &record.health_weights {
            eprint!("{value} = {weight:.3} | ");
        }
        eprintln!();

        if let Some(rate) = record.fitness_rate_of_change {
            eprintln!("  Fitness Rate of Change: {rate:.3}");
        }
        if record.pools_reset {
            eprintln!("  Plateau detected: pools reset to uniform");
        }
    }
}
