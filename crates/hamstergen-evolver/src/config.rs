//! Run configuration and its validation.

use serde::Serialize;

use crate::selection::SelectionPolicy;

/// All parameters of one evolution run.
///
/// Validated once, before the loop starts; the engine constructor rejects a
/// malformed configuration with [`InvalidConfigError`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunConfig {
    /// The power value the population is evolved toward.
    pub target_power: i64,
    /// Number of enemies drawn per generation.
    pub generation_size: usize,
    /// Survivor cutoff mode.
    pub selection: SelectionPolicy,
    /// Hard cap on the number of generations.
    pub generation_limit: usize,
    /// Fraction of perfectly fit enemies at which the run converges, in
    /// `[0, 1]`.
    pub desired_fitness: f64,
}

impl RunConfig {
    /// Checks every invariant the loop relies on.
    ///
    /// # Errors
    ///
    /// See [`InvalidConfigError`] for the individual conditions.
    pub fn validate(&self) -> Result<(), InvalidConfigError> {
        if self.generation_size == 0 {
            return Err(InvalidConfigError::ZeroGenerationSize);
        }
        if let SelectionPolicy::TopFraction(fraction) = self.selection
            && !(fraction > 0.0 && fraction <= 1.0)
        {
            return Err(InvalidConfigError::KeepFractionOutOfRange(fraction));
        }
        let keep = self.selection.keep_count(self.generation_size);
        if keep == 0 {
            return Err(InvalidConfigError::ZeroKeepCount);
        }
        if keep > self.generation_size {
            return Err(InvalidConfigError::KeepCountExceedsGenerationSize {
                keep,
                generation_size: self.generation_size,
            });
        }
        if !(0.0..=1.0).contains(&self.desired_fitness) {
            return Err(InvalidConfigError::DesiredFitnessOutOfRange(
                self.desired_fitness,
            ));
        }
        Ok(())
    }
}

/// A malformed [`RunConfig`], rejected before the loop starts.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum InvalidConfigError {
    #[display("generation size must be positive")]
    ZeroGenerationSize,
    #[display("selection keeps no survivors")]
    ZeroKeepCount,
    #[display("selection keeps {keep} survivors from a generation of {generation_size}")]
    KeepCountExceedsGenerationSize { keep: usize, generation_size: usize },
    #[display("keep fraction {_0} is outside (0, 1]")]
    KeepFractionOutOfRange(#[error(not(source))] f64),
    #[display("desired fitness {_0} is outside [0, 1]")]
    DesiredFitnessOutOfRange(#[error(not(source))] f64),
    #[display("species roster must not be empty")]
    EmptySpeciesSet,
}
