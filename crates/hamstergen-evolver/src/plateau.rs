//! Plateau detection over the fitness-metric history.

use hamstergen_stats::trend;

/// Trailing window (in generations) for the rate-of-change estimate.
pub const PLATEAU_WINDOW: usize = 10;

/// Rate-of-change magnitude below which the search counts as stalled.
pub const PLATEAU_EPSILON: f64 = 1e-3;

/// Minimum number of generations between pool resets.
///
/// Without the debounce, a search that legitimately stalls near convergence
/// would be thrown back to uniform pools every window.
pub const RESET_DEBOUNCE: u32 = 100;

/// The monitor's verdict for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlateauSignal {
    /// Keep evolving with the current pools.
    Continue,
    /// Sustained stagnation: reset both pools to uniform.
    Reset,
}

/// Tracks the fitness metric's moving rate of change and signals a full pool
/// reset after sustained stagnation.
///
/// The monitor keeps the full fitness history, indexed by generation. Once
/// at least [`PLATEAU_WINDOW`] observations exist, each generation computes
/// the mean consecutive difference over the trailing window; a mean below
/// [`PLATEAU_EPSILON`] in magnitude triggers a reset, but only when more
/// than [`RESET_DEBOUNCE`] generations have passed since the last one.
#[derive(Debug, Clone, Default)]
pub struct PlateauMonitor {
    fitness_history: Vec<f64>,
    generations_since_reset: u32,
}

impl PlateauMonitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one generation's fitness metric and returns the verdict.
    ///
    /// On [`PlateauSignal::Reset`] the debounce counter is zeroed; the
    /// caller is responsible for actually resetting the pools.
    pub fn observe(&mut self, fit_fraction: f64) -> PlateauSignal {
        self.fitness_history.push(fit_fraction);
        self.generations_since_reset += 1;

        let Some(delta) = self.rate_of_change() else {
            return PlateauSignal::Continue;
        };
        if delta.abs() < PLATEAU_EPSILON && self.generations_since_reset > RESET_DEBOUNCE {
            self.generations_since_reset = 0;
            PlateauSignal::Reset
        } else {
            PlateauSignal::Continue
        }
    }

    /// Mean consecutive difference over the trailing window, or `None` until
    /// the window has filled.
    #[must_use]
    pub fn rate_of_change(&self) -> Option<f64> {
        trend::tail_mean_delta(&self.fitness_history, PLATEAU_WINDOW)
    }

    /// Full fitness history, indexed by generation.
    #[must_use]
    pub fn history(&self) -> &[f64] {
        &self.fitness_history
    }

    /// Generations elapsed since the last reset (or since the start of the
    /// run if none happened yet).
    #[must_use]
    pub fn generations_since_reset(&self) -> u32 {
        self.generations_since_reset
    }
}
