//! Small numeric helpers shared by the evolver and the CLI: descriptive
//! statistics, frequency tables, and trend (rate-of-change) computation.
//!
//! Deliberately dependency-free.

pub mod descriptive;
pub mod frequency;
pub mod trend;
