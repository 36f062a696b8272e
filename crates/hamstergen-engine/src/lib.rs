//! Enemy generation primitives: the attribute data model, weighted attribute
//! pools, and the factory that draws complete enemies from them.
//!
//! This crate holds no evolutionary logic. It defines *what* an enemy is and
//! *how* one is sampled from the current pool distributions; adjusting those
//! distributions between generations is the job of `hamstergen-evolver`.

pub use self::{catalog::*, enemy::*, factory::*, pool::*, seed::*};

pub mod catalog;
pub mod enemy;
pub mod factory;
pub mod pool;
pub mod seed;

/// A weighted draw walked the whole pool without reaching the sampled point.
///
/// This can only happen when the pool's weights sum to less than 1.0 (e.g.
/// after accumulated floating-point drift). The draw must not substitute a
/// default item, since that would skew the sampled distribution; callers
/// treat this as fatal to the generation being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("weighted draw found no cumulative bucket; pool weights no longer cover [0, 1)")]
pub struct PoolExhaustedError;
