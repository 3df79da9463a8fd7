//! Discrete spatial operators for concrete model problems.
//!
//! A "problem" assembles the global right-hand side: it computes the
//! numerical flux at every cell interface (substituting its boundary policy
//! at the two domain ends), runs the per-cell divergence kernel, and negates
//! the result into the output (the governing equations read
//! ∂q/∂t + ∂f/∂x = 0).
//!
//! Each problem owns its interface-flux scratch array and exposes
//! `apply(&mut self, state, t, rhs)`, the right-hand-side evaluator the time
//! integrator drives. One instance must not be shared across concurrent
//! evaluations; clone the problem (or build another) per thread instead.

mod advection;
mod euler;

pub use advection::Advection1D;
pub use euler::Euler1D;
