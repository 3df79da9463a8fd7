//! # split-dg
//!
//! Split-form (flux-differencing) nodal DG kernels for 1D hyperbolic
//! conservation laws.
//!
//! This crate provides the core building blocks of a collocation
//! discontinuous-Galerkin / flux-reconstruction spectral-element scheme:
//! - Gauss-Lobatto quadrature rules (closed-form table)
//! - Barycentric Lagrange interpolation bases
//! - Reference-element operators (diagonal mass, dense derivative) with the
//!   summation-by-parts property
//! - Uniform 1D meshes
//! - Flux calculators (linear advection, compressible Euler with the
//!   Gassner-Winters-Kopriva split-form volume flux)
//! - The per-cell flux-differencing divergence kernel
//! - Discrete spatial operators for concrete problems (traveling sine
//!   advection, Sod shock tube)
//! - Classical explicit RK4 time integration over caller-owned scratch
//!
//! The scheme is generic over the conserved value type: a scalar for
//! advection, a three-component state for Euler. See the `problems` module
//! for end-to-end wiring and the crate examples for runnable drivers.

pub mod basis;
pub mod flux;
pub mod mesh;
pub mod operators;
pub mod polynomial;
pub mod problems;
pub mod solver;
pub mod state;
pub mod time;

// Re-export main types for convenience
pub use basis::LagrangeBasis;
pub use flux::{AdvectionFlux, EulerFlux, FluxCalculator};
pub use mesh::UniformMesh1D;
pub use operators::ReferenceElement1D;
pub use polynomial::{gauss_lobatto_rule, QuadratureError};
pub use problems::{Advection1D, Euler1D};
pub use solver::{FluxDivergence1D, Solution};
pub use state::{Conserved, EulerState};
pub use time::{axpy, rk4_step, RkWorkspace};
