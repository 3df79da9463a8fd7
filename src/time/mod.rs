//! Explicit time integration.

mod rk4;

pub use rk4::{axpy, rk4_step, RkWorkspace};
