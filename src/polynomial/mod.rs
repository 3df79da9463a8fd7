//! Polynomial building blocks: Legendre evaluation and Gauss-Lobatto rules.

mod gauss_lobatto;
mod legendre;

pub use gauss_lobatto::{gauss_lobatto_rule, QuadratureError, MAX_POINTS, MIN_POINTS};
pub use legendre::{legendre, legendre_derivative};
