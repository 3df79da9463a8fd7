//! Gauss-Lobatto-Legendre quadrature rules.
//!
//! The n-point Gauss-Lobatto rule integrates polynomials up to degree 2n-3
//! exactly and includes both endpoints ±1, which is what makes it the node
//! set of choice for collocation DG: the mass matrix becomes diagonal and the
//! face nodes coincide with volume nodes.
//!
//! Nodes and weights are tabulated in closed form for 2 to 7 points. The
//! interior nodes are the roots of P'_{n-1} and the weights are
//! w_j = 2 / (n(n-1) [P_{n-1}(x_j)]²), which the unit tests verify against
//! the Legendre recurrence.

use thiserror::Error;

/// Smallest tabulated point count.
pub const MIN_POINTS: usize = 2;
/// Largest tabulated point count.
pub const MAX_POINTS: usize = 7;

/// Error type for quadrature rule construction.
///
/// A point count outside the table is a configuration mistake, not a runtime
/// condition: callers propagate it and abort setup.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuadratureError {
    /// Requested point count has no tabulated rule.
    #[error("gauss-lobatto rule with {0} points is not tabulated (supported: 2..=7)")]
    UnsupportedPointCount(usize),
}

/// Return the n-point Gauss-Lobatto rule as `(positions, weights)`.
///
/// Positions are ascending, symmetric about 0, with endpoints exactly ±1;
/// weights are positive and sum to 2.
pub fn gauss_lobatto_rule(n_pts: usize) -> Result<(Vec<f64>, Vec<f64>), QuadratureError> {
    match n_pts {
        2 => Ok((vec![-1.0, 1.0], vec![1.0, 1.0])),
        3 => Ok((
            vec![-1.0, 0.0, 1.0],
            vec![1.0 / 3.0, 4.0 / 3.0, 1.0 / 3.0],
        )),
        4 => {
            let p = (1.0f64 / 5.0).sqrt();
            Ok((
                vec![-1.0, -p, p, 1.0],
                vec![1.0 / 6.0, 5.0 / 6.0, 5.0 / 6.0, 1.0 / 6.0],
            ))
        }
        5 => {
            let p = (3.0f64 / 7.0).sqrt();
            Ok((
                vec![-1.0, -p, 0.0, p, 1.0],
                vec![0.1, 49.0 / 90.0, 32.0 / 45.0, 49.0 / 90.0, 0.1],
            ))
        }
        6 => {
            let s = 7.0f64.sqrt();
            let outer = (1.0 / 3.0 + 2.0 * s / 21.0).sqrt();
            let inner = (1.0 / 3.0 - 2.0 * s / 21.0).sqrt();
            let w_outer = (14.0 - s) / 30.0;
            let w_inner = (14.0 + s) / 30.0;
            Ok((
                vec![-1.0, -outer, -inner, inner, outer, 1.0],
                vec![1.0 / 15.0, w_outer, w_inner, w_inner, w_outer, 1.0 / 15.0],
            ))
        }
        7 => {
            let s = (5.0f64 / 3.0).sqrt();
            let outer = (5.0 / 11.0 + 2.0 * s / 11.0).sqrt();
            let inner = (5.0 / 11.0 - 2.0 * s / 11.0).sqrt();
            let w_outer = (124.0 - 7.0 * 15.0f64.sqrt()) / 350.0;
            let w_inner = (124.0 + 7.0 * 15.0f64.sqrt()) / 350.0;
            Ok((
                vec![-1.0, -outer, -inner, 0.0, inner, outer, 1.0],
                vec![
                    1.0 / 21.0,
                    w_outer,
                    w_inner,
                    256.0 / 525.0,
                    w_inner,
                    w_outer,
                    1.0 / 21.0,
                ],
            ))
        }
        _ => Err(QuadratureError::UnsupportedPointCount(n_pts)),
    }
}
