//! Discrete solution storage.

use crate::mesh::UniformMesh1D;
use crate::operators::ReferenceElement1D;
use crate::state::Conserved;

/// Nodal solution values, cell-major then node-minor.
///
/// `data[k * n_nodes + i]` is the value at node i of cell k. The layout
/// matches the operator contracts, so `data` can be handed to the spatial
/// operator and the time integrator as a plain slice.
#[derive(Clone, Debug)]
pub struct Solution<V> {
    /// Nodal values
    pub data: Vec<V>,
    /// Number of cells
    pub n_cells: usize,
    /// Number of nodes per cell
    pub n_nodes: usize,
}

impl<V: Conserved> Solution<V> {
    /// Create a zero-initialized solution.
    pub fn new(n_cells: usize, n_nodes: usize) -> Self {
        Self {
            data: vec![V::zero(); n_cells * n_nodes],
            n_cells,
            n_nodes,
        }
    }

    /// Total number of degrees of freedom.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the solution holds no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Nodal values of cell k.
    pub fn cell(&self, k: usize) -> &[V] {
        let start = k * self.n_nodes;
        &self.data[start..start + self.n_nodes]
    }

    /// Mutable nodal values of cell k.
    pub fn cell_mut(&mut self, k: usize) -> &mut [V] {
        let start = k * self.n_nodes;
        &mut self.data[start..start + self.n_nodes]
    }

    /// Fill the solution by evaluating `f` at every physical node position.
    pub fn set_from_function<F>(&mut self, mesh: &UniformMesh1D, elem: &ReferenceElement1D, f: F)
    where
        F: Fn(f64) -> V,
    {
        assert_eq!(mesh.num_cells(), self.n_cells);
        assert_eq!(elem.num_nodes(), self.n_nodes);

        for k in 0..self.n_cells {
            for i in 0..self.n_nodes {
                let x = mesh.r_to_x(k, elem.node_position(i));
                self.cell_mut(k)[i] = f(x);
            }
        }
    }

    /// Scale all values by a constant.
    pub fn scale(&mut self, c: f64) {
        for v in &mut self.data {
            *v = *v * c;
        }
    }

    /// Add `c * other` to self.
    pub fn axpy(&mut self, c: f64, other: &Self) {
        assert_eq!(self.data.len(), other.data.len());
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a = *a + *b * c;
        }
    }

    /// Largest componentwise magnitude over all nodes.
    pub fn max_abs(&self) -> f64 {
        self.data
            .iter()
            .map(|v| v.norm_sq().sqrt())
            .fold(0.0, f64::max)
    }

    /// Mean squared nodal error against a reference sequence.
    pub fn mean_squared_error(&self, reference: &[V]) -> f64 {
        assert_eq!(self.data.len(), reference.len());
        let sum: f64 = self
            .data
            .iter()
            .zip(reference.iter())
            .map(|(&v, &r)| (v - r).norm_sq())
            .sum();
        sum / self.data.len() as f64
    }

    /// Quadrature-weighted L2 error against an exact solution.
    pub fn l2_error<F>(&self, mesh: &UniformMesh1D, elem: &ReferenceElement1D, exact: F) -> f64
    where
        F: Fn(f64) -> V,
    {
        assert_eq!(mesh.num_cells(), self.n_cells);

        let mut error_sq = 0.0;
        for k in 0..self.n_cells {
            let j = mesh.jacobian(k);
            let q_k = self.cell(k);
            for i in 0..self.n_nodes {
                let x = mesh.r_to_x(k, elem.node_position(i));
                let diff = q_k[i] - exact(x);
                error_sq += elem.weight(i) * diff.norm_sq() * j;
            }
        }
        error_sq.sqrt()
    }

    /// Largest pointwise error norm against an exact solution.
    pub fn linf_error<F>(&self, mesh: &UniformMesh1D, elem: &ReferenceElement1D, exact: F) -> f64
    where
        F: Fn(f64) -> V,
    {
        let mut max_error: f64 = 0.0;
        for k in 0..self.n_cells {
            let q_k = self.cell(k);
            for i in 0..self.n_nodes {
                let x = mesh.r_to_x(k, elem.node_position(i));
                let diff = q_k[i] - exact(x);
                max_error = max_error.max(diff.norm_sq().sqrt());
            }
        }
        max_error
    }

    /// Integral of the solution over the domain, componentwise:
    /// ∫ q dx = Σ_k Σ_i w_i q_{k,i} J_k.
    pub fn integrate(&self, mesh: &UniformMesh1D, elem: &ReferenceElement1D) -> V {
        let mut integral = V::zero();
        for k in 0..self.n_cells {
            let j = mesh.jacobian(k);
            let q_k = self.cell(k);
            for i in 0..self.n_nodes {
                integral = integral + q_k[i] * (elem.weight(i) * j);
            }
        }
        integral
    }
}
