//! Sod shock tube for the 1D compressible Euler equations.
//!
//! Solves q_t + f(q)_x = 0 on [0, 1] with γ = 1.4 and the classical Sod
//! initial data: (ρ, u, p) = (1, 0, 1) for x < 0.5 and (0.125, 0, 0.1)
//! beyond. Both domain boundaries hold the far-field states fixed; until the
//! waves reach a boundary this makes the interface fluxes there exactly the
//! physical fluxes of the unperturbed initial states.

use tracing::debug;

use crate::flux::{EulerFlux, FluxCalculator};
use crate::mesh::UniformMesh1D;
use crate::operators::ReferenceElement1D;
use crate::polynomial::QuadratureError;
use crate::solver::{FluxDivergence1D, Solution};
use crate::state::{Conserved, EulerState};

/// Discrete spatial operator for the Sod shock-tube problem.
#[derive(Clone)]
pub struct Euler1D {
    mesh: UniformMesh1D,
    elem: ReferenceElement1D,
    flux: EulerFlux,
    /// Interface fluxes, one per cell face; overwritten every evaluation.
    fluxes: Vec<EulerState>,
}

impl Euler1D {
    /// Ratio of specific heats for air.
    const GAMMA: f64 = 1.4;

    /// Set up the shock tube on [0, 1] with `n_cells` cells of the given
    /// polynomial order.
    pub fn new(n_cells: usize, order: usize) -> Result<Self, QuadratureError> {
        let mesh = UniformMesh1D::uniform(0.0, 1.0, n_cells);
        let elem = ReferenceElement1D::new(order)?;

        debug!(
            n_cells,
            order,
            n_dofs = n_cells * elem.num_nodes(),
            "euler shock tube set up"
        );

        Ok(Self {
            mesh,
            elem,
            flux: EulerFlux::new(Self::GAMMA),
            fluxes: vec![EulerState::zero(); n_cells + 1],
        })
    }

    /// Ratio of specific heats γ.
    pub fn gamma(&self) -> f64 {
        self.flux.gamma()
    }

    /// Total number of degrees of freedom (nodes).
    pub fn num_dofs(&self) -> usize {
        self.mesh.num_cells() * self.elem.num_nodes()
    }

    /// The mesh this problem is discretized on.
    pub fn mesh(&self) -> &UniformMesh1D {
        &self.mesh
    }

    /// The reference element of this discretization.
    pub fn reference_element(&self) -> &ReferenceElement1D {
        &self.elem
    }

    /// State left of the diaphragm, also the left far-field state.
    pub fn left_state(&self) -> EulerState {
        EulerState::from_primitives(1.0, 0.0, 1.0, self.gamma())
    }

    /// State right of the diaphragm, also the right far-field state.
    pub fn right_state(&self) -> EulerState {
        EulerState::from_primitives(0.125, 0.0, 0.1, self.gamma())
    }

    /// Physical position of every node, cell-major then node-minor.
    pub fn node_positions(&self) -> Vec<f64> {
        let mut pos = Vec::with_capacity(self.num_dofs());
        for k in 0..self.mesh.num_cells() {
            for i in 0..self.elem.num_nodes() {
                pos.push(self.mesh.r_to_x(k, self.elem.node_position(i)));
            }
        }
        pos
    }

    /// The Sod initial data sampled at the nodes (conserved variables).
    pub fn initial_state(&self) -> Solution<EulerState> {
        let (left, right) = (self.left_state(), self.right_state());
        let mut q = Solution::new(self.mesh.num_cells(), self.elem.num_nodes());
        q.set_from_function(&self.mesh, &self.elem, |x| {
            if x < 0.5 {
                left
            } else {
                right
            }
        });
        q
    }

    /// Suggested step size from the current fastest wave:
    /// dt = 0.25 / (max(|u| + c) · n_cells) / order.
    pub fn timestep_size(&self, q: &[EulerState]) -> f64 {
        let max_speed = q
            .iter()
            .map(|&v| self.flux.max_wave_speed(v))
            .fold(f64::MIN, f64::max);

        0.25 / (max_speed * self.mesh.num_cells() as f64) / self.elem.order() as f64
    }

    /// Fill the interface-flux array for state `q`.
    ///
    /// Interior interfaces take the adjacent face nodes; interface 0 and
    /// interface n_cells substitute the fixed far-field states.
    fn assemble_numerical_fluxes(&mut self, q: &[EulerState]) {
        let np = self.elem.num_nodes();
        let n_fluxes = self.mesh.num_cells() + 1;

        for i in 0..n_fluxes {
            let minus = if i > 0 {
                q[i * np - 1]
            } else {
                self.left_state()
            };
            let plus = if i < n_fluxes - 1 {
                q[i * np]
            } else {
                self.right_state()
            };
            self.fluxes[i] = self.flux.numerical_surface_flux(minus, plus, 1.0);
        }
    }

    /// Evaluate the semi-discrete right-hand side dq/dt = -div f(q).
    ///
    /// `q` and `rhs` are cell-major/node-minor sequences of `num_dofs`
    /// values; `rhs` is fully overwritten. The time argument is accepted for
    /// the operator contract; the far-field boundary data is steady.
    pub fn apply(&mut self, q: &[EulerState], _t: f64, rhs: &mut [EulerState]) {
        assert_eq!(q.len(), self.num_dofs(), "state length mismatch");
        assert_eq!(rhs.len(), q.len(), "output length mismatch");

        self.assemble_numerical_fluxes(q);

        let np = self.elem.num_nodes();
        let mut div = FluxDivergence1D::new(&self.elem, &self.flux);

        for cell in 0..self.mesh.num_cells() {
            let lo = cell * np;
            let out = &mut rhs[lo..lo + np];
            div.apply(
                &q[lo..lo + np],
                self.fluxes[cell],
                self.fluxes[cell + 1],
                self.mesh.jacobian(cell),
                out,
            );
            for v in out.iter_mut() {
                *v = *v * -1.0;
            }
        }
    }

    /// Parallel right-hand-side evaluation over rayon.
    ///
    /// Interface fluxes are assembled serially, then cells fan out with
    /// disjoint output chunks; results match `apply`.
    #[cfg(feature = "parallel")]
    pub fn apply_parallel(&mut self, q: &[EulerState], _t: f64, rhs: &mut [EulerState]) {
        use rayon::prelude::*;

        assert_eq!(q.len(), self.num_dofs(), "state length mismatch");
        assert_eq!(rhs.len(), q.len(), "output length mismatch");

        self.assemble_numerical_fluxes(q);

        let np = self.elem.num_nodes();
        let elem = &self.elem;
        let flux = &self.flux;
        let fluxes = &self.fluxes;
        let mesh = &self.mesh;

        rhs.par_chunks_mut(np).enumerate().for_each(|(cell, out)| {
            let mut div = FluxDivergence1D::new(elem, flux);
            let lo = cell * np;
            div.apply(
                &q[lo..lo + np],
                fluxes[cell],
                fluxes[cell + 1],
                mesh.jacobian(cell),
                out,
            );
            for v in out.iter_mut() {
                *v = *v * -1.0;
            }
        });
    }
}
