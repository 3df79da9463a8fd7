//! Linear advection of a sine wave across [-π, π].
//!
//! Solves u_t + c u_x = 0 with c = 2π, u(x, 0) = sin(x). The exact solution
//! is the traveling wave u(x, t) = sin(x - c t); boundary treatment is a
//! time-dependent Dirichlet inflow on the left (the exact-solution trace)
//! and value extrapolation on the right outflow.

use std::f64::consts::PI;

use tracing::debug;

use crate::flux::{AdvectionFlux, FluxCalculator};
use crate::mesh::UniformMesh1D;
use crate::operators::ReferenceElement1D;
use crate::polynomial::QuadratureError;
use crate::solver::{FluxDivergence1D, Solution};

/// Discrete spatial operator for the advection test problem.
#[derive(Clone)]
pub struct Advection1D {
    mesh: UniformMesh1D,
    elem: ReferenceElement1D,
    flux: AdvectionFlux,
    /// Interface fluxes, one per cell face; overwritten every evaluation.
    fluxes: Vec<f64>,
}

impl Advection1D {
    /// Wave speed of the traveling sine.
    const WAVE_SPEED: f64 = 2.0 * PI;

    /// Set up the problem on [-π, π] with `n_cells` cells of the given
    /// polynomial order.
    pub fn new(n_cells: usize, order: usize) -> Result<Self, QuadratureError> {
        let mesh = UniformMesh1D::uniform(-PI, PI, n_cells);
        let elem = ReferenceElement1D::new(order)?;

        debug!(
            n_cells,
            order,
            n_dofs = n_cells * elem.num_nodes(),
            "advection problem set up"
        );

        Ok(Self {
            mesh,
            elem,
            flux: AdvectionFlux::new(Self::WAVE_SPEED),
            fluxes: vec![0.0; n_cells + 1],
        })
    }

    /// The constant wave speed c = 2π.
    pub fn wave_speed(&self) -> f64 {
        self.flux.velocity()
    }

    /// Smallest cell width.
    pub fn min_elem_size(&self) -> f64 {
        self.mesh.h_min()
    }

    /// Total number of degrees of freedom.
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

    /// The initial condition u(x, 0) = sin(x).
    pub fn initial_state(&self) -> Solution<f64> {
        let mut u = Solution::new(self.mesh.num_cells(), self.elem.num_nodes());
        u.set_from_function(&self.mesh, &self.elem, |x| x.sin());
        u
    }

    /// The exact traveling-wave solution at time `t`.
    pub fn exact_solution(&self, t: f64) -> Solution<f64> {
        let c = self.wave_speed();
        let mut u = Solution::new(self.mesh.num_cells(), self.elem.num_nodes());
        u.set_from_function(&self.mesh, &self.elem, |x| (x - c * t).sin());
        u
    }

    /// Stable step size 0.25/order² · h/c used by the demo driver.
    pub fn cfl_timestep(&self) -> f64 {
        let order = self.elem.order() as f64;
        0.25 / (order * order) * self.min_elem_size() / self.wave_speed()
    }

    /// Exact-solution trace at the inflow boundary.
    fn inflow_value(&self, t: f64) -> f64 {
        (self.mesh.x_min() - self.wave_speed() * t).sin()
    }

    /// Fill the interface-flux array for state `q` at time `t`.
    ///
    /// Interface i sits between cells i-1 and i; its minus side is the last
    /// node of the left cell (or the inflow value at the domain boundary)
    /// and its plus side is the first node of the right cell (or the last
    /// interior node: outflow by value extrapolation).
    fn assemble_numerical_fluxes(&mut self, q: &[f64], t: f64) {
        let np = self.elem.num_nodes();
        let n_fluxes = self.mesh.num_cells() + 1;

        for i in 0..n_fluxes {
            let minus = if i > 0 {
                q[i * np - 1]
            } else {
                self.inflow_value(t)
            };
            let plus = if i < n_fluxes - 1 {
                q[i * np]
            } else {
                q[i * np - 1]
            };
            self.fluxes[i] = self.flux.numerical_surface_flux(minus, plus, 1.0);
        }
    }

    /// Evaluate the semi-discrete right-hand side du/dt = -div f(u).
    ///
    /// `q` and `rhs` are cell-major/node-minor sequences of `num_dofs`
    /// values; `rhs` is fully overwritten.
    pub fn apply(&mut self, q: &[f64], t: f64, rhs: &mut [f64]) {
        assert_eq!(q.len(), self.num_dofs(), "state length mismatch");
        assert_eq!(rhs.len(), q.len(), "output length mismatch");

        self.assemble_numerical_fluxes(q, t);

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
                *v = -*v;
            }
        }
    }

    /// Parallel right-hand-side evaluation over rayon.
    ///
    /// Interface fluxes are assembled serially, then cells fan out with
    /// disjoint output chunks; results match `apply`.
    #[cfg(feature = "parallel")]
    pub fn apply_parallel(&mut self, q: &[f64], t: f64, rhs: &mut [f64]) {
        use rayon::prelude::*;

        assert_eq!(q.len(), self.num_dofs(), "state length mismatch");
        assert_eq!(rhs.len(), q.len(), "output length mismatch");

        self.assemble_numerical_fluxes(q, t);

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
                *v = -*v;
            }
        });
    }
}
