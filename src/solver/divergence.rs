//! Flux-differencing divergence kernel for one element.
//!
//! Computes the discrete divergence of the convective flux at the collocated
//! nodes of a single cell. The volume term is NOT the derivative of the
//! physical flux of the nodal values; it is the flux-differencing form
//!
//!   div_i = 2 Σ_j D[i,j] F(q_i, q_j)
//!
//! over the symmetric two-point volume-flux matrix F (diagonal = physical
//! flux). For smooth data this reproduces the flux derivative exactly while
//! inheriting the summation-by-parts structure of D, which is what keeps the
//! scheme conservative and entropy-stable without over-integration.
//!
//! The 1D surface lifting degenerates compared to 2D/3D: face nodes are
//! hard-coded to 0 and N-1, face normals to -1 and +1, and the face mass
//! matrix to the scalar 1, leaving a division by the volume mass entry.

use crate::flux::FluxCalculator;
use crate::operators::ReferenceElement1D;
use crate::state::Conserved;

/// Per-cell divergence operator.
///
/// Owns an N×N scratch buffer of volume fluxes, so `apply` takes `&mut
/// self`; a thread needing its own evaluations needs its own instance, while
/// the referenced element and flux calculator stay shared.
pub struct FluxDivergence1D<'a, F: FluxCalculator> {
    elem: &'a ReferenceElement1D,
    flux: &'a F,
    vol_fluxes: Vec<F::State>,
}

impl<'a, F: FluxCalculator> FluxDivergence1D<'a, F> {
    /// Create a divergence operator over a reference element and flux law.
    pub fn new(elem: &'a ReferenceElement1D, flux: &'a F) -> Self {
        let n = elem.num_nodes();
        Self {
            elem,
            flux,
            vol_fluxes: vec![F::State::zero(); n * n],
        }
    }

    /// Compute the flux divergence of one cell.
    ///
    /// `q` holds the N nodal states, `flux_left`/`flux_right` the numerical
    /// fluxes at the two bracketing interfaces, and `jacobian` the cell's
    /// dx/dr. Results are written to `out` in physical coordinates.
    ///
    /// # Panics
    /// If the Jacobian is not positive or slice lengths do not match the
    /// element.
    pub fn apply(
        &mut self,
        q: &[F::State],
        flux_left: F::State,
        flux_right: F::State,
        jacobian: f64,
        out: &mut [F::State],
    ) {
        let n = self.elem.num_nodes();
        assert!(
            jacobian > 0.0,
            "cell Jacobian must be positive, got {}",
            jacobian
        );
        assert_eq!(q.len(), n, "nodal state length must match the element");
        assert_eq!(out.len(), n, "output length must match the element");

        let d = self.elem.derivative_matrix();
        let vol = &mut self.vol_fluxes;

        // volume term: fill the upper triangle with two-point fluxes, mirror
        // the lower triangle from symmetry, physical flux on the diagonal
        for i in 0..n {
            for j in 0..i {
                vol[i * n + j] = vol[j * n + i];
            }
            vol[i * n + i] = self.flux.physical_flux(q[i]);
            for j in (i + 1)..n {
                vol[i * n + j] = self.flux.numerical_volume_flux(q[i], q[j]);
            }

            let mut acc = F::State::zero();
            for j in 0..n {
                acc = acc + vol[i * n + j] * (2.0 * d[(i, j)]);
            }
            out[i] = acc;
        }

        // surface lifting at the two face nodes
        out[0] = out[0] - (flux_left - vol[0]) * (1.0 / self.elem.weight(0));
        out[n - 1] =
            out[n - 1] - (vol[n * n - 1] - flux_right) * (1.0 / self.elem.weight(n - 1));

        // map back to physical coordinates
        let inv_j = 1.0 / jacobian;
        for v in out.iter_mut() {
            *v = *v * inv_j;
        }
    }
}
