//! Flux calculators for hyperbolic conservation laws.
//!
//! A flux calculator bundles the three flux functions the scheme needs for
//! one physical law:
//! - the physical flux f(q),
//! - a symmetric, consistent two-point numerical volume flux F(a, b) used by
//!   the flux-differencing volume term, and
//! - a dissipative numerical surface flux reconciling the two one-sided
//!   states at a cell interface.
//!
//! Implementations are stateless apart from physical constants and are
//! freely shareable across threads.

mod advection;
mod euler;

pub use advection::AdvectionFlux;
pub use euler::EulerFlux;

use crate::state::Conserved;

/// Capability interface of a flux law.
///
/// # Contract
///
/// - `numerical_volume_flux` must be symmetric, F(a, b) = F(b, a), and
///   consistent, F(q, q) = f(q); the flux-differencing volume term relies on
///   both.
/// - `numerical_surface_flux` must be consistent at equal states and
///   mirror-symmetric, F*(a, b, s) = F*(b, a, -s), so that the two cells
///   sharing an interface see the same flux (discrete conservation).
/// - `sign_minus` is the outward unit normal of the "minus" side, which in
///   1D degenerates to ±1.
pub trait FluxCalculator: Send + Sync {
    /// Conserved value type this law operates on.
    type State: Conserved;

    /// The physical flux f(q).
    fn physical_flux(&self, q: Self::State) -> Self::State;

    /// Symmetric two-point volume flux F(a, b).
    fn numerical_volume_flux(&self, a: Self::State, b: Self::State) -> Self::State;

    /// Dissipative interface flux F*(minus, plus, sign_minus).
    fn numerical_surface_flux(
        &self,
        minus: Self::State,
        plus: Self::State,
        sign_minus: f64,
    ) -> Self::State;

    /// Largest characteristic speed |λ| at a state, for CFL estimates.
    fn max_wave_speed(&self, q: Self::State) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EulerState;

    #[test]
    fn surface_flux_consistency_advection() {
        // F*(q, q, ·) = f(q) for the advection law
        let flux = AdvectionFlux::new(2.0);
        for &u in &[-1.5, 0.0, 0.3, 4.0] {
            for &sign in &[-1.0, 1.0] {
                let diff = flux.numerical_surface_flux(u, u, sign) - flux.physical_flux(u);
                assert!(diff.abs() < 1e-14, "u={}, sign={}: diff {}", u, sign, diff);
            }
        }
    }

    #[test]
    fn surface_flux_consistency_euler() {
        // F*(q, q, ·) = f(q) for the Euler law
        let flux = EulerFlux::new(1.4);
        let states = [
            EulerState::from_primitives(1.0, 0.0, 1.0, 1.4),
            EulerState::from_primitives(0.125, -0.4, 0.1, 1.4),
            EulerState::from_primitives(2.5, 1.3, 3.7, 1.4),
        ];
        for q in states {
            for &sign in &[-1.0, 1.0] {
                let diff = flux.numerical_surface_flux(q, q, sign) - flux.physical_flux(q);
                assert!(
                    diff.norm_sq() < 1e-26,
                    "q={:?}, sign={}: diff {:?}",
                    q,
                    sign,
                    diff
                );
            }
        }
    }
}
