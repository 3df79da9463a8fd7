//! Flux calculator for the 1D compressible Euler equations.
//!
//! State q = (ρ, ρu, E) with pressure p = (γ-1)(E - ρu²/2). The volume flux
//! is the kinetic-energy-preserving split-form flux of Gassner, Winters and
//! Kopriva ("Split Form Nodal Discontinuous Galerkin Schemes with
//! Summation-By-Parts Property for the Compressible Euler Equations", 2016):
//! arithmetic averages of ρ, u, p and the specific energy e = E/ρ combined
//! as (ρ̄ū, ρ̄ūū + p̄, (ρ̄ē + p̄)ū). The surface flux adds local
//! Lax-Friedrichs dissipation with speed max(|u| + c) over the two sides.

use super::FluxCalculator;
use crate::state::EulerState;

/// Compressible Euler flux with fixed ratio of specific heats.
#[derive(Clone, Copy, Debug)]
pub struct EulerFlux {
    gamma: f64,
}

impl EulerFlux {
    /// Create the flux calculator for ratio of specific heats `gamma`.
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }

    /// Ratio of specific heats γ.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl FluxCalculator for EulerFlux {
    type State = EulerState;

    fn physical_flux(&self, q: EulerState) -> EulerState {
        debug_assert!(q.rho > 0.0, "density must be positive, got {}", q.rho);

        let u = q.velocity();
        let p = q.pressure(self.gamma);

        EulerState::new(q.rho_u, q.rho_u * u + p, (q.e + p) * u)
    }

    fn numerical_volume_flux(&self, a: EulerState, b: EulerState) -> EulerState {
        debug_assert!(a.rho > 0.0 && b.rho > 0.0, "density must be positive");

        let rho = (a.rho + b.rho) / 2.0;
        let u = (a.velocity() + b.velocity()) / 2.0;
        let p = (a.pressure(self.gamma) + b.pressure(self.gamma)) / 2.0;
        let e = (a.specific_energy() + b.specific_energy()) / 2.0;

        EulerState::new(rho * u, rho * u * u + p, (rho * e + p) * u)
    }

    fn numerical_surface_flux(
        &self,
        minus: EulerState,
        plus: EulerState,
        sign_minus: f64,
    ) -> EulerState {
        debug_assert!(minus.rho > 0.0 && plus.rho > 0.0, "density must be positive");

        let lf_minus = minus.velocity().abs() + minus.sound_speed(self.gamma);
        let lf_plus = plus.velocity().abs() + plus.sound_speed(self.gamma);
        let lf = lf_minus.max(lf_plus) / 2.0;

        // jump oriented by the outward normal of the minus side
        let jump = if sign_minus < 0.0 {
            plus - minus
        } else {
            minus - plus
        };

        self.numerical_volume_flux(minus, plus) + jump * lf
    }

    fn max_wave_speed(&self, q: EulerState) -> f64 {
        q.velocity().abs() + q.sound_speed(self.gamma)
    }
}
