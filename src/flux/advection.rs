//! Flux calculator for 1D linear advection.
//!
//! The advection equation u_t + c u_x = 0 has physical flux f(u) = c·u. The
//! volume flux is the plain arithmetic average (symmetric and consistent),
//! and the surface flux adds an upwind correction of the jump scaled by |c|,
//! which for constant c reduces to full upwinding.

use super::FluxCalculator;

/// Linear advection flux with constant wave speed.
#[derive(Clone, Copy, Debug)]
pub struct AdvectionFlux {
    velocity: f64,
}

impl AdvectionFlux {
    /// Create the flux calculator for wave speed `velocity`.
    pub fn new(velocity: f64) -> Self {
        Self { velocity }
    }

    /// The constant wave speed.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}

impl FluxCalculator for AdvectionFlux {
    type State = f64;

    fn physical_flux(&self, u: f64) -> f64 {
        self.velocity * u
    }

    fn numerical_volume_flux(&self, a: f64, b: f64) -> f64 {
        self.velocity * (a + b) / 2.0
    }

    fn numerical_surface_flux(&self, minus: f64, plus: f64, sign_minus: f64) -> f64 {
        // jump oriented by the outward normal of the minus side
        let jump = if sign_minus < 0.0 {
            plus - minus
        } else {
            minus - plus
        };
        self.numerical_volume_flux(minus, plus) + self.velocity.abs() * jump / 2.0
    }

    fn max_wave_speed(&self, _u: f64) -> f64 {
        self.velocity.abs()
    }
}
