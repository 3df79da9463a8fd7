//! Conserved state for the 1D compressible Euler equations.

use std::ops::{Add, Mul, Sub};

use super::Conserved;

/// Euler conserved variables (ρ, ρu, E).
///
/// Density, momentum, and total energy per unit volume. Primitive
/// quantities (velocity, pressure, sound speed) are derived on demand; the
/// ratio of specific heats γ is owned by the flux calculator, not the state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerState {
    /// Density ρ (must stay positive)
    pub rho: f64,
    /// Momentum ρu
    pub rho_u: f64,
    /// Total energy E
    pub e: f64,
}

impl EulerState {
    /// Create a state from conserved variables.
    pub fn new(rho: f64, rho_u: f64, e: f64) -> Self {
        Self { rho, rho_u, e }
    }

    /// Create a state from primitive variables (ρ, u, p).
    ///
    /// E = p/(γ-1) + ρu²/2.
    pub fn from_primitives(rho: f64, u: f64, p: f64, gamma: f64) -> Self {
        Self {
            rho,
            rho_u: rho * u,
            e: p / (gamma - 1.0) + rho * u * u / 2.0,
        }
    }

    /// Velocity u = ρu / ρ.
    pub fn velocity(&self) -> f64 {
        debug_assert!(self.rho > 0.0, "density must be positive, got {}", self.rho);
        self.rho_u / self.rho
    }

    /// Pressure p = (γ-1)(E - ρu²/2).
    pub fn pressure(&self, gamma: f64) -> f64 {
        let u = self.velocity();
        (gamma - 1.0) * (self.e - self.rho_u * u / 2.0)
    }

    /// Sound speed c = √(γp/ρ).
    pub fn sound_speed(&self, gamma: f64) -> f64 {
        let p = self.pressure(gamma);
        debug_assert!(p > 0.0, "pressure must be positive, got {}", p);
        (gamma * p / self.rho).sqrt()
    }

    /// Specific total energy e = E/ρ.
    pub fn specific_energy(&self) -> f64 {
        debug_assert!(self.rho > 0.0, "density must be positive, got {}", self.rho);
        self.e / self.rho
    }
}

impl Add for EulerState {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            rho: self.rho + other.rho,
            rho_u: self.rho_u + other.rho_u,
            e: self.e + other.e,
        }
    }
}

impl Sub for EulerState {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            rho: self.rho - other.rho,
            rho_u: self.rho_u - other.rho_u,
            e: self.e - other.e,
        }
    }
}

impl Mul<f64> for EulerState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            rho: self.rho * scalar,
            rho_u: self.rho_u * scalar,
            e: self.e * scalar,
        }
    }
}

impl Mul<EulerState> for f64 {
    type Output = EulerState;

    fn mul(self, state: EulerState) -> EulerState {
        state * self
    }
}

impl Conserved for EulerState {
    const N_VARS: usize = 3;

    fn zero() -> Self {
        Self::default()
    }

    fn norm_sq(&self) -> f64 {
        self.rho * self.rho + self.rho_u * self.rho_u + self.e * self.e
    }
}
