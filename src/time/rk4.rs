//! Classical four-stage explicit Runge-Kutta integration.
//!
//! The integrator treats the spatial operator as an opaque right-hand side
//! `(state, t) -> rhs` and is generic over the conserved value type. All
//! stage combinations are elementwise axpy operations over caller-owned
//! scratch buffers, so a full time march performs no allocation after setup
//! and the per-step cost is constant.

use crate::state::Conserved;

/// Elementwise `out[i] = a * x[i] + y[i]`.
///
/// The output buffer cannot alias either input: `out` is an exclusive
/// borrow while `x` and `y` are shared, so the no-aliasing precondition is
/// enforced by the borrow checker rather than at runtime.
///
/// # Panics
/// If the slice lengths differ.
pub fn axpy<V: Conserved>(a: f64, x: &[V], y: &[V], out: &mut [V]) {
    assert_eq!(x.len(), y.len(), "axpy inputs must have equal length");
    assert_eq!(x.len(), out.len(), "axpy output must match input length");

    for i in 0..x.len() {
        out[i] = x[i] * a + y[i];
    }
}

/// Scratch buffers for [`rk4_step`], allocated once by the caller and reused
/// across the whole march.
///
/// Contents are overwritten on every step; stale values carry no meaning
/// between calls.
pub struct RkWorkspace<V> {
    stage: Vec<V>,
    k1: Vec<V>,
    k2: Vec<V>,
    k3: Vec<V>,
    k4: Vec<V>,
}

impl<V: Conserved> RkWorkspace<V> {
    /// Allocate workspace for a state of `len` values.
    pub fn new(len: usize) -> Self {
        Self {
            stage: vec![V::zero(); len],
            k1: vec![V::zero(); len],
            k2: vec![V::zero(); len],
            k3: vec![V::zero(); len],
            k4: vec![V::zero(); len],
        }
    }

    /// Number of values each buffer holds.
    pub fn len(&self) -> usize {
        self.stage.len()
    }

    /// Whether the workspace is sized for an empty state.
    pub fn is_empty(&self) -> bool {
        self.stage.is_empty()
    }
}

/// Advance `u` in place by one step of the classical RK4 scheme.
///
/// ```text
/// k1 = op(u, t)
/// k2 = op(u + dt/2 k1, t + dt/2)
/// k3 = op(u + dt/2 k2, t + dt/2)
/// k4 = op(u + dt k3,   t + dt)
/// u <- u + dt/6 (k1 + 2 k2 + 2 k3 + k4)
/// ```
///
/// `op(state, t, rhs)` must write the right-hand side for `state` at time
/// `t` into `rhs` and may keep internal scratch (hence `FnMut`).
///
/// # Panics
/// If the workspace length does not match the state.
pub fn rk4_step<V, Op>(u: &mut [V], t: f64, dt: f64, mut op: Op, work: &mut RkWorkspace<V>)
where
    V: Conserved,
    Op: FnMut(&[V], f64, &mut [V]),
{
    assert_eq!(u.len(), work.len(), "workspace must match the state length");

    let half = dt / 2.0;

    op(u, t, &mut work.k1);

    axpy(half, &work.k1, u, &mut work.stage);
    op(&work.stage, t + half, &mut work.k2);

    axpy(half, &work.k2, u, &mut work.stage);
    op(&work.stage, t + half, &mut work.k3);

    axpy(dt, &work.k3, u, &mut work.stage);
    op(&work.stage, t + dt, &mut work.k4);

    // u <- u + dt/6 (k1 + 2 k2 + 2 k3 + k4), assembled with two axpy pairs;
    // stage and k1 double as scratch for the partial sums
    axpy(2.0, &work.k2, &work.k1, &mut work.stage); // stage = k1 + 2 k2
    axpy(2.0, &work.k3, &work.k4, &mut work.k1); // k1 = 2 k3 + k4
    axpy(dt / 6.0, &work.stage, u, &mut work.k2); // k2 = u + dt/6 stage
    axpy(dt / 6.0, &work.k1, &work.k2, u); // u = k2 + dt/6 k1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EulerState;

    #[test]
    fn axpy_elementwise() {
        let x = [1.0, 2.0, 3.0];
        let y = [10.0, 20.0, 30.0];
        let mut out = [0.0; 3];

        axpy(2.0, &x, &y, &mut out);
        assert_eq!(out, [12.0, 24.0, 36.0]);
    }

    #[test]
    fn axpy_over_euler_states() {
        let x = [EulerState::new(1.0, 0.0, 2.0)];
        let y = [EulerState::new(0.0, 1.0, 1.0)];
        let mut out = [EulerState::zero()];

        axpy(0.5, &x, &y, &mut out);
        assert_eq!(out[0], EulerState::new(0.5, 1.0, 2.0));
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn axpy_length_mismatch_panics() {
        let mut out = [0.0; 2];
        axpy(1.0, &[1.0, 2.0], &[1.0], &mut out);
    }

    #[test]
    fn exact_for_cubic_rhs_in_time() {
        // RK4 integrates polynomial-in-time right-hand sides up to t^3
        // exactly: y' = 4 t^3, y(0) = 0 => y(dt) = dt^4
        let mut u = vec![0.0f64];
        let mut work = RkWorkspace::new(1);
        let dt = 0.37;

        rk4_step(
            &mut u,
            0.0,
            dt,
            |_q, t, out| out[0] = 4.0 * t * t * t,
            &mut work,
        );

        assert!((u[0] - dt.powi(4)).abs() < 1e-14);
    }

    #[test]
    fn fifth_order_local_error() {
        // one step on y' = -y from y(0) = 1; halving dt must shrink the
        // one-step error by about 2^5
        let error_for = |dt: f64| {
            let mut u = vec![1.0f64];
            let mut work = RkWorkspace::new(1);
            rk4_step(&mut u, 0.0, dt, |q, _t, out| out[0] = -q[0], &mut work);
            (u[0] - (-dt).exp()).abs()
        };

        let e1 = error_for(0.1);
        let e2 = error_for(0.05);
        let ratio = e1 / e2;

        assert!(
            ratio > 24.0 && ratio < 40.0,
            "one-step error should scale as O(dt^5): ratio {}",
            ratio
        );
    }

    #[test]
    fn matches_exponential_decay_over_many_steps() {
        let mut u = vec![1.0f64; 4];
        let mut work = RkWorkspace::new(4);
        let dt = 0.01;
        let steps = 100;

        for s in 0..steps {
            rk4_step(
                &mut u,
                s as f64 * dt,
                dt,
                |q, _t, out| {
                    for i in 0..q.len() {
                        out[i] = -q[i];
                    }
                },
                &mut work,
            );
        }

        let expected = (-1.0f64).exp();
        for &v in &u {
            assert!(
                (v - expected).abs() < 1e-9,
                "expected {}, got {}",
                expected,
                v
            );
        }
    }

    #[test]
    fn stage_times_reach_t_plus_dt() {
        // record the times the operator sees: t, t+dt/2, t+dt/2, t+dt
        let mut seen = Vec::new();
        let mut u = vec![0.0f64];
        let mut work = RkWorkspace::new(1);

        rk4_step(
            &mut u,
            1.0,
            0.2,
            |_q, t, out| {
                seen.push(t);
                out[0] = 0.0;
            },
            &mut work,
        );

        assert_eq!(seen.len(), 4);
        assert!((seen[0] - 1.0).abs() < 1e-15);
        assert!((seen[1] - 1.1).abs() < 1e-15);
        assert!((seen[2] - 1.1).abs() < 1e-15);
        assert!((seen[3] - 1.2).abs() < 1e-15);
    }
}
