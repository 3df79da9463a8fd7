//! End-to-end tests for the advection problem.
//!
//! Covers the pinned regression run (1024 cells, order 1, 10000 RK4 steps)
//! and the spatial convergence order of the scheme.

use split_dg::{rk4_step, Advection1D, RkWorkspace};

/// March the advection problem for a fixed number of steps at its standard
/// step size and return (final time, mean squared error, L2 error).
fn run_advection(n_cells: usize, order: usize, total_steps: usize) -> (f64, f64, f64) {
    let mut problem = Advection1D::new(n_cells, order).unwrap();
    let n_dofs = problem.num_dofs();

    let mut u = problem.initial_state();
    let mut work = RkWorkspace::new(n_dofs);

    let dt = problem.cfl_timestep();
    let mut t = 0.0;

    for _ in 0..total_steps {
        rk4_step(
            &mut u.data,
            t,
            dt,
            |q, stage_t, out| problem.apply(q, stage_t, out),
            &mut work,
        );
        t += dt;
    }

    let reference = problem.exact_solution(t);
    let mse = u.mean_squared_error(&reference.data);
    let l2 = u.l2_error(problem.mesh(), problem.reference_element(), |x| {
        (x - problem.wave_speed() * t).sin()
    });

    (t, mse, l2)
}

#[test]
fn regression_1024_cells_p1() {
    // the pinned production-scale run: 1024 cells, order 1,
    // dt = 0.25/order² · h/c, 10000 steps
    let (t, mse, _) = run_advection(1024, 1, 10000);

    println!("t = {}, error norm = {:e}", t, mse);
    assert!(
        mse < 1e-3,
        "mean squared error {} exceeds the regression bound at t = {}",
        mse,
        t
    );
}

#[test]
fn convergence_p2() {
    // order 2 should converge at roughly 3rd order in the cell width
    let order = 2;
    let resolutions = [16usize, 32, 64];

    // equal final times: steps scale with the resolution since dt ∝ h
    let base_steps = 64;
    let errors: Vec<f64> = resolutions
        .iter()
        .enumerate()
        .map(|(i, &n)| run_advection(n, order, base_steps << i).2)
        .collect();

    println!("P2 convergence:");
    for (i, (&n, &err)) in resolutions.iter().zip(errors.iter()).enumerate() {
        if i > 0 {
            let observed = (errors[i - 1] / err).log2();
            println!("  n={:3}: error={:.4e}, order={:.2}", n, err, observed);
        } else {
            println!("  n={:3}: error={:.4e}", n, err);
        }
    }

    let observed = (errors[errors.len() - 2] / errors[errors.len() - 1]).log2();
    assert!(
        observed > 2.5,
        "P2 should be at least 3rd order, observed {:.2}",
        observed
    );
}

#[test]
fn convergence_p4() {
    // order 4 should converge at roughly 5th order in the cell width
    let order = 4;
    let resolutions = [4usize, 8, 16];

    let base_steps = 64;
    let errors: Vec<f64> = resolutions
        .iter()
        .enumerate()
        .map(|(i, &n)| run_advection(n, order, base_steps << i).2)
        .collect();

    println!("P4 convergence:");
    for (i, (&n, &err)) in resolutions.iter().zip(errors.iter()).enumerate() {
        if i > 0 {
            let observed = (errors[i - 1] / err).log2();
            println!("  n={:3}: error={:.4e}, order={:.2}", n, err, observed);
        } else {
            println!("  n={:3}: error={:.4e}", n, err);
        }
    }

    let observed = (errors[errors.len() - 2] / errors[errors.len() - 1]).log2();
    assert!(
        observed > 4.0,
        "P4 should be at least 5th order, observed {:.2}",
        observed
    );
}

#[test]
fn short_march_stays_close_to_exact() {
    // a coarse, short run still tracks the traveling wave
    let (t, mse, l2) = run_advection(64, 3, 200);

    assert!(t > 0.0);
    assert!(mse < 1e-8, "mse {}", mse);
    assert!(l2 < 1e-3, "l2 {}", l2);
}
