//! Traveling sine wave, advected across [-π, π] for 10000 RK4 steps.
//!
//! Usage: `cargo run --example advection_1d [n_cells] [order]`
//! (defaults: 1024 cells, order 1)
//!
//! Writes `advection_1d.txt` with the computed and reference profiles as
//! two-column blank-line-separated series, ready for plotting.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use tracing::info;

use split_dg::{rk4_step, Advection1D, RkWorkspace};

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let n_cells: usize = args
        .next()
        .map(|s| s.parse().expect("n_cells must be an integer"))
        .unwrap_or(1024);
    let order: usize = args
        .next()
        .map(|s| s.parse().expect("order must be an integer"))
        .unwrap_or(1);

    let mut problem = Advection1D::new(n_cells, order).expect("unsupported polynomial order");
    let n_dofs = problem.num_dofs();

    info!(n_cells, order, n_dofs, "advection_1d");

    let x = problem.node_positions();
    let mut u = problem.initial_state();
    let mut work = RkWorkspace::new(n_dofs);

    let total_steps = 10000;
    let dt = problem.cfl_timestep();
    let mut t = 0.0;

    let start = Instant::now();
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
    let elapsed = start.elapsed();

    let reference = problem.exact_solution(t);
    let err = u.mean_squared_error(&reference.data);

    println!("t = {}, error norm = {:e}", t, err);
    println!("time used: {} ms", elapsed.as_millis());

    // two-column output: computed solution, then the reference series
    let mut file = BufWriter::new(File::create("advection_1d.txt")?);
    writeln!(file, "#         x         y")?;
    for i in 0..n_dofs {
        writeln!(file, "{:.15} {:.15}", x[i], u.data[i])?;
    }
    writeln!(file)?;
    writeln!(file, "#         x         reference solution")?;
    for i in 0..n_dofs {
        writeln!(file, "{:.15} {:.15}", x[i], reference.data[i])?;
    }

    Ok(())
}
