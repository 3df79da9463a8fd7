//! Sod shock tube on [0, 1], marched to t = 0.2 with adaptive RK4 steps.
//!
//! Usage: `cargo run --example euler_1d [n_cells] [order]`
//! (defaults: 1024 cells, order 2)
//!
//! Writes `euler_1d.txt` with density, momentum, and energy profiles as
//! two-column blank-line-separated series, ready for plotting.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use tracing::info;

use split_dg::{rk4_step, Euler1D, RkWorkspace};

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
        .unwrap_or(2);

    let mut problem = Euler1D::new(n_cells, order).expect("unsupported polynomial order");
    let n_dofs = problem.num_dofs();

    info!(n_cells, order, n_dofs, "euler_1d");

    let x = problem.node_positions();
    let mut q = problem.initial_state();
    let mut work = RkWorkspace::new(n_dofs);

    let t_final = 0.2;
    let max_steps = 10000;
    let mut t = 0.0;
    let mut dt = problem.timestep_size(&q.data);
    info!(dt, "initial step size");

    let start = Instant::now();
    let mut steps = 0;
    while t < t_final && steps < max_steps {
        rk4_step(
            &mut q.data,
            t,
            dt,
            |state, stage_t, out| problem.apply(state, stage_t, out),
            &mut work,
        );
        t += dt;
        steps += 1;

        dt = problem.timestep_size(&q.data);
        if t + dt > t_final {
            dt = t_final - t;
        }
    }
    let elapsed = start.elapsed();

    println!("t = {}, steps = {}", t, steps);
    println!("time used: {} ms", elapsed.as_millis());

    // two-column output per conserved variable, blank-line-separated
    let mut file = BufWriter::new(File::create("euler_1d.txt")?);
    writeln!(file, "#         x         density")?;
    for i in 0..n_dofs {
        writeln!(file, "{:.15} {:.15}", x[i], q.data[i].rho)?;
    }
    writeln!(file)?;
    writeln!(file, "#         x         momentum")?;
    for i in 0..n_dofs {
        writeln!(file, "{:.15} {:.15}", x[i], q.data[i].rho_u)?;
    }
    writeln!(file)?;
    writeln!(file, "#         x         energy")?;
    for i in 0..n_dofs {
        writeln!(file, "{:.15} {:.15}", x[i], q.data[i].e)?;
    }

    Ok(())
}
