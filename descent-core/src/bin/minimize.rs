//! Minimize a test objective by gradient descent and print the position.
//!
//! Defaults reproduce the classic smoke run: the paraboloid x² + y² from
//! (0, 10) with step size 0.01 and at most one million iterations.

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use descent_core::{test_functions::{Paraboloid, Rosenbrock}, GradientDescent, Minimum};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ObjectiveKind {
    Paraboloid,
    Rosenbrock,
}

#[derive(Parser, Debug)]
#[command(name = "minimize", about = "Minimize a test objective by gradient descent")]
struct Cli {
    #[arg(long, value_enum, default_value_t = ObjectiveKind::Paraboloid)]
    objective: ObjectiveKind,

    /// Starting point, comma-separated.
    #[arg(long, default_value = "0,10", value_delimiter = ',')]
    start: Vec<f64>,

    #[arg(long, default_value_t = 0.01)]
    step_size: f64,

    #[arg(long, default_value_t = 1_000_000)]
    max_iters: usize,

    #[arg(long, default_value_t = 1e-8)]
    tol_grad: f64,

    /// Emit the full result as JSON instead of the position line.
    #[arg(long)]
    json: bool,

    /// Collect the per-iteration trace and include it in the JSON output.
    #[arg(long)]
    trace: bool,

    #[arg(long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("descent_core=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("descent_core=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let solver = GradientDescent {
        step_size: cli.step_size,
        max_iters: cli.max_iters,
        tol_grad: cli.tol_grad,
        collect_trace: cli.trace,
    };

    let result = match cli.objective {
        ObjectiveKind::Paraboloid => solver.minimize(&Paraboloid, cli.start),
        ObjectiveKind::Rosenbrock => {
            if cli.start.len() != 2 {
                eprintln!("error: rosenbrock expects a 2D start point");
                std::process::exit(1);
            }
            solver.minimize(&Rosenbrock::default(), cli.start)
        }
    };

    let min = match result {
        Ok(min) => min,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    if !min.converged {
        tracing::warn!(
            iters = min.iters,
            grad_norm = min.grad_norm,
            "stopped before reaching the gradient tolerance"
        );
    }

    print_result(&min, cli.json || cli.trace);
}

fn print_result(min: &Minimum, json: bool) {
    if json {
        match serde_json::to_string_pretty(min) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{:?}", min.x);
    }
}
