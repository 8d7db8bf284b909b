//! descent: minimize differentiable scalar functions by gradient descent.
//!
//! - `Objective`: interface for a scalar function of a point in R^n
//! - `FnObjective` / `NumericObjective`: closure adapters, with analytic or
//!   finite-difference gradients
//! - `GradientDescent`: the fixed-step solver
//! - `Minimum`: the result of a minimization run
//!
//! ```
//! use descent_core::{GradientDescent, test_functions::Paraboloid};
//!
//! let solver = GradientDescent {
//!     step_size: 0.01,
//!     max_iters: 1_000_000,
//!     ..GradientDescent::new()
//! };
//! let min = solver.minimize(&Paraboloid, vec![0.0, 10.0]).unwrap();
//! assert!(min.converged);
//! ```

pub mod error;
pub mod objective;
pub mod solver;
pub mod test_functions;
pub mod trace;

pub use error::DescentError;
pub use objective::{FnObjective, NumericObjective, Objective};
pub use solver::{GradientDescent, Minimum};
pub use trace::TraceRecord;
