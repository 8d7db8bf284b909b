use thiserror::Error;

/// Errors reported by the gradient descent solver.
#[derive(Debug, Error)]
pub enum DescentError {
    #[error("step size must be positive and finite, got {0}")]
    InvalidStepSize(f64),

    #[error("max_iters must be at least 1")]
    InvalidMaxIters,

    #[error("start point is empty")]
    EmptyStart,

    #[error("start point contains a non-finite coordinate")]
    NonFiniteStart,

    #[error("objective value became non-finite at iteration {iter}")]
    NonFiniteValue { iter: usize },

    #[error("gradient became non-finite at iteration {iter}")]
    NonFiniteGradient { iter: usize },
}
