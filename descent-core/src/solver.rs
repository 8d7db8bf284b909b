//! Fixed-step gradient descent.

use serde::Serialize;

use crate::error::DescentError;
use crate::objective::Objective;
use crate::trace::{TraceRecord, Tracer};

/// Configuration for gradient descent.
#[derive(Clone, Debug)]
pub struct GradientDescent {
    /// Learning rate / step size.
    pub step_size: f64,
    /// Maximum number of iterations.
    pub max_iters: usize,
    /// Considered converged when the gradient norm falls below this threshold.
    pub tol_grad: f64,
    /// If true, stores per-iteration trace rows into the result.
    pub collect_trace: bool,
}

impl GradientDescent {
    pub fn new() -> Self {
        Self {
            step_size: 1e-3,
            max_iters: 100,
            tol_grad: 1e-8,
            collect_trace: false,
        }
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a minimization run.
///
/// Running out of iterations is an answer, not an error: the best point
/// found is returned with `converged = false`.
#[derive(Clone, Debug, Serialize)]
pub struct Minimum {
    pub x: Vec<f64>,
    pub f: f64,
    pub iters: usize,
    pub grad_norm: f64,
    pub converged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TraceRecord>>,
}

impl GradientDescent {
    /// Minimize an [`Objective`] starting from `x0`.
    pub fn minimize<O>(&self, obj: &O, x0: Vec<f64>) -> Result<Minimum, DescentError>
    where
        O: Objective,
    {
        self.run(x0, |x| obj.value(x), |x, g| obj.gradient(x, g))
    }

    /// Minimize using user-provided value and gradient functions.
    pub fn minimize_with_fn<F, G>(
        &self,
        x0: Vec<f64>,
        value_fn: F,
        grad_fn: G,
    ) -> Result<Minimum, DescentError>
    where
        F: FnMut(&[f64]) -> f64,
        G: FnMut(&[f64], &mut [f64]),
    {
        self.run(x0, value_fn, grad_fn)
    }

    fn validate(&self, x0: &[f64]) -> Result<(), DescentError> {
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(DescentError::InvalidStepSize(self.step_size));
        }
        if self.max_iters == 0 {
            return Err(DescentError::InvalidMaxIters);
        }
        if x0.is_empty() {
            return Err(DescentError::EmptyStart);
        }
        if x0.iter().any(|xi| !xi.is_finite()) {
            return Err(DescentError::NonFiniteStart);
        }
        Ok(())
    }

    fn run<F, G>(
        &self,
        mut x: Vec<f64>,
        mut value_fn: F,
        mut grad_fn: G,
    ) -> Result<Minimum, DescentError>
    where
        F: FnMut(&[f64]) -> f64,
        G: FnMut(&[f64], &mut [f64]),
    {
        self.validate(&x)?;

        let n = x.len();
        // Pre-allocate buffers to avoid repeated allocations.
        let mut grad = vec![0.0; n];
        let mut x_next = vec![0.0; n];
        let mut tracer = Tracer::new(self.collect_trace);
        let mut grad_norm = f64::INFINITY;

        for k in 0..self.max_iters {
            grad_fn(&x, &mut grad);

            grad_norm = norm(&grad);
            if !grad_norm.is_finite() {
                return Err(DescentError::NonFiniteGradient { iter: k });
            }

            tracer.step(k, grad_norm, self.step_size, || value_fn(&x));

            if grad_norm < self.tol_grad {
                let f = value_fn(&x);
                if !f.is_finite() {
                    return Err(DescentError::NonFiniteValue { iter: k });
                }
                tracing::debug!(iters = k, grad_norm, "converged");
                return Ok(Minimum {
                    x,
                    f,
                    iters: k,
                    grad_norm,
                    converged: true,
                    trace: tracer.into_history(),
                });
            }

            // x_next = x - step_size * grad
            for i in 0..n {
                x_next[i] = x[i] - self.step_size * grad[i];
            }
            std::mem::swap(&mut x, &mut x_next);
        }

        let f = value_fn(&x);
        if !f.is_finite() {
            return Err(DescentError::NonFiniteValue {
                iter: self.max_iters,
            });
        }
        tracing::debug!(iters = self.max_iters, grad_norm, "stopped at max_iters");
        Ok(Minimum {
            x,
            f,
            iters: self.max_iters,
            grad_norm,
            converged: false,
            trace: tracer.into_history(),
        })
    }
}

fn norm(v: &[f64]) -> f64 {
    v.iter().map(|vi| vi * vi).sum::<f64>().sqrt()
}
