//! Standard test objectives used by tests, demos, and the CLI.

use crate::objective::Objective;

/// Paraboloid f(x) = Σ x_i².
///
/// The unique minimizer is the origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct Paraboloid;

impl Objective for Paraboloid {
    fn value(&self, x: &[f64]) -> f64 {
        x.iter().map(|xi| xi * xi).sum()
    }

    fn gradient(&self, x: &[f64], grad: &mut [f64]) {
        for (g, xi) in grad.iter_mut().zip(x.iter()) {
            *g = 2.0 * xi;
        }
    }
}

/// 2D Rosenbrock function f(x, y) = (a - x)² + b (y - x²)².
///
/// The minimizer is (a, a²).
#[derive(Clone, Copy, Debug)]
pub struct Rosenbrock {
    pub a: f64,
    pub b: f64,
}

impl Default for Rosenbrock {
    fn default() -> Self {
        Self { a: 1.0, b: 100.0 }
    }
}

impl Objective for Rosenbrock {
    fn value(&self, x: &[f64]) -> f64 {
        let x0 = x[0];
        let x1 = x[1];
        (self.a - x0).powi(2) + self.b * (x1 - x0 * x0).powi(2)
    }

    fn gradient(&self, x: &[f64], grad: &mut [f64]) {
        let x0 = x[0];
        let x1 = x[1];

        grad[0] = -2.0 * (self.a - x0) - 4.0 * self.b * x0 * (x1 - x0 * x0);
        grad[1] = 2.0 * self.b * (x1 - x0 * x0);
    }
}
