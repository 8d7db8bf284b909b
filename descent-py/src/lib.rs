//! Python bindings for the descent solver.
//!
//! Exposes an `Optimize` class over a Python callable:
//!
//! ```python
//! from descent import Optimize
//!
//! opt = Optimize(lambda x: x[0] ** 2 + x[1] ** 2)
//! min_pos = opt.gradient_descent((0, 10), step_size=0.01, max_iters=1_000_000)
//! ```

use std::cell::RefCell;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use descent_core::{GradientDescent, Minimum, NumericObjective};

/// Captures the first error raised inside a Python callback so it can be
/// re-raised after the solver returns.
#[derive(Default)]
struct PyErrState(RefCell<Option<PyErr>>);

impl PyErrState {
    fn set(&self, e: PyErr) {
        let mut slot = self.0.borrow_mut();
        if slot.is_none() {
            *slot = Some(e);
        }
    }

    fn take(&self) -> Option<PyErr> {
        self.0.borrow_mut().take()
    }
}

/// Gradient descent optimizer over a differentiable scalar function.
///
/// f:    callable(x: list[float]) -> float
/// grad: optional callable(x: list[float]) -> list[float]; when omitted the
///       gradient is approximated by central finite differences.
#[pyclass]
struct Optimize {
    f: Py<PyAny>,
    grad: Option<Py<PyAny>>,
}

#[pymethods]
impl Optimize {
    #[new]
    #[pyo3(signature = (f, grad = None))]
    fn new(f: Py<PyAny>, grad: Option<Py<PyAny>>) -> Self {
        Self { f, grad }
    }

    /// Minimize from `start` and return the minimizing position.
    #[pyo3(signature = (start, step_size, max_iters, tol_grad = None))]
    fn gradient_descent(
        &self,
        py: Python<'_>,
        start: Vec<f64>,
        step_size: f64,
        max_iters: usize,
        tol_grad: Option<f64>,
    ) -> PyResult<Vec<f64>> {
        self.run(py, start, step_size, max_iters, tol_grad)
            .map(|min| min.x)
    }

    /// Minimize from `start` and return `(position, value, converged)`.
    #[pyo3(signature = (start, step_size, max_iters, tol_grad = None))]
    fn minimize(
        &self,
        py: Python<'_>,
        start: Vec<f64>,
        step_size: f64,
        max_iters: usize,
        tol_grad: Option<f64>,
    ) -> PyResult<(Vec<f64>, f64, bool)> {
        self.run(py, start, step_size, max_iters, tol_grad)
            .map(|min| (min.x, min.f, min.converged))
    }
}

impl Optimize {
    fn run(
        &self,
        py: Python<'_>,
        start: Vec<f64>,
        step_size: f64,
        max_iters: usize,
        tol_grad: Option<f64>,
    ) -> PyResult<Minimum> {
        let solver = GradientDescent {
            step_size,
            max_iters,
            tol_grad: tol_grad.unwrap_or(1e-8),
            collect_trace: false,
        };

        let errs = PyErrState::default();

        // Calls the Python objective; a raised exception poisons the run
        // with NaN and is re-raised below.
        let value_fn = |x: &[f64]| -> f64 {
            let res = self
                .f
                .call1(py, (x.to_vec(),))
                .and_then(|r| r.extract::<f64>(py));
            match res {
                Ok(v) => v,
                Err(e) => {
                    errs.set(e);
                    f64::NAN
                }
            }
        };

        let result = match &self.grad {
            Some(g) => {
                let grad_fn = |x: &[f64], out: &mut [f64]| {
                    let res = g
                        .call1(py, (x.to_vec(),))
                        .and_then(|r| r.extract::<Vec<f64>>(py));
                    match res {
                        Ok(v) if v.len() == out.len() => out.copy_from_slice(&v),
                        Ok(v) => {
                            errs.set(PyValueError::new_err(format!(
                                "gradient length mismatch: expected {}, got {}",
                                out.len(),
                                v.len()
                            )));
                            out.fill(f64::NAN);
                        }
                        Err(e) => {
                            errs.set(e);
                            out.fill(f64::NAN);
                        }
                    }
                };
                solver.minimize_with_fn(start, value_fn, grad_fn)
            }
            None => {
                let obj = NumericObjective::new(&value_fn);
                solver.minimize(&obj, start)
            }
        };

        if let Some(e) = errs.take() {
            return Err(e);
        }
        result.map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

#[pymodule]
fn descent(module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_class::<Optimize>()?;
    Ok(())
}
