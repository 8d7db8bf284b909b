//! Objective function interface and closure adapters.

/// Objective function to be minimized.
///
/// Points live in R^n as `&[f64]`. In `gradient` the implementor computes
/// ∇f(x) and writes it into the buffer.
pub trait Objective {
    /// Function value f(x) at x.
    fn value(&self, x: &[f64]) -> f64;

    /// Write the gradient ∇f(x) at x into `grad`.
    ///
    /// `grad` has the same length as `x` and is pre-initialized by the caller.
    fn gradient(&self, x: &[f64], grad: &mut [f64]);
}

/// Objective built from a value closure and an analytic gradient closure.
pub struct FnObjective<F, G> {
    value_fn: F,
    grad_fn: G,
}

impl<F, G> FnObjective<F, G>
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64], &mut [f64]),
{
    pub fn new(value_fn: F, grad_fn: G) -> Self {
        Self { value_fn, grad_fn }
    }
}

impl<F, G> Objective for FnObjective<F, G>
where
    F: Fn(&[f64]) -> f64,
    G: Fn(&[f64], &mut [f64]),
{
    fn value(&self, x: &[f64]) -> f64 {
        (self.value_fn)(x)
    }

    fn gradient(&self, x: &[f64], grad: &mut [f64]) {
        (self.grad_fn)(x, grad)
    }
}

/// Objective built from a value closure alone.
///
/// The gradient is approximated by central finite differences with a
/// per-coordinate step `h = cbrt(EPSILON) * max(1, |x_i|)`.
pub struct NumericObjective<F> {
    value_fn: F,
}

impl<F> NumericObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
    pub fn new(value_fn: F) -> Self {
        Self { value_fn }
    }
}

impl<F> Objective for NumericObjective<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn value(&self, x: &[f64]) -> f64 {
        (self.value_fn)(x)
    }

    fn gradient(&self, x: &[f64], grad: &mut [f64]) {
        let mut xs = x.to_vec();
        for i in 0..x.len() {
            let h = f64::EPSILON.cbrt() * x[i].abs().max(1.0);
            xs[i] = x[i] + h;
            let fp = (self.value_fn)(&xs);
            xs[i] = x[i] - h;
            let fm = (self.value_fn)(&xs);
            xs[i] = x[i];
            grad[i] = (fp - fm) / (2.0 * h);
        }
    }
}
