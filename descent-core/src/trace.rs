//! Per-iteration diagnostics for the solver.

use serde::Serialize;

/// One row of the iteration history.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TraceRecord {
    pub iter: usize,
    pub f: f64,
    pub grad_norm: f64,
    pub step_size: f64,
}

/// Collects the iteration history and emits tracing events.
///
/// Every iteration emits a `trace!` event; the objective value is only
/// evaluated when the history is actually being collected.
pub(crate) struct Tracer {
    history: Option<Vec<TraceRecord>>,
}

impl Tracer {
    pub(crate) fn new(collect: bool) -> Self {
        Self {
            history: collect.then(Vec::new),
        }
    }

    pub(crate) fn step(
        &mut self,
        iter: usize,
        grad_norm: f64,
        step_size: f64,
        value: impl FnOnce() -> f64,
    ) {
        tracing::trace!(iter, grad_norm, "gd step");
        if let Some(history) = &mut self.history {
            history.push(TraceRecord {
                iter,
                f: value(),
                grad_norm,
                step_size,
            });
        }
    }

    pub(crate) fn into_history(self) -> Option<Vec<TraceRecord>> {
        self.history
    }
}
