//! Per-step metrics of the evolver.
//!
//! [`StepMetrics`] captures what happened during one `update()` call, for
//! logging, stall detection and tests.

use frontier_core::StepId;

/// Counters and timings collected during a single step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Index of the step (the first `update()` is step 1).
    pub step: StepId,
    /// Time step chosen.
    pub dt: f64,
    /// Largest absolute speed over the frontier.
    pub max_speed: f64,
    /// Frontier size when the step started.
    pub frontier_size: usize,
    /// Points whose time value crossed the flip threshold.
    pub candidates: usize,
    /// Flips committed.
    pub flips: usize,
    /// Flips refused by the validity predicate.
    pub deferred: usize,
    /// Points that joined the frontier.
    pub entered: usize,
    /// Points that left the frontier.
    pub left: usize,
    /// Wall-clock time for the step, in microseconds.
    pub elapsed_us: u64,
}

impl StepMetrics {
    /// Whether the step moved nothing: zero time step and no flips.
    pub fn is_idle(&self) -> bool {
        self.dt == 0.0 && self.flips == 0
    }
}
