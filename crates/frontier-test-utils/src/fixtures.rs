//! Reusable policy fixtures.
//!
//! - [`ConstSpeed`]: the same speed everywhere.
//! - [`FieldSpeed`]: per-point speeds from a vector.
//! - [`RejectAll`]: defers every flip.
//! - [`CountingPredicate`]: accepts every flip and counts the calls.

use frontier_core::{Label, PointId};
use frontier_policy::{FlipContext, SpeedContext, SpeedFunctor, ValidityPredicate};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Constant speed.
pub struct ConstSpeed {
    pub value: f64,
}

impl ConstSpeed {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl SpeedFunctor for ConstSpeed {
    fn name(&self) -> &str {
        "const"
    }

    fn speed(&self, _ctx: &SpeedContext<'_>, _p: PointId) -> f64 {
        self.value
    }
}

/// Speed looked up per point.
pub struct FieldSpeed {
    pub values: Vec<f64>,
}

impl FieldSpeed {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl SpeedFunctor for FieldSpeed {
    fn name(&self) -> &str {
        "field"
    }

    fn speed(&self, _ctx: &SpeedContext<'_>, p: PointId) -> f64 {
        self.values[p.index()]
    }
}

/// Rejects every flip.
pub struct RejectAll;

impl ValidityPredicate for RejectAll {
    fn name(&self) -> &str {
        "reject_all"
    }

    fn is_valid(&self, _ctx: &FlipContext<'_>, _p: PointId, _new_label: Label) -> bool {
        false
    }
}

/// Accepts every flip, counting how often it was asked.
///
/// The counter is shared, so a clone of [`calls`](Self::calls) can be
/// inspected after the predicate has moved into an evolver.
pub struct CountingPredicate {
    calls: Arc<AtomicUsize>,
}

impl CountingPredicate {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared call counter.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Default for CountingPredicate {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidityPredicate for CountingPredicate {
    fn name(&self) -> &str {
        "counting"
    }

    fn is_valid(&self, _ctx: &FlipContext<'_>, _p: PointId, _new_label: Label) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        true
    }
}
