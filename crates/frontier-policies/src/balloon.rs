//! Balloon force: constant normal speed, optionally weighted by a data
//! field.
//!
//! `v(p) = k · g(p)` with `g ≡ 1` when no weight is attached. Positive `k`
//! inflates the inside region, negative `k` deflates it, and `k = 0`
//! leaves the shape untouched.

use std::sync::Arc;

use frontier_core::{FieldError, PointId, ScalarField};
use frontier_policy::{SpeedContext, SpeedFunctor};

use crate::error::{finite, PolicyError};

/// Constant-force speed functor.
#[derive(Clone, Debug)]
pub struct BalloonSpeed {
    force: f64,
    weight: Option<Arc<ScalarField>>,
}

impl BalloonSpeed {
    /// Uniform balloon force `force`.
    ///
    /// Returns `Err(PolicyError::NonFinite)` for NaN or infinite forces.
    pub fn new(force: f64) -> Result<Self, PolicyError> {
        Ok(Self {
            force: finite("balloon force", force)?,
            weight: None,
        })
    }

    /// Multiply the force by a per-point data field.
    pub fn with_weight(mut self, weight: Arc<ScalarField>) -> Self {
        self.weight = Some(weight);
        self
    }

    /// The force constant `k`.
    pub fn force(&self) -> f64 {
        self.force
    }
}

impl SpeedFunctor for BalloonSpeed {
    fn name(&self) -> &str {
        "balloon"
    }

    fn speed(&self, _ctx: &SpeedContext<'_>, p: PointId) -> f64 {
        match &self.weight {
            Some(g) => self.force * g.get(p),
            None => self.force,
        }
    }

    fn check_domain(&self, point_count: usize) -> Result<(), FieldError> {
        match &self.weight {
            Some(g) => g.check_len(point_count),
            None => Ok(()),
        }
    }
}
