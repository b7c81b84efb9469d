//! Data-weighted mean curvature motion.
//!
//! `v(p) = g(p) · κ(p) + k · h(p)`, where `κ` is the mean curvature of the
//! narrow-band level function through `p` (see
//! [`level_value`](crate::differences::level_value)). Convex parts of the
//! inside region have negative curvature and move inward; `g` slows the
//! smoothing where the data says so and `k · h` adds an advection term.
//!
//! Constructed via the builder pattern: [`MeanCurvatureSpeed::builder`].

use std::sync::Arc;

use frontier_core::{FieldError, PointId, ScalarField};
use frontier_policy::{SpeedContext, SpeedFunctor};

use crate::differences::{level_samples, DEFAULT_EPSILON};
use crate::error::{finite, positive, PolicyError};

/// Mean-curvature speed functor.
#[derive(Clone, Debug)]
pub struct MeanCurvatureSpeed {
    curvature_weight: Option<Arc<ScalarField>>,
    balloon: f64,
    balloon_weight: Option<Arc<ScalarField>>,
    epsilon: f64,
}

/// Builder for [`MeanCurvatureSpeed`].
///
/// Every field is optional: the default is pure, unweighted curvature
/// motion.
pub struct MeanCurvatureSpeedBuilder {
    curvature_weight: Option<Arc<ScalarField>>,
    balloon: f64,
    balloon_weight: Option<Arc<ScalarField>>,
    epsilon: f64,
}

impl MeanCurvatureSpeed {
    /// Create a new builder.
    pub fn builder() -> MeanCurvatureSpeedBuilder {
        MeanCurvatureSpeedBuilder {
            curvature_weight: None,
            balloon: 0.0,
            balloon_weight: None,
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// The advection constant `k`.
    pub fn balloon(&self) -> f64 {
        self.balloon
    }

    /// Gradient magnitude below which curvature is taken as zero.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl MeanCurvatureSpeedBuilder {
    /// Weight `g` applied to the curvature term (default: 1 everywhere).
    pub fn curvature_weight(mut self, g: Arc<ScalarField>) -> Self {
        self.curvature_weight = Some(g);
        self
    }

    /// Advection constant `k` (default: 0).
    pub fn balloon(mut self, k: f64) -> Self {
        self.balloon = k;
        self
    }

    /// Weight `h` applied to the advection term (default: 1 everywhere).
    pub fn balloon_weight(mut self, h: Arc<ScalarField>) -> Self {
        self.balloon_weight = Some(h);
        self
    }

    /// Flat-gradient threshold (default: [`DEFAULT_EPSILON`]).
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Build the functor.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `balloon` is not finite or `epsilon` is not a
    /// positive finite number.
    pub fn build(self) -> Result<MeanCurvatureSpeed, PolicyError> {
        Ok(MeanCurvatureSpeed {
            balloon: finite("balloon force", self.balloon)?,
            epsilon: positive("epsilon", self.epsilon)?,
            curvature_weight: self.curvature_weight,
            balloon_weight: self.balloon_weight,
        })
    }
}

impl SpeedFunctor for MeanCurvatureSpeed {
    fn name(&self) -> &str {
        "mean_curvature"
    }

    fn speed(&self, ctx: &SpeedContext<'_>, p: PointId) -> f64 {
        let kappa = level_samples(ctx, p).mean_curvature(self.epsilon);
        let g = self.curvature_weight.as_ref().map_or(1.0, |f| f.get(p));
        let h = self.balloon_weight.as_ref().map_or(1.0, |f| f.get(p));
        g * kappa + self.balloon * h
    }

    fn check_domain(&self, point_count: usize) -> Result<(), FieldError> {
        if let Some(g) = &self.curvature_weight {
            g.check_len(point_count)?;
        }
        if let Some(h) = &self.balloon_weight {
            h.check_len(point_count)?;
        }
        Ok(())
    }
}
