//! Curvature motion that treats the level function as a distance map.
//!
//! When the level function has unit gradient, mean curvature reduces to
//! its Laplacian. This functor uses that shortcut and carries no data
//! terms; it is cheaper than [`MeanCurvatureSpeed`](crate::MeanCurvatureSpeed)
//! but only accurate where the time field already behaves like a signed
//! distance.

use frontier_core::PointId;
use frontier_policy::{SpeedContext, SpeedFunctor};

use crate::differences::level_samples;

/// Laplacian-of-level-function speed functor.
#[derive(Clone, Copy, Debug, Default)]
pub struct DistanceCurvatureSpeed;

impl DistanceCurvatureSpeed {
    /// Create the functor.
    pub fn new() -> Self {
        Self
    }
}

impl SpeedFunctor for DistanceCurvatureSpeed {
    fn name(&self) -> &str {
        "distance_curvature"
    }

    fn speed(&self, ctx: &SpeedContext<'_>, p: PointId) -> f64 {
        level_samples(ctx, p).laplacian()
    }
}
