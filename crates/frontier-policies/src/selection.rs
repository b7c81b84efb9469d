//! Closed sets of the reference policies as tagged unions.
//!
//! Drivers that pick a policy at run time (from a command line or a run
//! file) hold a [`SpeedPolicy`] / [`PredicatePolicy`] instead of a boxed
//! trait object, keeping the evolver monomorphic.

use frontier_core::{FieldError, Label, PointId};
use frontier_policy::{FlipContext, SpeedContext, SpeedFunctor, ValidityPredicate};

use crate::balloon::BalloonSpeed;
use crate::dt_curvature::DistanceCurvatureSpeed;
use crate::mean_curvature::MeanCurvatureSpeed;
use crate::predicates::{AlwaysValid, SimplePoint};

/// One of the reference speed functors.
#[derive(Clone, Debug)]
pub enum SpeedPolicy {
    /// Constant, optionally weighted, normal force.
    Balloon(BalloonSpeed),
    /// Data-weighted mean curvature motion.
    MeanCurvature(MeanCurvatureSpeed),
    /// Laplacian of the level function.
    DistanceCurvature(DistanceCurvatureSpeed),
}

impl SpeedFunctor for SpeedPolicy {
    fn name(&self) -> &str {
        match self {
            Self::Balloon(s) => s.name(),
            Self::MeanCurvature(s) => s.name(),
            Self::DistanceCurvature(s) => s.name(),
        }
    }

    fn speed(&self, ctx: &SpeedContext<'_>, p: PointId) -> f64 {
        match self {
            Self::Balloon(s) => s.speed(ctx, p),
            Self::MeanCurvature(s) => s.speed(ctx, p),
            Self::DistanceCurvature(s) => s.speed(ctx, p),
        }
    }

    fn check_domain(&self, point_count: usize) -> Result<(), FieldError> {
        match self {
            Self::Balloon(s) => s.check_domain(point_count),
            Self::MeanCurvature(s) => s.check_domain(point_count),
            Self::DistanceCurvature(s) => s.check_domain(point_count),
        }
    }
}

impl From<BalloonSpeed> for SpeedPolicy {
    fn from(s: BalloonSpeed) -> Self {
        Self::Balloon(s)
    }
}

impl From<MeanCurvatureSpeed> for SpeedPolicy {
    fn from(s: MeanCurvatureSpeed) -> Self {
        Self::MeanCurvature(s)
    }
}

impl From<DistanceCurvatureSpeed> for SpeedPolicy {
    fn from(s: DistanceCurvatureSpeed) -> Self {
        Self::DistanceCurvature(s)
    }
}

/// One of the reference validity predicates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PredicatePolicy {
    /// Accept every flip.
    #[default]
    AlwaysValid,
    /// Accept only simple points.
    SimplePoint,
}

impl ValidityPredicate for PredicatePolicy {
    fn name(&self) -> &str {
        match self {
            Self::AlwaysValid => AlwaysValid.name(),
            Self::SimplePoint => SimplePoint.name(),
        }
    }

    fn is_valid(&self, ctx: &FlipContext<'_>, p: PointId, new_label: Label) -> bool {
        match self {
            Self::AlwaysValid => AlwaysValid.is_valid(ctx, p, new_label),
            Self::SimplePoint => SimplePoint.is_valid(ctx, p, new_label),
        }
    }
}
