//! The [`SpeedFunctor`] trait.

use crate::context::SpeedContext;
use frontier_core::{FieldError, PointId};

/// Normal speed of the front at a grid point.
///
/// # Contract
///
/// - Positive speeds grow the foreground outward, negative speeds shrink
///   it. The sign convention is fixed for the whole run.
/// - `speed()` MUST be pure: repeated calls for the same point within one
///   step return the same value, and no state is mutated.
/// - Non-finite results are treated as zero by the evolver.
///
/// # Examples
///
/// ```
/// use frontier_core::{LabelField, PointId, ScalarField, StepId, OUTSIDE};
/// use frontier_policy::{SpeedContext, SpeedFunctor};
/// use frontier_space::GridDomain;
///
/// struct Shrink;
///
/// impl SpeedFunctor for Shrink {
///     fn name(&self) -> &str { "shrink" }
///
///     fn speed(&self, _ctx: &SpeedContext<'_>, _p: PointId) -> f64 { -1.0 }
/// }
///
/// let domain = GridDomain::with_extents(&[2, 2]).unwrap();
/// let labels = LabelField::filled(domain.len(), OUTSIDE);
/// let time = ScalarField::zeros(domain.len());
/// let ctx = SpeedContext::new(&domain, &labels, &time, 1.0, StepId(1));
/// assert_eq!(Shrink.speed(&ctx, PointId(0)), -1.0);
/// ```
pub trait SpeedFunctor: Send {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Normal speed at `p`.
    fn speed(&self, ctx: &SpeedContext<'_>, p: PointId) -> f64;

    /// Check that every data field this functor reads covers a domain of
    /// `point_count` points. Called once when the evolver is built.
    fn check_domain(&self, point_count: usize) -> Result<(), FieldError> {
        let _ = point_count;
        Ok(())
    }
}

impl<T: SpeedFunctor + ?Sized> SpeedFunctor for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn speed(&self, ctx: &SpeedContext<'_>, p: PointId) -> f64 {
        (**self).speed(ctx, p)
    }

    fn check_domain(&self, point_count: usize) -> Result<(), FieldError> {
        (**self).check_domain(point_count)
    }
}
