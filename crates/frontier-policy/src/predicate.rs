//! The [`ValidityPredicate`] trait.

use crate::context::FlipContext;
use frontier_core::{Label, PointId};

/// Decides whether a label flip may be committed.
///
/// # Contract
///
/// - `is_valid()` MUST be a pure function of its inputs.
/// - It is called exactly once per flip candidate, before the flip, with
///   the labels as they stand at that moment.
/// - A `false` answer defers the flip; the candidate is examined again in
///   a later step.
pub trait ValidityPredicate: Send {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Whether `p` may take `new_label`.
    fn is_valid(&self, ctx: &FlipContext<'_>, p: PointId, new_label: Label) -> bool;
}

impl<T: ValidityPredicate + ?Sized> ValidityPredicate for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_valid(&self, ctx: &FlipContext<'_>, p: PointId, new_label: Label) -> bool {
        (**self).is_valid(ctx, p, new_label)
    }
}
