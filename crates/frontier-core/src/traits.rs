//! Read-only views over per-point data.
//!
//! These decouple the seed locator, the topology substrate and the speed
//! policies from concrete field storage.

use crate::id::PointId;

/// A binarised view of a label source.
///
/// Implemented by [`LabelField`](crate::LabelField); tests and callers may
/// provide thresholded adapters over other storage.
pub trait BinaryView {
    /// Number of points the view covers.
    fn point_count(&self) -> usize;

    /// Whether point `p` is in the foreground.
    fn is_foreground(&self, p: PointId) -> bool;
}

/// Read-only access to a real value per point.
pub trait ScalarReader {
    /// Value stored at point `p`.
    fn value(&self, p: PointId) -> f64;
}
