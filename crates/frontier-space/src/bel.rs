//! Oriented boundary elements.

use crate::domain::GridDomain;
use frontier_core::{BinaryView, PointId};
use std::fmt;

/// A boundary element: the oriented facet separating an inside point from
/// its face-adjacent outside neighbour.
///
/// `outer = inner ± e_axis`; the sign is recorded in [`is_positive`].
///
/// [`is_positive`]: Bel::is_positive
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bel {
    inner: PointId,
    outer: PointId,
    axis: usize,
    positive: bool,
}

impl Bel {
    /// The bel between `inner` and `outer`, if the two points are
    /// face-adjacent in `domain`.
    ///
    /// Labels are not checked here; see [`separates`](Self::separates).
    pub fn between(domain: &GridDomain, inner: PointId, outer: PointId) -> Option<Self> {
        let a = domain.coord_of(inner);
        let b = domain.coord_of(outer);
        let mut axis = None;
        for i in 0..domain.ndim() {
            match b[i] - a[i] {
                0 => {}
                1 | -1 if axis.is_none() => axis = Some(i),
                _ => return None,
            }
        }
        let axis = axis?;
        Some(Self {
            inner,
            outer,
            axis,
            positive: b[axis] > a[axis],
        })
    }

    /// The inside point.
    pub fn inner(&self) -> PointId {
        self.inner
    }

    /// The outside point.
    pub fn outer(&self) -> PointId {
        self.outer
    }

    /// The axis orthogonal to the facet.
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// Whether the outer point lies on the positive side of the inner one.
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// Whether the bel really separates foreground from background in
    /// `view`.
    pub fn separates(&self, view: &dyn BinaryView) -> bool {
        view.is_foreground(self.inner) && !view.is_foreground(self.outer)
    }
}

impl fmt::Display for Bel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.positive { '+' } else { '-' };
        write!(f, "bel({} {sign}e{} -> {})", self.inner, self.axis, self.outer)
    }
}
