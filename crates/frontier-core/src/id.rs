//! Strongly-typed identifiers and the [`Coord`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Dense index of a grid point inside a domain.
///
/// Points are numbered in lexicographic order of their coordinates
/// (axis 0 slowest), so comparing two `PointId`s of the same domain
/// compares the points lexicographically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

impl PointId {
    /// The raw flat index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for PointId {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// Monotonically increasing evolution step counter.
///
/// Incremented each time the evolver completes one `update()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StepId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A coordinate in a grid domain.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for the 2D and 3D
/// lattices handled here.
pub type Coord = SmallVec<[i32; 4]>;
