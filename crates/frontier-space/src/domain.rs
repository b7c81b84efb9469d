//! The axis-aligned integer lattice the frontier lives on.

use crate::adjacency::Adjacency;
use crate::error::SpaceError;
use frontier_core::{Coord, PointId};
use smallvec::{smallvec, SmallVec};

/// An axis-aligned box of the 2D or 3D integer lattice.
///
/// Bounds are inclusive on both ends: `GridDomain::new([0,0], [64,64])`
/// holds 65 × 65 points. Points are numbered in lexicographic coordinate
/// order (axis 0 slowest), so iterating `PointId`s in ascending order visits
/// points lexicographically.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridDomain {
    lower: Coord,
    upper: Coord,
    extents: SmallVec<[usize; 4]>,
    strides: SmallVec<[usize; 4]>,
    len: usize,
}

impl GridDomain {
    /// Create a domain spanning `lower..=upper` on every axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use frontier_space::GridDomain;
    ///
    /// let d = GridDomain::new(vec![0, 0].into(), vec![3, 4].into()).unwrap();
    /// assert_eq!(d.len(), 20);
    /// assert_eq!(d.ndim(), 2);
    /// ```
    pub fn new(lower: Coord, upper: Coord) -> Result<Self, SpaceError> {
        if lower.len() != upper.len() {
            return Err(SpaceError::DimensionMismatch {
                lower: lower.len(),
                upper: upper.len(),
            });
        }
        let ndim = lower.len();
        if !(2..=3).contains(&ndim) {
            return Err(SpaceError::UnsupportedDimension { ndim });
        }
        let mut extents: SmallVec<[usize; 4]> = SmallVec::with_capacity(ndim);
        for axis in 0..ndim {
            if lower[axis] > upper[axis] {
                return Err(SpaceError::InvertedBounds {
                    axis,
                    lower: lower[axis],
                    upper: upper[axis],
                });
            }
            let extent = (upper[axis] as i64 - lower[axis] as i64 + 1) as usize;
            extents.push(extent);
        }
        let mut strides: SmallVec<[usize; 4]> = smallvec![0; ndim];
        let mut len: usize = 1;
        for axis in (0..ndim).rev() {
            strides[axis] = len;
            len = len.checked_mul(extents[axis]).ok_or(SpaceError::TooLarge)?;
        }
        Ok(Self {
            lower,
            upper,
            extents,
            strides,
            len,
        })
    }

    /// A domain of the given per-axis sizes, anchored at the origin.
    ///
    /// Every size must be at least 1.
    pub fn with_extents(extents: &[u32]) -> Result<Self, SpaceError> {
        let lower: Coord = SmallVec::from_elem(0, extents.len());
        let mut upper: Coord = SmallVec::with_capacity(extents.len());
        for (axis, &e) in extents.iter().enumerate() {
            if e == 0 {
                return Err(SpaceError::InvertedBounds {
                    axis,
                    lower: 0,
                    upper: -1,
                });
            }
            let top = i32::try_from(e - 1).map_err(|_| SpaceError::TooLarge)?;
            upper.push(top);
        }
        Self::new(lower, upper)
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.lower.len()
    }

    /// Total number of points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always returns `false`: every domain holds at least one point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Inclusive lower bound.
    pub fn lower(&self) -> &Coord {
        &self.lower
    }

    /// Inclusive upper bound.
    pub fn upper(&self) -> &Coord {
        &self.upper
    }

    /// Number of points along each axis.
    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    /// Whether `coord` lies inside the domain.
    pub fn contains(&self, coord: &[i32]) -> bool {
        coord.len() == self.ndim()
            && coord
                .iter()
                .zip(self.lower.iter().zip(self.upper.iter()))
                .all(|(&c, (&lo, &hi))| c >= lo && c <= hi)
    }

    /// Flat index of `coord`, or `None` when it lies outside.
    pub fn index_of(&self, coord: &[i32]) -> Option<PointId> {
        if !self.contains(coord) {
            return None;
        }
        let idx = coord
            .iter()
            .zip(self.lower.iter())
            .zip(self.strides.iter())
            .map(|((&c, &lo), &s)| (c - lo) as usize * s)
            .sum();
        Some(PointId(idx))
    }

    /// Like [`index_of`](Self::index_of) but reports which bounds were
    /// violated.
    pub fn try_index_of(&self, coord: &Coord) -> Result<PointId, SpaceError> {
        self.index_of(coord)
            .ok_or_else(|| SpaceError::CoordOutOfBounds {
                coord: coord.clone(),
                bounds: format!("{:?}..={:?}", self.lower.as_slice(), self.upper.as_slice()),
            })
    }

    /// Coordinate of point `p`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `p` does not belong to this domain.
    pub fn coord_of(&self, p: PointId) -> Coord {
        debug_assert!(p.0 < self.len, "point {p} outside domain of {}", self.len);
        let mut rest = p.0;
        let mut out: Coord = SmallVec::with_capacity(self.ndim());
        for axis in 0..self.ndim() {
            let s = self.strides[axis];
            out.push(self.lower[axis] + (rest / s) as i32);
            rest %= s;
        }
        out
    }

    /// The point at `p + delta`, or `None` when it leaves the domain.
    pub fn offset(&self, p: PointId, delta: &[i32]) -> Option<PointId> {
        let mut rest = p.0;
        let mut idx = 0usize;
        for axis in 0..self.ndim() {
            let s = self.strides[axis];
            let local = (rest / s) as i64 + delta[axis] as i64;
            rest %= s;
            if local < 0 || local >= self.extents[axis] as i64 {
                return None;
            }
            idx += local as usize * s;
        }
        Some(PointId(idx))
    }

    /// All points in ascending (lexicographic) order.
    pub fn points(&self) -> impl Iterator<Item = PointId> {
        (0..self.len).map(PointId)
    }

    /// All coordinates in ascending (lexicographic) order.
    ///
    /// Two calls on the same domain return the same sequence.
    pub fn canonical_ordering(&self) -> Vec<Coord> {
        self.points().map(|p| self.coord_of(p)).collect()
    }

    /// The in-domain neighbours of `p` under `adjacency`, in lexicographic
    /// offset order.
    ///
    /// Returns an empty list when `adjacency` does not match the domain's
    /// dimension.
    pub fn neighbours(&self, p: PointId, adjacency: Adjacency) -> SmallVec<[PointId; 32]> {
        if adjacency.ndim() != self.ndim() {
            return SmallVec::new();
        }
        adjacency
            .offsets()
            .iter()
            .filter_map(|d| self.offset(p, d))
            .collect()
    }
}
