//! Error types for domain construction and spatial queries.

use crate::adjacency::Adjacency;
use frontier_core::Coord;
use thiserror::Error;

/// Errors arising from domain construction or spatial queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the domain.
    #[error("coordinate {coord:?} out of bounds: {bounds}")]
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Lower and upper bounds have different dimensions.
    #[error("lower bound has {lower} axes but upper bound has {upper}")]
    DimensionMismatch {
        /// Dimension of the lower bound.
        lower: usize,
        /// Dimension of the upper bound.
        upper: usize,
    },
    /// Only 2D and 3D lattices are supported.
    #[error("unsupported dimension {ndim}: expected 2 or 3")]
    UnsupportedDimension {
        /// The requested dimension.
        ndim: usize,
    },
    /// The lower bound exceeds the upper bound on some axis.
    #[error("axis {axis}: lower bound {lower} > upper bound {upper}")]
    InvertedBounds {
        /// Axis with inverted bounds.
        axis: usize,
        /// Lower bound on that axis.
        lower: i32,
        /// Upper bound on that axis.
        upper: i32,
    },
    /// The total number of points does not fit in `usize`.
    #[error("domain point count overflows")]
    TooLarge,
    /// The foreground/background adjacencies do not form a valid pair.
    #[error("({foreground}, {background}) is not a valid adjacency pair")]
    InvalidAdjacencyPair {
        /// Requested foreground adjacency.
        foreground: Adjacency,
        /// Requested background adjacency.
        background: Adjacency,
    },
    /// An adjacency was used on a lattice of the wrong dimension.
    #[error("{adjacency}-adjacency is not defined in dimension {ndim}")]
    AdjacencyDimension {
        /// The adjacency.
        adjacency: Adjacency,
        /// Dimension of the lattice.
        ndim: usize,
    },
}
