//! Lattice adjacency relations and foreground/background pairs.

use crate::error::SpaceError;
use frontier_core::Coord;
use smallvec::SmallVec;
use std::fmt;

/// A digital adjacency relation on the 2D or 3D integer lattice.
///
/// Named after the size of the neighbourhood it induces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Adjacency {
    /// 2D edge adjacency (N/S/E/W).
    Four,
    /// 2D edge or corner adjacency.
    Eight,
    /// 3D face adjacency.
    Six,
    /// 3D face or edge adjacency.
    Eighteen,
    /// 3D face, edge or vertex adjacency.
    TwentySix,
}

impl Adjacency {
    /// Dimension of the lattice this adjacency lives on.
    pub fn ndim(self) -> usize {
        match self {
            Self::Four | Self::Eight => 2,
            Self::Six | Self::Eighteen | Self::TwentySix => 3,
        }
    }

    /// Number of neighbours of an interior point.
    pub fn degree(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
            Self::Six => 6,
            Self::Eighteen => 18,
            Self::TwentySix => 26,
        }
    }

    /// The face adjacency of dimension `ndim` (bel adjacency).
    pub fn surface(ndim: usize) -> Result<Self, SpaceError> {
        match ndim {
            2 => Ok(Self::Four),
            3 => Ok(Self::Six),
            _ => Err(SpaceError::UnsupportedDimension { ndim }),
        }
    }

    /// The largest adjacency of dimension `ndim` (whole unit cube).
    pub fn full(ndim: usize) -> Result<Self, SpaceError> {
        match ndim {
            2 => Ok(Self::Eight),
            3 => Ok(Self::TwentySix),
            _ => Err(SpaceError::UnsupportedDimension { ndim }),
        }
    }

    /// Whether two points separated by `delta` are adjacent.
    ///
    /// The zero offset is never adjacent.
    pub fn admits(self, delta: &[i32]) -> bool {
        if delta.len() != self.ndim() {
            return false;
        }
        let linf = delta.iter().map(|d| d.unsigned_abs()).max().unwrap_or(0);
        if linf != 1 {
            return false;
        }
        let l1: u32 = delta.iter().map(|d| d.unsigned_abs()).sum();
        match self {
            Self::Four | Self::Six => l1 == 1,
            Self::Eighteen => l1 <= 2,
            Self::Eight | Self::TwentySix => true,
        }
    }

    /// All neighbour offsets in lexicographic order.
    pub fn offsets(self) -> Vec<Coord> {
        unit_cube(self.ndim())
            .into_iter()
            .filter(|d| self.admits(d))
            .collect()
    }
}

impl fmt::Display for Adjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degree())
    }
}

/// Every offset of `{-1, 0, 1}^ndim` in lexicographic order, zero included.
pub(crate) fn unit_cube(ndim: usize) -> Vec<Coord> {
    let count = 3usize.pow(ndim as u32);
    (0..count)
        .map(|mut i| {
            let mut d: Coord = SmallVec::from_elem(0, ndim);
            for axis in (0..ndim).rev() {
                d[axis] = (i % 3) as i32 - 1;
                i /= 3;
            }
            d
        })
        .collect()
}

/// Foreground and background adjacencies used by the simple-point test.
///
/// Only complementary pairs are accepted, so that a digital object and its
/// complement have well-defined, Jordan-consistent boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AdjacencyPair {
    foreground: Adjacency,
    background: Adjacency,
}

impl AdjacencyPair {
    /// Build a pair, rejecting combinations that are not complementary.
    ///
    /// Valid pairs: (4,8), (8,4), (6,18), (18,6), (6,26), (26,6).
    pub fn new(foreground: Adjacency, background: Adjacency) -> Result<Self, SpaceError> {
        use Adjacency::*;
        let ok = matches!(
            (foreground, background),
            (Four, Eight)
                | (Eight, Four)
                | (Six, Eighteen)
                | (Eighteen, Six)
                | (Six, TwentySix)
                | (TwentySix, Six)
        );
        if !ok {
            return Err(SpaceError::InvalidAdjacencyPair {
                foreground,
                background,
            });
        }
        Ok(Self {
            foreground,
            background,
        })
    }

    /// The conventional pair for a lattice of dimension `ndim`:
    /// (8,4) in 2D and (26,6) in 3D.
    pub fn standard(ndim: usize) -> Result<Self, SpaceError> {
        match ndim {
            2 => Ok(Self {
                foreground: Adjacency::Eight,
                background: Adjacency::Four,
            }),
            3 => Ok(Self {
                foreground: Adjacency::TwentySix,
                background: Adjacency::Six,
            }),
            _ => Err(SpaceError::UnsupportedDimension { ndim }),
        }
    }

    /// Adjacency of the foreground (inside) object.
    pub fn foreground(&self) -> Adjacency {
        self.foreground
    }

    /// Adjacency of the background (outside) complement.
    pub fn background(&self) -> Adjacency {
        self.background
    }

    /// Dimension of the lattice the pair applies to.
    pub fn ndim(&self) -> usize {
        self.foreground.ndim()
    }
}

impl fmt::Display for AdjacencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.foreground, self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_counts_match_degree() {
        for adj in [
            Adjacency::Four,
            Adjacency::Eight,
            Adjacency::Six,
            Adjacency::Eighteen,
            Adjacency::TwentySix,
        ] {
            assert_eq!(adj.offsets().len(), adj.degree(), "{adj}");
        }
    }

    #[test]
    fn unit_cube_is_lexicographic() {
        let cube = unit_cube(2);
        assert_eq!(cube.len(), 9);
        assert_eq!(cube[0].as_slice(), &[-1, -1]);
        assert_eq!(cube[1].as_slice(), &[-1, 0]);
        assert_eq!(cube[4].as_slice(), &[0, 0]);
        assert_eq!(cube[8].as_slice(), &[1, 1]);
        let mut sorted = cube.clone();
        sorted.sort();
        assert_eq!(sorted, cube);
    }

    #[test]
    fn admits_rejects_zero_and_far_offsets() {
        assert!(!Adjacency::Eight.admits(&[0, 0]));
        assert!(!Adjacency::Eight.admits(&[2, 0]));
        assert!(!Adjacency::Four.admits(&[1, 1]));
        assert!(Adjacency::Eighteen.admits(&[1, 1, 0]));
        assert!(!Adjacency::Eighteen.admits(&[1, 1, 1]));
        assert!(Adjacency::TwentySix.admits(&[1, 1, 1]));
        assert!(!Adjacency::Six.admits(&[1, 0]));
    }

    #[test]
    fn pair_validation() {
        assert!(AdjacencyPair::new(Adjacency::Eight, Adjacency::Four).is_ok());
        assert!(AdjacencyPair::new(Adjacency::Six, Adjacency::Eighteen).is_ok());
        assert!(matches!(
            AdjacencyPair::new(Adjacency::Eight, Adjacency::Eight),
            Err(SpaceError::InvalidAdjacencyPair { .. })
        ));
        assert!(matches!(
            AdjacencyPair::new(Adjacency::Four, Adjacency::Six),
            Err(SpaceError::InvalidAdjacencyPair { .. })
        ));
    }

    #[test]
    fn standard_pairs() {
        assert_eq!(AdjacencyPair::standard(2).unwrap().to_string(), "(8, 4)");
        assert_eq!(AdjacencyPair::standard(3).unwrap().to_string(), "(26, 6)");
        assert!(AdjacencyPair::standard(4).is_err());
    }
}
