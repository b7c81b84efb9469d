//! The digital-topology substrate: neighbourhoods and the simple-point test.

use crate::adjacency::{unit_cube, Adjacency, AdjacencyPair};
use crate::domain::GridDomain;
use crate::error::SpaceError;
use frontier_core::{BinaryView, Coord, PointId};
use smallvec::SmallVec;

/// Neighbourhood enumeration and simplicity test consumed by the evolver.
///
/// The evolver never walks the lattice on its own; everything it needs
/// about adjacency flows through this trait, so any correct digital
/// topology implementation can be substituted.
///
/// # Thread Safety
///
/// `Send + Sync` so an evolver holding a topology can be moved across
/// threads.
pub trait Topology: Send + Sync {
    /// The lattice this topology is defined on.
    fn domain(&self) -> &GridDomain;

    /// The adjacency pair used by [`is_simple`](Self::is_simple).
    fn adjacency(&self) -> AdjacencyPair;

    /// Face-adjacent neighbours of `p`: a bel lies between `p` and each of
    /// these whenever their labels differ.
    fn surface_neighbours(&self, p: PointId) -> SmallVec<[PointId; 8]>;

    /// Every neighbour of `p` in its unit cube (8 in 2D, 26 in 3D).
    fn band_neighbours(&self, p: PointId) -> SmallVec<[PointId; 32]>;

    /// Whether flipping the label of `p` in `view` preserves the number of
    /// connected components of both the foreground and the background in
    /// the neighbourhood of `p`.
    ///
    /// Depends only on the neighbours of `p`, never on `p` itself, so the
    /// answer is the same for insertion and deletion.
    fn is_simple(&self, view: &dyn BinaryView, p: PointId) -> bool;
}

/// Component-count tables for one adjacency over the unit cube.
#[derive(Debug, Clone)]
struct LocalGraph {
    /// Cube cells (centre excluded) inside the geodesic neighbourhood.
    ambient: Vec<usize>,
    /// Whether each cube cell is adjacent to the centre.
    touches_centre: Vec<bool>,
    /// Adjacent ambient cells of each cube cell.
    links: Vec<SmallVec<[u8; 32]>>,
}

impl LocalGraph {
    fn new(adjacency: Adjacency, cube: &[Coord]) -> Self {
        let ndim = adjacency.ndim();
        let centre = cube.len() / 2;
        // 6-adjacency in 3D counts components inside the 18-neighbourhood;
        // every other adjacency uses the whole cube.
        let ambient_adj = match adjacency {
            Adjacency::Six => Adjacency::Eighteen,
            _ => Adjacency::full(ndim).unwrap_or(adjacency),
        };
        let ambient: Vec<usize> = (0..cube.len())
            .filter(|&i| i != centre && ambient_adj.admits(&cube[i]))
            .collect();
        let touches_centre = cube.iter().map(|d| adjacency.admits(d)).collect();
        let links = (0..cube.len())
            .map(|i| {
                ambient
                    .iter()
                    .copied()
                    .filter(|&j| {
                        let diff: Coord = cube[j]
                            .iter()
                            .zip(cube[i].iter())
                            .map(|(a, b)| a - b)
                            .collect();
                        adjacency.admits(&diff)
                    })
                    .map(|j| j as u8)
                    .collect()
            })
            .collect();
        Self {
            ambient,
            touches_centre,
            links,
        }
    }

    /// Number of components of the occupied ambient cells that are adjacent
    /// to the centre (the topological number).
    fn topological_number(&self, occupied: &[bool]) -> usize {
        let mut visited = [false; 27];
        let mut stack: SmallVec<[usize; 32]> = SmallVec::new();
        let mut count = 0;
        for &start in &self.ambient {
            if !occupied[start] || visited[start] {
                continue;
            }
            visited[start] = true;
            stack.push(start);
            let mut touches = false;
            while let Some(i) = stack.pop() {
                touches |= self.touches_centre[i];
                for &j in &self.links[i] {
                    let j = j as usize;
                    if occupied[j] && !visited[j] {
                        visited[j] = true;
                        stack.push(j);
                    }
                }
            }
            if touches {
                count += 1;
            }
        }
        count
    }
}

/// Default [`Topology`]: topological numbers on the 2D/3D lattice.
///
/// A point `p` is simple for the foreground `X` when
/// `T_fg(p, X) == 1` and `T_bg(p, X̄) == 1`, where `T_k` counts the
/// `k`-components of the neighbourhood that are `k`-adjacent to `p`.
/// Points outside the domain belong to the background.
#[derive(Debug, Clone)]
pub struct DigitalTopology {
    domain: GridDomain,
    pair: AdjacencyPair,
    cube: Vec<Coord>,
    surface: Adjacency,
    full: Adjacency,
    foreground: LocalGraph,
    background: LocalGraph,
}

impl DigitalTopology {
    /// Build the substrate for `domain` under `pair`.
    ///
    /// Returns `Err(SpaceError::AdjacencyDimension)` when the pair does not
    /// match the domain's dimension.
    pub fn new(domain: GridDomain, pair: AdjacencyPair) -> Result<Self, SpaceError> {
        let ndim = domain.ndim();
        if pair.ndim() != ndim {
            return Err(SpaceError::AdjacencyDimension {
                adjacency: pair.foreground(),
                ndim,
            });
        }
        let cube = unit_cube(ndim);
        let foreground = LocalGraph::new(pair.foreground(), &cube);
        let background = LocalGraph::new(pair.background(), &cube);
        Ok(Self {
            surface: Adjacency::surface(ndim)?,
            full: Adjacency::full(ndim)?,
            domain,
            pair,
            cube,
            foreground,
            background,
        })
    }

    /// Build the substrate with the conventional pair for the domain's
    /// dimension.
    pub fn standard(domain: GridDomain) -> Result<Self, SpaceError> {
        let pair = AdjacencyPair::standard(domain.ndim())?;
        Self::new(domain, pair)
    }

    /// Foreground occupancy of the unit cube around `p`.
    fn occupancy(&self, view: &dyn BinaryView, p: PointId) -> [bool; 27] {
        let mut occ = [false; 27];
        for (i, d) in self.cube.iter().enumerate() {
            if let Some(q) = self.domain.offset(p, d) {
                occ[i] = view.is_foreground(q);
            }
        }
        occ
    }
}

impl Topology for DigitalTopology {
    fn domain(&self) -> &GridDomain {
        &self.domain
    }

    fn adjacency(&self) -> AdjacencyPair {
        self.pair
    }

    fn surface_neighbours(&self, p: PointId) -> SmallVec<[PointId; 8]> {
        self.domain
            .neighbours(p, self.surface)
            .into_iter()
            .collect()
    }

    fn band_neighbours(&self, p: PointId) -> SmallVec<[PointId; 32]> {
        self.domain.neighbours(p, self.full)
    }

    fn is_simple(&self, view: &dyn BinaryView, p: PointId) -> bool {
        let fg = self.occupancy(view, p);
        let n = self.cube.len();
        let mut bg = [false; 27];
        for i in 0..n {
            bg[i] = !fg[i];
        }
        self.foreground.topological_number(&fg[..n]) == 1
            && self.background.topological_number(&bg[..n]) == 1
    }
}
