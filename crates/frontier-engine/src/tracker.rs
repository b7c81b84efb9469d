//! The frontier: the sparse set of points bordering a bel.
//!
//! A point is on the frontier when at least one of its face neighbours
//! carries the other label. The tracker stores the frontier as an ordered
//! set of [`PointId`]s, so iteration visits points in lexicographic order,
//! plus a dense membership bitmap for O(1) lookups.
//!
//! [`locate()`](FrontierTracker::locate) builds the frontier once by a
//! breadth-first walk from a seed bel; [`refresh()`](FrontierTracker::refresh)
//! keeps it current by re-examining only the neighbourhoods of flipped
//! points.

use std::collections::{BTreeSet, VecDeque};

use frontier_core::{LabelField, PointId};
use frontier_space::{Bel, Topology};
use indexmap::IndexSet;

/// Whether `p` borders a bel in `labels`.
pub fn borders_bel(topology: &dyn Topology, labels: &LabelField, p: PointId) -> bool {
    let inside = labels.is_inside(p);
    topology
        .surface_neighbours(p)
        .into_iter()
        .any(|q| labels.is_inside(q) != inside)
}

/// Points that entered or left the frontier during a refresh, each in
/// ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontierDelta {
    /// Points now on the frontier that were not before.
    pub entered: Vec<PointId>,
    /// Points no longer on the frontier.
    pub left: Vec<PointId>,
}

/// Ordered frontier set.
#[derive(Clone, Debug)]
pub struct FrontierTracker {
    members: BTreeSet<PointId>,
    flags: Vec<bool>,
}

impl FrontierTracker {
    /// Collect the frontier connected to `seed`.
    ///
    /// Walks from both points of the seed through band neighbours that
    /// border a bel. Parts of the boundary that are not connected to the
    /// seed are not tracked.
    ///
    /// Returns `None` when `seed` does not separate inside from outside,
    /// or when its points are not face neighbours inside the topology's
    /// domain (e.g. a bel built on another domain).
    pub fn locate(topology: &dyn Topology, labels: &LabelField, seed: Bel) -> Option<Self> {
        let n = topology.domain().len().min(labels.len());
        let (inner, outer) = (seed.inner(), seed.outer());
        if inner.index() >= n || outer.index() >= n {
            return None;
        }
        if !topology.surface_neighbours(inner).contains(&outer) || !seed.separates(labels) {
            return None;
        }
        let mut flags = vec![false; labels.len()];
        let mut members = BTreeSet::new();
        let mut queue = VecDeque::new();
        for p in [seed.inner(), seed.outer()] {
            flags[p.index()] = true;
            members.insert(p);
            queue.push_back(p);
        }
        while let Some(p) = queue.pop_front() {
            for q in topology.band_neighbours(p) {
                if !flags[q.index()] && borders_bel(topology, labels, q) {
                    flags[q.index()] = true;
                    members.insert(q);
                    queue.push_back(q);
                }
            }
        }
        Some(Self { members, flags })
    }

    /// Re-examine `flipped` points and their face neighbours.
    ///
    /// Only touched points can join. When the front reaches a boundary
    /// component that was never tracked, the rest of that component stays
    /// out of the frontier; images with several blobs should be evolved
    /// with one evolver per blob.
    pub fn refresh(
        &mut self,
        topology: &dyn Topology,
        labels: &LabelField,
        flipped: &[PointId],
    ) -> FrontierDelta {
        let mut touched: IndexSet<PointId> = IndexSet::with_capacity(flipped.len() * 7);
        for &p in flipped {
            touched.insert(p);
            touched.extend(topology.surface_neighbours(p));
        }
        let mut delta = FrontierDelta::default();
        for &q in &touched {
            let now = borders_bel(topology, labels, q);
            if now == self.flags[q.index()] {
                continue;
            }
            self.flags[q.index()] = now;
            if now {
                self.members.insert(q);
                delta.entered.push(q);
            } else {
                self.members.remove(&q);
                delta.left.push(q);
            }
        }
        delta.entered.sort_unstable();
        delta.left.sort_unstable();
        delta
    }

    /// Number of frontier points.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the frontier is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `p` is on the frontier.
    pub fn contains(&self, p: PointId) -> bool {
        self.flags.get(p.index()).copied().unwrap_or(false)
    }

    /// Frontier points in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = PointId> + '_ {
        self.members.iter().copied()
    }
}
