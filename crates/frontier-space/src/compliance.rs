//! Domain compliance test helpers.
//!
//! These functions verify that a [`GridDomain`] satisfies the invariants
//! the evolver relies on: dense lexicographic numbering, symmetric
//! adjacency and in-domain neighbours. Reused by the 2D and 3D test suites.

use crate::adjacency::Adjacency;
use crate::domain::GridDomain;
use indexmap::IndexSet;

/// Assert that two calls to `canonical_ordering()` agree.
pub fn assert_canonical_ordering_deterministic(domain: &GridDomain) {
    let a = domain.canonical_ordering();
    let b = domain.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is not deterministic");
}

/// Assert that the ordering lists every point exactly once, sorted.
pub fn assert_canonical_ordering_complete(domain: &GridDomain) {
    let ordering = domain.canonical_ordering();
    assert_eq!(
        ordering.len(),
        domain.len(),
        "canonical_ordering length {} != len() {}",
        ordering.len(),
        domain.len()
    );
    let unique: IndexSet<_> = ordering.iter().cloned().collect();
    assert_eq!(
        unique.len(),
        ordering.len(),
        "canonical_ordering contains duplicates"
    );
    let mut sorted = ordering.clone();
    sorted.sort();
    assert_eq!(sorted, ordering, "canonical_ordering is not lexicographic");
}

/// Assert that `index_of(coord_of(p)) == p` for every point.
pub fn assert_index_roundtrip(domain: &GridDomain) {
    for p in domain.points() {
        let coord = domain.coord_of(p);
        assert_eq!(
            domain.index_of(&coord),
            Some(p),
            "index_of({coord:?}) does not return {p}"
        );
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(domain: &GridDomain, adjacency: Adjacency) {
    for p in domain.points() {
        for nb in domain.neighbours(p, adjacency) {
            assert!(
                domain.neighbours(nb, adjacency).contains(&p),
                "{adjacency}-neighbour symmetry violated between {p} and {nb}"
            );
        }
    }
}

/// Assert that no point is its own neighbour and neighbours are unique.
pub fn assert_neighbours_irreflexive(domain: &GridDomain, adjacency: Adjacency) {
    for p in domain.points() {
        let nbs = domain.neighbours(p, adjacency);
        assert!(!nbs.contains(&p), "{p} listed as its own neighbour");
        let unique: IndexSet<_> = nbs.iter().copied().collect();
        assert_eq!(unique.len(), nbs.len(), "duplicate neighbours of {p}");
    }
}

/// Run all compliance checks under every adjacency of the domain's dimension.
pub fn run_full_compliance(domain: &GridDomain) {
    assert_canonical_ordering_deterministic(domain);
    assert_canonical_ordering_complete(domain);
    assert_index_roundtrip(domain);
    let adjacencies: &[Adjacency] = match domain.ndim() {
        2 => &[Adjacency::Four, Adjacency::Eight],
        _ => &[Adjacency::Six, Adjacency::Eighteen, Adjacency::TwentySix],
    };
    for &adj in adjacencies {
        assert_neighbours_symmetric(domain, adj);
        assert_neighbours_irreflexive(domain, adj);
    }
}
