//! Test utilities and mock types for frontier development.
//!
//! Provides label-image fixtures ([`grid_from_rows`], [`noisy_blob`]),
//! connected-component counting for topology checks
//! ([`component_counts`]) and mock policies in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::VecDeque;

use frontier_core::{LabelField, PointId, INSIDE, OUTSIDE};
use frontier_space::{Adjacency, AdjacencyPair, GridDomain};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub use fixtures::{ConstSpeed, CountingPredicate, FieldSpeed, RejectAll};

/// Parse a 2D picture: `#` is inside, anything else outside. Row index is
/// axis 0.
///
/// # Panics
///
/// Panics on an empty picture or ragged rows.
pub fn grid_from_rows(rows: &[&str]) -> (GridDomain, LabelField) {
    let height = rows.len();
    let width = rows.first().map(|r| r.len()).unwrap_or(0);
    assert!(height > 0 && width > 0, "empty picture");
    assert!(rows.iter().all(|r| r.len() == width), "ragged picture");
    let domain = GridDomain::with_extents(&[height as u32, width as u32]).unwrap();
    let mut labels = LabelField::filled(domain.len(), OUTSIDE);
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            if ch == '#' {
                let p = domain.index_of(&[r as i32, c as i32]).unwrap();
                labels.set(p, INSIDE);
            }
        }
    }
    (domain, labels)
}

/// Render a 2D label field back into rows of `#` and `.`.
pub fn rows_of(domain: &GridDomain, labels: &LabelField) -> Vec<String> {
    let ext = domain.extents();
    assert_eq!(ext.len(), 2, "rows_of needs a 2D domain");
    (0..ext[0])
        .map(|r| {
            (0..ext[1])
                .map(|c| {
                    let p = PointId(r * ext[1] + c);
                    if labels.is_inside(p) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect()
}

/// A ball of radius `radius` around the domain centre whose boundary is
/// jittered by up to `jitter` per point, drawn from a seeded ChaCha stream.
pub fn noisy_blob(domain: &GridDomain, seed: u64, radius: f64, jitter: f64) -> LabelField {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let centre: Vec<f64> = domain
        .lower()
        .iter()
        .zip(domain.upper().iter())
        .map(|(&l, &u)| (f64::from(l) + f64::from(u)) / 2.0)
        .collect();
    let mut labels = LabelField::filled(domain.len(), OUTSIDE);
    for p in domain.points() {
        let d: f64 = domain
            .coord_of(p)
            .iter()
            .zip(&centre)
            .map(|(&x, &c)| (f64::from(x) - c).powi(2))
            .sum::<f64>()
            .sqrt();
        let u = f64::from(rng.next_u32()) / f64::from(u32::MAX);
        if d < radius + jitter * (u - 0.5) {
            labels.set(p, INSIDE);
        }
    }
    labels
}

/// Number of `adjacency`-connected components among points whose
/// membership equals `inside`.
///
/// When `with_exterior` is set, the region outside the domain is treated
/// as one extra point of that class touching every border point, so all
/// border components merge into one.
pub fn count_components(
    domain: &GridDomain,
    labels: &LabelField,
    adjacency: Adjacency,
    inside: bool,
    with_exterior: bool,
) -> usize {
    let member = |p: PointId| labels.is_inside(p) == inside;
    let on_border = |p: PointId| {
        let c = domain.coord_of(p);
        c.iter()
            .zip(domain.lower().iter().zip(domain.upper().iter()))
            .any(|(&x, (&l, &u))| x == l || x == u)
    };
    let mut seen = vec![false; domain.len()];
    let mut queue = VecDeque::new();
    let mut count = 0;

    if with_exterior {
        let border: Vec<PointId> = domain.points().filter(|&p| member(p) && on_border(p)).collect();
        count += 1;
        for p in border {
            seen[p.index()] = true;
            queue.push_back(p);
        }
        flood(domain, adjacency, &member, &mut seen, &mut queue);
    }

    for p in domain.points() {
        if member(p) && !seen[p.index()] {
            count += 1;
            seen[p.index()] = true;
            queue.push_back(p);
            flood(domain, adjacency, &member, &mut seen, &mut queue);
        }
    }
    count
}

fn flood(
    domain: &GridDomain,
    adjacency: Adjacency,
    member: &dyn Fn(PointId) -> bool,
    seen: &mut [bool],
    queue: &mut VecDeque<PointId>,
) {
    while let Some(p) = queue.pop_front() {
        for q in domain.neighbours(p, adjacency) {
            if member(q) && !seen[q.index()] {
                seen[q.index()] = true;
                queue.push_back(q);
            }
        }
    }
}

/// Foreground and background component counts under `pair`, with the
/// exterior of the domain counted as background.
pub fn component_counts(
    domain: &GridDomain,
    labels: &LabelField,
    pair: AdjacencyPair,
) -> (usize, usize) {
    (
        count_components(domain, labels, pair.foreground(), true, false),
        count_components(domain, labels, pair.background(), false, true),
    )
}
