//! Seed search: locating one boundary element of a binary image.

use crate::bel::Bel;
use crate::domain::GridDomain;
use frontier_core::{BinaryView, PointId};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::debug;

/// Fixed seed of the sampling generator, so that seed search is
/// reproducible from run to run.
const LOCATOR_SEED: u64 = 0x5eed_be1;

/// Errors from [`find_bel`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LocateError {
    /// No boundary element was met within the search budget.
    #[error("no boundary element found within {budget} tries")]
    NotFound {
        /// Number of sampled point pairs.
        budget: usize,
    },
    /// The binary view does not cover the domain.
    #[error("binary view covers {actual} points, domain has {expected}")]
    ViewMismatch {
        /// Number of points of the domain.
        expected: usize,
        /// Number of points of the view.
        actual: usize,
    },
}

/// Find one bel of the foreground of `view`.
///
/// Samples up to `budget` pairs of points uniformly at random (from a
/// fixed-seed generator). As soon as a pair straddles the boundary, walks
/// the axis-aligned staircase path between them and returns the first
/// face-adjacent pair where the label changes, oriented inside → outside.
///
/// Returns [`LocateError::NotFound`] when every sampled pair has the same
/// label, in particular when the image has no foreground or no background.
pub fn find_bel(
    domain: &GridDomain,
    view: &dyn BinaryView,
    budget: usize,
) -> Result<Bel, LocateError> {
    if view.point_count() != domain.len() {
        return Err(LocateError::ViewMismatch {
            expected: domain.len(),
            actual: view.point_count(),
        });
    }
    let mut rng = ChaCha8Rng::seed_from_u64(LOCATOR_SEED);
    let n = domain.len() as u64;
    for attempt in 0..budget {
        let a = PointId((rng.next_u64() % n) as usize);
        let b = PointId((rng.next_u64() % n) as usize);
        if view.is_foreground(a) == view.is_foreground(b) {
            continue;
        }
        if let Some(bel) = walk_to_bel(domain, view, a, b) {
            debug!(attempt, %bel, "located seed bel");
            return Ok(bel);
        }
    }
    Err(LocateError::NotFound { budget })
}

/// Walk from `from` to `to` one axis at a time and return the first label
/// transition as a bel.
fn walk_to_bel(
    domain: &GridDomain,
    view: &dyn BinaryView,
    from: PointId,
    to: PointId,
) -> Option<Bel> {
    let target = domain.coord_of(to);
    let mut current = from;
    for axis in 0..domain.ndim() {
        loop {
            let here = domain.coord_of(current);
            let step = (target[axis] - here[axis]).signum();
            if step == 0 {
                break;
            }
            let mut delta = [0i32; 3];
            delta[axis] = step;
            let next = domain.offset(current, &delta[..domain.ndim()])?;
            let (a, b) = (view.is_foreground(current), view.is_foreground(next));
            if a != b {
                return if a {
                    Bel::between(domain, current, next)
                } else {
                    Bel::between(domain, next, current)
                };
            }
            current = next;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontier_core::{LabelField, INSIDE, OUTSIDE};

    fn square_labels(domain: &GridDomain, lo: i32, hi: i32) -> LabelField {
        let mut labels = LabelField::filled(domain.len(), OUTSIDE);
        for p in domain.points() {
            if domain.coord_of(p).iter().all(|&c| c >= lo && c <= hi) {
                labels.set(p, INSIDE);
            }
        }
        labels
    }

    #[test]
    fn finds_bel_of_square() {
        let d = GridDomain::with_extents(&[32, 32]).unwrap();
        let labels = square_labels(&d, 8, 23);
        let bel = find_bel(&d, &labels, 10_000).unwrap();
        assert!(bel.separates(&labels));
    }

    #[test]
    fn finds_bel_in_3d() {
        let d = GridDomain::with_extents(&[12, 12, 12]).unwrap();
        let labels = square_labels(&d, 3, 8);
        let bel = find_bel(&d, &labels, 10_000).unwrap();
        assert!(bel.separates(&labels));
    }

    #[test]
    fn empty_image_is_not_found() {
        let d = GridDomain::with_extents(&[16, 16]).unwrap();
        let labels = LabelField::filled(d.len(), OUTSIDE);
        assert_eq!(
            find_bel(&d, &labels, 10_000),
            Err(LocateError::NotFound { budget: 10_000 })
        );
    }

    #[test]
    fn full_image_is_not_found() {
        let d = GridDomain::with_extents(&[8, 8]).unwrap();
        let labels = LabelField::filled(d.len(), INSIDE);
        assert!(matches!(
            find_bel(&d, &labels, 100),
            Err(LocateError::NotFound { .. })
        ));
    }

    #[test]
    fn zero_budget_is_not_found() {
        let d = GridDomain::with_extents(&[8, 8]).unwrap();
        let labels = square_labels(&d, 2, 5);
        assert!(matches!(
            find_bel(&d, &labels, 0),
            Err(LocateError::NotFound { budget: 0 })
        ));
    }

    #[test]
    fn mismatched_view_is_rejected() {
        let d = GridDomain::with_extents(&[8, 8]).unwrap();
        let labels = LabelField::filled(10, INSIDE);
        assert!(matches!(
            find_bel(&d, &labels, 100),
            Err(LocateError::ViewMismatch { expected: 64, actual: 10 })
        ));
    }

    #[test]
    fn search_is_reproducible() {
        let d = GridDomain::with_extents(&[40, 40]).unwrap();
        let labels = square_labels(&d, 10, 30);
        assert_eq!(
            find_bel(&d, &labels, 10_000).unwrap(),
            find_bel(&d, &labels, 10_000).unwrap()
        );
    }
}
