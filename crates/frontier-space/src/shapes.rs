//! Label-field initialisers for simple shapes.

use crate::domain::GridDomain;
use frontier_core::{LabelField, INSIDE, OUTSIDE};

/// Euclidean ball: points strictly closer than `radius` to `centre` are
/// inside.
///
/// `centre` may lie anywhere, inside the domain or not; its length must
/// equal the domain's dimension (extra or missing axes are ignored or
/// treated as zero).
///
/// # Examples
///
/// ```
/// use frontier_space::{ball_labels, GridDomain};
///
/// let domain = GridDomain::with_extents(&[5, 5]).unwrap();
/// let labels = ball_labels(&domain, &[2.0, 2.0], 1.5);
/// assert_eq!(labels.foreground_size(), 9);
/// ```
pub fn ball_labels(domain: &GridDomain, centre: &[f64], radius: f64) -> LabelField {
    let r2 = radius * radius;
    let mut labels = LabelField::filled(domain.len(), OUTSIDE);
    for p in domain.points() {
        let d2: f64 = domain
            .coord_of(p)
            .iter()
            .enumerate()
            .map(|(axis, &x)| {
                let c = centre.get(axis).copied().unwrap_or(0.0);
                (f64::from(x) - c).powi(2)
            })
            .sum();
        if d2 < r2 {
            labels.set(p, INSIDE);
        }
    }
    labels
}

/// Axis-aligned box between inclusive corners `lo` and `hi`.
pub fn box_labels(domain: &GridDomain, lo: &[i32], hi: &[i32]) -> LabelField {
    let mut labels = LabelField::filled(domain.len(), OUTSIDE);
    for p in domain.points() {
        let inside = domain
            .coord_of(p)
            .iter()
            .zip(lo.iter().zip(hi))
            .all(|(&x, (&l, &h))| l <= x && x <= h);
        if inside {
            labels.set(p, INSIDE);
        }
    }
    labels
}
