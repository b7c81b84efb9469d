//! Per-point fields: the label field and real-valued scalar fields.
//!
//! Both are flat arrays indexed by [`PointId`]. They carry no geometry;
//! the owning domain decides which index is which point.

use crate::error::FieldError;
use crate::id::PointId;
use crate::traits::{BinaryView, ScalarReader};

/// A small integer label stored per grid point.
pub type Label = u8;

/// Label of background (outside) points.
pub const OUTSIDE: Label = 0;

/// Label of foreground (inside) points.
pub const INSIDE: Label = 1;

/// Inside/outside membership of every grid point.
///
/// Any label strictly greater than [`OUTSIDE`] counts as inside; the
/// evolver only ever writes [`INSIDE`] or [`OUTSIDE`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelField {
    data: Vec<Label>,
}

impl LabelField {
    /// A field of `len` points, all labelled `label`.
    pub fn filled(len: usize, label: Label) -> Self {
        Self {
            data: vec![label; len],
        }
    }

    /// Wrap raw label values.
    ///
    /// Returns `Err(FieldError::Empty)` for an empty vector.
    pub fn from_vec(data: Vec<Label>) -> Result<Self, FieldError> {
        if data.is_empty() {
            return Err(FieldError::Empty);
        }
        Ok(Self { data })
    }

    /// Number of points covered by the field.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always returns `false`: construction rejects empty fields.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Label of point `p`.
    #[inline]
    pub fn get(&self, p: PointId) -> Label {
        self.data[p.0]
    }

    /// Overwrite the label of point `p`.
    #[inline]
    pub fn set(&mut self, p: PointId, label: Label) {
        self.data[p.0] = label;
    }

    /// Whether point `p` belongs to the foreground.
    #[inline]
    pub fn is_inside(&self, p: PointId) -> bool {
        self.data[p.0] > OUTSIDE
    }

    /// Number of points carrying exactly `label`.
    pub fn count(&self, label: Label) -> usize {
        self.data.iter().filter(|&&l| l == label).count()
    }

    /// Number of foreground points.
    pub fn foreground_size(&self) -> usize {
        self.data.iter().filter(|&&l| l > OUTSIDE).count()
    }

    /// Swap foreground and background.
    ///
    /// Used when an input image encodes the object in dark pixels.
    pub fn invert(&mut self) {
        for l in &mut self.data {
            *l = if *l > OUTSIDE { OUTSIDE } else { INSIDE };
        }
    }

    /// Reduce arbitrary labels to [`INSIDE`]/[`OUTSIDE`] using a strict
    /// threshold: labels above `threshold` become inside.
    pub fn binarized(&self, threshold: Label) -> Self {
        Self {
            data: self
                .data
                .iter()
                .map(|&l| if l > threshold { INSIDE } else { OUTSIDE })
                .collect(),
        }
    }

    /// Raw label values in point order.
    pub fn as_slice(&self) -> &[Label] {
        &self.data
    }

    /// Check that the field covers exactly `expected` points.
    pub fn check_len(&self, expected: usize) -> Result<(), FieldError> {
        if self.data.len() != expected {
            return Err(FieldError::LengthMismatch {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }
}

impl BinaryView for LabelField {
    fn point_count(&self) -> usize {
        self.data.len()
    }

    fn is_foreground(&self, p: PointId) -> bool {
        self.is_inside(p)
    }
}

/// A real value per grid point.
///
/// Serves both as the evolver's distance/time field and as read-only
/// auxiliary data (e.g. an edge-stopping weight) handed to speed functors.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    data: Vec<f64>,
}

impl ScalarField {
    /// A field of `len` points, all holding `value`.
    pub fn filled(len: usize, value: f64) -> Self {
        Self {
            data: vec![value; len],
        }
    }

    /// A zero-initialised field of `len` points.
    pub fn zeros(len: usize) -> Self {
        Self::filled(len, 0.0)
    }

    /// Wrap raw values, rejecting empty input and non-finite entries.
    pub fn from_vec(data: Vec<f64>) -> Result<Self, FieldError> {
        if data.is_empty() {
            return Err(FieldError::Empty);
        }
        if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(FieldError::NonFinite { index, value });
        }
        Ok(Self { data })
    }

    /// Number of points covered by the field.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always returns `false` for fields built through `from_vec`.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at point `p`.
    #[inline]
    pub fn get(&self, p: PointId) -> f64 {
        self.data[p.0]
    }

    /// Overwrite the value at point `p`.
    #[inline]
    pub fn set(&mut self, p: PointId, value: f64) {
        self.data[p.0] = value;
    }

    /// Add `delta` to the value at point `p`.
    #[inline]
    pub fn add(&mut self, p: PointId, delta: f64) {
        self.data[p.0] += delta;
    }

    /// Raw values in point order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Check that the field covers exactly `expected` points.
    pub fn check_len(&self, expected: usize) -> Result<(), FieldError> {
        if self.data.len() != expected {
            return Err(FieldError::LengthMismatch {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }
}

impl ScalarReader for ScalarField {
    fn value(&self, p: PointId) -> f64 {
        self.get(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn label_field_rejects_empty() {
        assert_eq!(LabelField::from_vec(vec![]), Err(FieldError::Empty));
    }

    #[test]
    fn foreground_counts_any_positive_label() {
        let f = LabelField::from_vec(vec![0, 1, 2, 0, 7]).unwrap();
        assert_eq!(f.foreground_size(), 3);
        assert_eq!(f.count(INSIDE), 1);
        assert_eq!(f.count(OUTSIDE), 2);
    }

    #[test]
    fn invert_swaps_membership() {
        let mut f = LabelField::from_vec(vec![0, 1, 5]).unwrap();
        f.invert();
        assert_eq!(f.as_slice(), &[INSIDE, OUTSIDE, OUTSIDE]);
    }

    #[test]
    fn binarized_uses_strict_threshold() {
        let f = LabelField::from_vec(vec![0, 100, 128, 200]).unwrap();
        assert_eq!(f.binarized(128).as_slice(), &[0, 0, 0, 1]);
    }

    #[test]
    fn check_len_reports_mismatch() {
        let f = LabelField::filled(4, OUTSIDE);
        assert_eq!(
            f.check_len(9),
            Err(FieldError::LengthMismatch {
                expected: 9,
                actual: 4
            })
        );
        assert!(f.check_len(4).is_ok());
    }

    #[test]
    fn scalar_field_rejects_nan() {
        let err = ScalarField::from_vec(vec![1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, FieldError::NonFinite { index: 1, .. }));
    }

    #[test]
    fn scalar_field_add_accumulates() {
        let mut f = ScalarField::zeros(3);
        f.add(PointId(1), 0.25);
        f.add(PointId(1), 0.5);
        assert_eq!(f.get(PointId(1)), 0.75);
        assert_eq!(f.value(PointId(0)), 0.0);
    }

    proptest! {
        #[test]
        fn double_invert_is_identity_on_binary_fields(bits in proptest::collection::vec(0u8..2, 1..64)) {
            let original = LabelField::from_vec(bits).unwrap();
            let mut f = original.clone();
            f.invert();
            f.invert();
            prop_assert_eq!(f, original);
        }
    }
}
