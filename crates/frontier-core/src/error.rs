//! Error types for field construction and access.

use thiserror::Error;

/// Errors arising when building or combining per-point fields.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FieldError {
    /// A field's length does not match the number of points of the domain
    /// it is used with.
    #[error("field has {actual} values, expected {expected}")]
    LengthMismatch {
        /// Number of points in the domain.
        expected: usize,
        /// Number of values in the field.
        actual: usize,
    },
    /// A field was built from no values.
    #[error("field must hold at least one value")]
    Empty,
    /// A scalar value is NaN or infinite where a finite value is required.
    #[error("non-finite value {value} at point {index}")]
    NonFinite {
        /// Index of the offending point.
        index: usize,
        /// The rejected value.
        value: f64,
    },
}
