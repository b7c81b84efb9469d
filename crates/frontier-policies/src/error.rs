//! Errors raised while configuring a policy.

use thiserror::Error;

/// A policy parameter is out of range.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolicyError {
    /// The parameter is NaN or infinite.
    #[error("{parameter} must be finite, got {value}")]
    NonFinite {
        /// Parameter name.
        parameter: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The parameter must be strictly positive.
    #[error("{parameter} must be positive, got {value}")]
    NonPositive {
        /// Parameter name.
        parameter: &'static str,
        /// Offending value.
        value: f64,
    },
}

pub(crate) fn finite(parameter: &'static str, value: f64) -> Result<f64, PolicyError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PolicyError::NonFinite { parameter, value })
    }
}

pub(crate) fn positive(parameter: &'static str, value: f64) -> Result<f64, PolicyError> {
    let value = finite(parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(PolicyError::NonPositive { parameter, value })
    }
}
