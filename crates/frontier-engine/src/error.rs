//! Errors raised while building an evolver.

use crate::config::ConfigError;
use frontier_space::{Bel, LocateError};
use thiserror::Error;

/// Construction failures. A built evolver never fails afterwards.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvolveError {
    /// The seed search met no boundary element within its budget (for
    /// instance on an all-inside or all-outside image).
    #[error("starting bel not found within {budget} tries")]
    SeedNotFound {
        /// Number of sampled point pairs.
        budget: usize,
    },
    /// The given seed does not separate an inside point from an outside
    /// one, so there is no frontier to track.
    #[error("{bel} does not lie on the boundary")]
    SeedNotOnBoundary {
        /// The rejected seed.
        bel: Bel,
    },
    /// Configuration or field sizes are invalid.
    #[error("invalid configuration")]
    InvalidConfiguration(#[from] ConfigError),
}

impl From<LocateError> for EvolveError {
    fn from(e: LocateError) -> Self {
        match e {
            LocateError::NotFound { budget } => Self::SeedNotFound { budget },
            LocateError::ViewMismatch { expected, actual } => {
                Self::InvalidConfiguration(ConfigError::FieldSize {
                    field: "labels",
                    source: frontier_core::FieldError::LengthMismatch { expected, actual },
                })
            }
        }
    }
}
