//! Error types for image and volume I/O.

use frontier_core::FieldError;
use frontier_space::SpaceError;
use thiserror::Error;

/// Errors arising when reading or writing label images.
#[derive(Debug, Error)]
pub enum IoError {
    /// An I/O error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The file does not start with the expected magic.
    #[error("invalid magic: expected {expected}, found {found:?}")]
    InvalidMagic {
        /// Accepted magic value(s).
        expected: &'static str,
        /// What was actually read.
        found: String,
    },
    /// A header or data section could not be parsed.
    #[error("malformed {format} data: {detail}")]
    Malformed {
        /// Format being decoded.
        format: &'static str,
        /// Human-readable description of the problem.
        detail: String,
    },
    /// The domain has the wrong number of axes for this format.
    #[error("{format} requires a {expected}D domain, got {actual}D")]
    Dimension {
        /// Format being written.
        format: &'static str,
        /// Required number of axes.
        expected: usize,
        /// Number of axes of the domain.
        actual: usize,
    },
    /// A section index lies beyond the sliced axis.
    #[error("section {index} out of range for axis of extent {extent}")]
    SectionOutOfRange {
        /// Requested section.
        index: usize,
        /// Number of points along the sliced axis.
        extent: usize,
    },
    /// The label field does not cover the domain.
    #[error("label field does not match domain: {0}")]
    Field(#[from] FieldError),
    /// The decoded extents do not form a valid domain.
    #[error("invalid domain: {0}")]
    Space(#[from] SpaceError),
}

impl IoError {
    pub(crate) fn malformed(format: &'static str, detail: impl Into<String>) -> Self {
        Self::Malformed {
            format,
            detail: detail.into(),
        }
    }
}
