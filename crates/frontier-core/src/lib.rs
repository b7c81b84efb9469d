//! Core types and traits for digital frontier evolution.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental abstractions shared by the rest of the workspace: point and
//! step identifiers, the label and scalar fields stored per grid point,
//! field errors, and the read-only views consumed by policies.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod id;
pub mod traits;

pub use error::FieldError;
pub use field::{Label, LabelField, ScalarField, INSIDE, OUTSIDE};
pub use id::{Coord, PointId, StepId};
pub use traits::{BinaryView, ScalarReader};
