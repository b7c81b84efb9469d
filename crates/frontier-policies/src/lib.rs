//! Reference speed functors and validity predicates.
//!
//! # Speed functors
//!
//! - [`BalloonSpeed`]: `k · g(p)`, constant normal force.
//! - [`MeanCurvatureSpeed`]: `g(p) · κ(p) + k · h(p)`, data-weighted mean
//!   curvature motion.
//! - [`DistanceCurvatureSpeed`]: Laplacian of the level function.
//!
//! # Validity predicates
//!
//! - [`AlwaysValid`]: no constraint.
//! - [`SimplePoint`]: topology preserving.
//!
//! [`SpeedPolicy`] and [`PredicatePolicy`] wrap these as closed enums for
//! run-time selection.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod balloon;
pub mod differences;
pub mod dt_curvature;
pub mod error;
pub mod mean_curvature;
pub mod predicates;
pub mod selection;

pub use balloon::BalloonSpeed;
pub use differences::CubeSamples;
pub use dt_curvature::DistanceCurvatureSpeed;
pub use error::PolicyError;
pub use mean_curvature::{MeanCurvatureSpeed, MeanCurvatureSpeedBuilder};
pub use predicates::{AlwaysValid, SimplePoint};
pub use selection::{PredicatePolicy, SpeedPolicy};
