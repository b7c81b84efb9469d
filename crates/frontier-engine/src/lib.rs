//! Narrow-band digital frontier evolution.
//!
//! Provides [`FrontierEvolver`], which moves the boundary of a labelled
//! region on a 2D or 3D grid under a pluggable speed functor, flipping
//! labels of points near the front once their accumulated time of flight
//! crosses half the band width. A pluggable validity predicate can veto
//! flips, e.g. to preserve topology.
//!
//! # Modules
//!
//! - [`config`]: [`EvolverConfig`] and its validation.
//! - [`tracker`]: the ordered frontier set and its incremental refresh.
//! - [`evolver`]: the update loop.
//! - [`driver`]: step- and time-bounded runs with periodic snapshots.
//! - [`sink`]: snapshot destinations.
//! - [`hash`]: state fingerprints for determinism checks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod error;
pub mod evolver;
pub mod hash;
pub mod metrics;
pub mod sink;
pub mod tracker;

pub use config::{ConfigError, EvolverConfig};
pub use driver::{run, RunBudget, RunError, RunSummary, DEFAULT_MIN_DT};
pub use error::EvolveError;
pub use evolver::FrontierEvolver;
pub use hash::{labels_hash, state_hash};
pub use metrics::StepMetrics;
pub use sink::{MemorySink, NullSink, SnapshotSink};
pub use tracker::{borders_bel, FrontierDelta, FrontierTracker};
