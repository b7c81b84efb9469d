//! Frontier: narrow-band evolution of digital interfaces on 2D and 3D grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all frontier sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use frontier::prelude::*;
//!
//! // A disk of radius 6 in a 32 × 32 plane, grown by a unit balloon force.
//! let domain = GridDomain::with_extents(&[32, 32]).unwrap();
//! let labels = ball_labels(&domain, &[16.0, 16.0], 6.0);
//! let topology = DigitalTopology::standard(domain).unwrap();
//! let mut evolver = FrontierEvolver::seeded(
//!     topology,
//!     labels,
//!     BalloonSpeed::new(1.0).unwrap(),
//!     SimplePoint,
//!     EvolverConfig::default(),
//! )
//! .unwrap();
//!
//! let before = evolver.foreground_size();
//! let summary = run(&mut evolver, RunBudget::Steps(3), 1, &mut NullSink).unwrap();
//! assert_eq!(summary.steps, 3);
//! assert!(evolver.foreground_size() > before);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `frontier-core` | Point ids, label and scalar fields, views |
//! | [`space`] | `frontier-space` | Grid domain, adjacencies, bels, simple points |
//! | [`policy`] | `frontier-policy` | Speed functor and validity predicate traits |
//! | [`policies`] | `frontier-policies` | Balloon, curvature speeds and predicates |
//! | [`engine`] | `frontier-engine` | The evolver, frontier tracker and run driver |
//! | [`io`] | `frontier-io` | PGM, vol and SVG files, file snapshot sinks |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`frontier-core`).
pub use frontier_core as types;

/// Lattice, adjacencies and topology (`frontier-space`).
///
/// [`space::GridDomain`] is the lattice; [`space::DigitalTopology`]
/// implements the [`space::Topology`] substrate, including the simple point
/// test.
pub use frontier_space as space;

/// Strategy traits (`frontier-policy`).
pub use frontier_policy as policy;

/// Reference speed functors and predicates (`frontier-policies`).
pub use frontier_policies as policies;

/// The evolver and run driver (`frontier-engine`).
pub use frontier_engine as engine;

/// Image and volume files (`frontier-io`).
pub use frontier_io as io;

/// Common imports for typical frontier usage.
///
/// ```rust
/// use frontier::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use frontier_core::{Label, LabelField, PointId, ScalarField, StepId, INSIDE, OUTSIDE};

    // Space
    pub use frontier_space::{
        ball_labels, box_labels, find_bel, Adjacency, AdjacencyPair, Bel, DigitalTopology,
        GridDomain, Topology,
    };

    // Strategies
    pub use frontier_policy::{FlipContext, SpeedContext, SpeedFunctor, ValidityPredicate};
    pub use frontier_policies::{
        AlwaysValid, BalloonSpeed, DistanceCurvatureSpeed, MeanCurvatureSpeed, PredicatePolicy,
        SimplePoint, SpeedPolicy,
    };

    // Engine
    pub use frontier_engine::{
        run, EvolveError, EvolverConfig, FrontierEvolver, NullSink, RunBudget, RunSummary,
        SnapshotSink, StepMetrics,
    };

    // I/O
    pub use frontier_io::{FileSink, ImageFormat, IoError};
}
