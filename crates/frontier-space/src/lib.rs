//! Spatial substrate for digital frontier evolution.
//!
//! This crate defines the [`GridDomain`] lattice, the [`Adjacency`]
//! relations used on it, oriented boundary elements ([`Bel`]), the seed
//! locator [`find_bel`], and the [`Topology`] trait, the abstract
//! collaborator through which the engine enumerates neighbours and asks
//! whether a point is simple.
//!
//! # Backends
//!
//! - [`DigitalTopology`]: local topological-number test on 2D (4/8) and
//!   3D (6/18/26) lattices under a configurable [`AdjacencyPair`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod bel;
pub mod domain;
pub mod error;
pub mod locate;
pub mod shapes;
pub mod topology;

#[cfg(test)]
pub(crate) mod compliance;

pub use adjacency::{Adjacency, AdjacencyPair};
pub use bel::Bel;
pub use domain::GridDomain;
pub use error::SpaceError;
pub use locate::{find_bel, LocateError};
pub use shapes::{ball_labels, box_labels};
pub use topology::{DigitalTopology, Topology};
