//! Speed functor and validity predicate traits.
//!
//! The evolver is parameterised by two strategies: a [`SpeedFunctor`]
//! giving the normal speed of the front at a point, and a
//! [`ValidityPredicate`] deciding whether a label flip may be committed.
//! Both receive a borrowed context rather than owning the fields they read,
//! so the evolver keeps exclusive write access to labels and times.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod predicate;
pub mod speed;

pub use context::{FlipContext, SpeedContext};
pub use predicate::ValidityPredicate;
pub use speed::SpeedFunctor;
