//! Read-only contexts handed to policies during an evolution step.
//!
//! [`SpeedContext`] exposes the lattice, the label field and the
//! distance/time field as they stood at the start of the step;
//! [`FlipContext`] exposes the topology substrate and the label field as it
//! stands when a flip candidate is examined (earlier flips of the same step
//! included).

use frontier_core::{LabelField, ScalarField, StepId};
use frontier_space::{GridDomain, Topology};

/// Context passed to [`SpeedFunctor::speed`](crate::SpeedFunctor::speed).
///
/// Built once per step and shared by every speed evaluation of that step,
/// so speeds never observe mid-step flips.
#[derive(Clone, Copy)]
pub struct SpeedContext<'a> {
    domain: &'a GridDomain,
    labels: &'a LabelField,
    time: &'a ScalarField,
    band_width: f64,
    step: StepId,
}

impl<'a> SpeedContext<'a> {
    /// Construct a new speed context.
    ///
    /// Typically called by the evolver, not by policies directly.
    pub fn new(
        domain: &'a GridDomain,
        labels: &'a LabelField,
        time: &'a ScalarField,
        band_width: f64,
        step: StepId,
    ) -> Self {
        Self {
            domain,
            labels,
            time,
            band_width,
            step,
        }
    }

    /// The lattice.
    pub fn domain(&self) -> &'a GridDomain {
        self.domain
    }

    /// Labels at the start of the step.
    pub fn labels(&self) -> &'a LabelField {
        self.labels
    }

    /// Distance/time field at the start of the step.
    pub fn time(&self) -> &'a ScalarField {
        self.time
    }

    /// Width of the flipping band.
    pub fn band_width(&self) -> f64 {
        self.band_width
    }

    /// Index of the step being computed (the first `update()` is step 1).
    pub fn step(&self) -> StepId {
        self.step
    }
}

/// Context passed to [`ValidityPredicate::is_valid`](crate::ValidityPredicate::is_valid).
#[derive(Clone, Copy)]
pub struct FlipContext<'a> {
    topology: &'a dyn Topology,
    labels: &'a LabelField,
    step: StepId,
}

impl<'a> FlipContext<'a> {
    /// Construct a new flip context.
    pub fn new(topology: &'a dyn Topology, labels: &'a LabelField, step: StepId) -> Self {
        Self {
            topology,
            labels,
            step,
        }
    }

    /// The topology substrate.
    pub fn topology(&self) -> &'a dyn Topology {
        self.topology
    }

    /// Current labels, including flips committed earlier in this step.
    pub fn labels(&self) -> &'a LabelField {
        self.labels
    }

    /// Index of the step being computed.
    pub fn step(&self) -> StepId {
        self.step
    }
}
