//! Snapshot sinks: where the run driver sends label fields for display.

use std::convert::Infallible;

use frontier_core::LabelField;
use frontier_space::GridDomain;

/// Receives numbered snapshots of the label field.
///
/// Frames are numbered from 1; frame 1 is the initial state.
pub trait SnapshotSink {
    /// Error raised when a frame cannot be recorded.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Record one frame.
    fn record(
        &mut self,
        frame: u32,
        domain: &GridDomain,
        labels: &LabelField,
    ) -> Result<(), Self::Error>;
}

impl<K: SnapshotSink + ?Sized> SnapshotSink for &mut K {
    type Error = K::Error;

    fn record(
        &mut self,
        frame: u32,
        domain: &GridDomain,
        labels: &LabelField,
    ) -> Result<(), Self::Error> {
        (**self).record(frame, domain, labels)
    }
}

/// Discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    type Error = Infallible;

    fn record(&mut self, _: u32, _: &GridDomain, _: &LabelField) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Keeps every frame in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    /// Recorded `(frame, labels)` pairs in recording order.
    pub frames: Vec<(u32, LabelField)>,
}

impl MemorySink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotSink for MemorySink {
    type Error = Infallible;

    fn record(
        &mut self,
        frame: u32,
        _domain: &GridDomain,
        labels: &LabelField,
    ) -> Result<(), Infallible> {
        self.frames.push((frame, labels.clone()));
        Ok(())
    }
}
