//! Run driver: repeated updates under a step or time budget, with
//! periodic snapshots.

use frontier_policy::{SpeedFunctor, ValidityPredicate};
use frontier_space::Topology;
use thiserror::Error;
use tracing::{info, warn};

use crate::evolver::FrontierEvolver;
use crate::sink::SnapshotSink;

/// Time step at or below which a time-bounded run is considered stalled.
pub const DEFAULT_MIN_DT: f64 = 0.01;

/// When to stop a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RunBudget {
    /// Exactly this many updates.
    Steps(u64),
    /// Update while the accumulated time is at most `t_max` and the last
    /// time step exceeded `min_dt`.
    Time {
        /// Accumulated-time bound.
        t_max: f64,
        /// Stall threshold on the time step.
        min_dt: f64,
    },
}

impl RunBudget {
    /// Time budget with the default stall threshold.
    pub fn until(t_max: f64) -> Self {
        Self::Time {
            t_max,
            min_dt: DEFAULT_MIN_DT,
        }
    }
}

/// Outcome of [`run`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    /// Updates performed.
    pub steps: u64,
    /// Accumulated time over the run.
    pub elapsed: f64,
    /// Frames handed to the sink, the initial one included.
    pub frames: u32,
    /// Whether a time-bounded run stopped on a small time step.
    pub stalled: bool,
    /// `(accumulated time, inside point count)` at the start and after
    /// every update.
    pub samples: Vec<(f64, usize)>,
}

/// Errors from [`run`].
#[derive(Debug, Error)]
pub enum RunError<E: std::error::Error + 'static> {
    /// The sink refused a frame.
    #[error("snapshot sink failed on frame {frame}")]
    Sink {
        /// Frame number.
        frame: u32,
        /// Sink error.
        #[source]
        source: E,
    },
}

/// Drive `evolver` until `budget` is spent.
///
/// Frame 1 (the initial state) is recorded before the first update; after
/// update `i`, frame `i / display_step + 1` is recorded whenever
/// `display_step` divides `i`. A `display_step` of 0 is treated as 1.
pub fn run<S, P, T, K>(
    evolver: &mut FrontierEvolver<S, P, T>,
    budget: RunBudget,
    display_step: u64,
    sink: &mut K,
) -> Result<RunSummary, RunError<K::Error>>
where
    S: SpeedFunctor,
    P: ValidityPredicate,
    T: Topology,
    K: SnapshotSink + ?Sized,
{
    let display_step = display_step.max(1);
    let mut summary = RunSummary::default();
    record(evolver, sink, 1)?;
    summary.frames = 1;
    summary.samples.push((0.0, evolver.foreground_size()));
    info!(?budget, display_step, "run started");

    let mut last_dt = f64::INFINITY;
    loop {
        let proceed = match budget {
            RunBudget::Steps(n) => summary.steps < n,
            RunBudget::Time { t_max, min_dt } => {
                if last_dt <= min_dt {
                    summary.stalled = true;
                    warn!(dt = last_dt, min_dt, step = summary.steps, "evolution stalled");
                    false
                } else {
                    summary.elapsed <= t_max
                }
            }
        };
        if !proceed {
            break;
        }

        last_dt = evolver.update();
        summary.steps += 1;
        summary.elapsed += last_dt;
        summary
            .samples
            .push((summary.elapsed, evolver.foreground_size()));

        if summary.steps % display_step == 0 {
            let frame = frame_number(summary.steps, display_step);
            record(evolver, sink, frame)?;
            summary.frames += 1;
        }
    }

    info!(
        steps = summary.steps,
        elapsed = summary.elapsed,
        frames = summary.frames,
        inside = evolver.foreground_size(),
        "run finished"
    );
    Ok(summary)
}

/// Frame recorded after `steps` updates; saturates at `u32::MAX`.
fn frame_number(steps: u64, display_step: u64) -> u32 {
    u32::try_from((steps / display_step.max(1)).saturating_add(1)).unwrap_or(u32::MAX)
}

fn record<S, P, T, K>(
    evolver: &FrontierEvolver<S, P, T>,
    sink: &mut K,
    frame: u32,
) -> Result<(), RunError<K::Error>>
where
    S: SpeedFunctor,
    P: ValidityPredicate,
    T: Topology,
    K: SnapshotSink + ?Sized,
{
    sink.record(frame, evolver.domain(), evolver.labels())
        .map_err(|source| RunError::Sink { frame, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EvolverConfig;
    use crate::sink::{MemorySink, NullSink};
    use frontier_core::LabelField;
    use frontier_space::{box_labels, Bel, DigitalTopology, GridDomain};
    use frontier_test_utils::{ConstSpeed, CountingPredicate};

    fn evolver(speed: f64) -> FrontierEvolver<ConstSpeed, CountingPredicate> {
        let domain = GridDomain::with_extents(&[21, 21]).unwrap();
        let labels = box_labels(&domain, &[9, 9], &[11, 11]);
        let seed = Bel::between(
            &domain,
            domain.index_of(&[9, 10]).unwrap(),
            domain.index_of(&[8, 10]).unwrap(),
        )
        .unwrap();
        let topo = DigitalTopology::standard(domain).unwrap();
        FrontierEvolver::new(
            topo,
            labels,
            seed,
            ConstSpeed::new(speed),
            CountingPredicate::new(),
            EvolverConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn frame_numbers_saturate() {
        assert_eq!(frame_number(0, 1), 1);
        assert_eq!(frame_number(4, 2), 3);
        assert_eq!(frame_number(7, 0), 8);
        assert_eq!(frame_number(u64::from(u32::MAX) - 1, 1), u32::MAX);
        assert_eq!(frame_number(u64::from(u32::MAX), 1), u32::MAX);
        assert_eq!(frame_number(u64::MAX, 1), u32::MAX);
    }

    #[test]
    fn step_budget_and_frame_numbering() {
        let mut e = evolver(0.5);
        let mut sink = MemorySink::new();
        let summary = run(&mut e, RunBudget::Steps(4), 2, &mut sink).unwrap();
        assert_eq!(summary.steps, 4);
        assert_eq!(summary.elapsed, 8.0);
        let frames: Vec<u32> = sink.frames.iter().map(|(f, _)| *f).collect();
        assert_eq!(frames, vec![1, 2, 3]);
        assert_eq!(summary.frames, 3);
        assert_eq!(summary.samples.len(), 5);
        assert_eq!(summary.samples[0], (0.0, 9));
    }

    #[test]
    fn time_budget_stops_past_t_max() {
        let mut e = evolver(1.0);
        let summary = run(&mut e, RunBudget::until(2.5), 1, &mut NullSink).unwrap();
        // Steps of 1.0 while elapsed <= 2.5: 0, 1, 2 -> three updates.
        assert_eq!(summary.steps, 3);
        assert_eq!(summary.elapsed, 3.0);
        assert!(!summary.stalled);
    }

    #[test]
    fn zero_speed_stalls_after_one_step() {
        let mut e = evolver(0.0);
        let summary = run(&mut e, RunBudget::until(10.0), 1, &mut NullSink).unwrap();
        assert_eq!(summary.steps, 1);
        assert!(summary.stalled);
        assert_eq!(summary.samples.last(), Some(&(0.0, 9)));
    }

    #[test]
    fn sink_errors_carry_the_frame() {
        #[derive(Debug, thiserror::Error)]
        #[error("disk full")]
        struct Full;

        struct FailOnSecond;

        impl SnapshotSink for FailOnSecond {
            type Error = Full;

            fn record(&mut self, frame: u32, _: &GridDomain, _: &LabelField) -> Result<(), Full> {
                if frame == 2 {
                    Err(Full)
                } else {
                    Ok(())
                }
            }
        }

        let mut e = evolver(1.0);
        let err = run(&mut e, RunBudget::Steps(3), 1, &mut FailOnSecond).unwrap_err();
        let RunError::Sink { frame, .. } = err;
        assert_eq!(frame, 2);
        assert_eq!(e.current_step().0, 1);
    }
}
