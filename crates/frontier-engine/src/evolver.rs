//! The narrow-band frontier evolver.
//!
//! [`FrontierEvolver`] owns the label field and the distance/time field of
//! a run and advances them one step per [`update()`](FrontierEvolver::update):
//!
//! 1. evaluate the speed functor on every frontier point,
//! 2. pick `dt = min(max_time_step, w / max|v|)` (0 when nothing moves),
//! 3. integrate `T += v · dt` over the frontier,
//! 4. visit frontier points in ascending order and flip those whose time
//!    value crossed `±w/2`, subject to the validity predicate,
//! 5. refresh the frontier around the flipped points.
//!
//! # Ownership model
//!
//! The evolver is [`Send`] when its policies are, but holds no interior
//! mutability; all stepping goes through `&mut self`. Policies only ever
//! see borrowed, read-only contexts.

use std::fmt;
use std::time::Instant;

use frontier_core::{LabelField, PointId, ScalarField, StepId, INSIDE, OUTSIDE};
use frontier_policy::{FlipContext, SpeedContext, SpeedFunctor, ValidityPredicate};
use frontier_space::{find_bel, Bel, DigitalTopology, GridDomain, Topology};
use tracing::{debug, info, trace};

use crate::config::{ConfigError, EvolverConfig};
use crate::error::EvolveError;
use crate::metrics::StepMetrics;
use crate::tracker::FrontierTracker;

// Compile-time assertion: an evolver over boxed policies is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<FrontierEvolver<Box<dyn SpeedFunctor>, Box<dyn ValidityPredicate>>>();
    }
};

/// Digital frontier evolver.
///
/// Generic over the speed functor `S`, the validity predicate `P` and the
/// topology substrate `T`.
///
/// # Example
///
/// ```ignore
/// let mut e = FrontierEvolver::seeded(topology, labels, speed, predicate, config)?;
/// let mut t = 0.0;
/// while t < t_max {
///     t += e.update();
/// }
/// let result = e.into_labels();
/// ```
pub struct FrontierEvolver<S, P, T = DigitalTopology> {
    topology: T,
    labels: LabelField,
    time: ScalarField,
    speed: S,
    predicate: P,
    config: EvolverConfig,
    tracker: FrontierTracker,
    step: StepId,
    elapsed: f64,
    speeds: Vec<(PointId, f64)>,
    last_metrics: StepMetrics,
}

impl<S, P, T> FrontierEvolver<S, P, T>
where
    S: SpeedFunctor,
    P: ValidityPredicate,
    T: Topology,
{
    /// Build an evolver whose frontier is located from `seed`.
    ///
    /// The time field starts at zero everywhere.
    ///
    /// # Errors
    ///
    /// - [`EvolveError::InvalidConfiguration`] if `config` fails
    ///   validation, or `labels` or the speed functor's data fields do not
    ///   cover the topology's domain.
    /// - [`EvolveError::SeedNotOnBoundary`] if `seed` does not separate an
    ///   inside point from an outside point.
    pub fn new(
        topology: T,
        labels: LabelField,
        seed: Bel,
        speed: S,
        predicate: P,
        config: EvolverConfig,
    ) -> Result<Self, EvolveError> {
        config.validate()?;
        let n = topology.domain().len();
        labels
            .check_len(n)
            .map_err(|source| ConfigError::FieldSize {
                field: "labels",
                source,
            })?;
        speed
            .check_domain(n)
            .map_err(|source| ConfigError::FieldSize {
                field: "speed data",
                source,
            })?;
        let tracker = FrontierTracker::locate(&topology, &labels, seed)
            .ok_or(EvolveError::SeedNotOnBoundary { bel: seed })?;

        info!(
            ndim = topology.domain().ndim(),
            points = n,
            adjacency = %topology.adjacency(),
            frontier = tracker.len(),
            speed = speed.name(),
            predicate = predicate.name(),
            band_width = config.band_width,
            "frontier evolver ready"
        );

        Ok(Self {
            time: ScalarField::zeros(n),
            topology,
            labels,
            speed,
            predicate,
            config,
            tracker,
            step: StepId(0),
            elapsed: 0.0,
            speeds: Vec::new(),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Build an evolver, searching for a starting bel with the configured
    /// budget.
    ///
    /// # Errors
    ///
    /// As [`new()`](Self::new), plus [`EvolveError::SeedNotFound`] when the
    /// search meets no bel, in particular on an image with no foreground
    /// or no background.
    pub fn seeded(
        topology: T,
        labels: LabelField,
        speed: S,
        predicate: P,
        config: EvolverConfig,
    ) -> Result<Self, EvolveError> {
        config.validate()?;
        let seed = find_bel(topology.domain(), &labels, config.search_budget)?;
        info!(%seed, "starting bel found");
        Self::new(topology, labels, seed, speed, predicate, config)
    }

    /// Advance the front by one step and return the time step used.
    ///
    /// Never fails. Returns 0 when every frontier speed is zero; in that
    /// case labels and times are left unchanged.
    pub fn update(&mut self) -> f64 {
        let started = Instant::now();
        self.step = StepId(self.step.0 + 1);
        let step = self.step;
        let w = self.config.band_width;
        let h = self.config.half_band();
        let frontier_size = self.tracker.len();

        // Speeds are evaluated against the state at the start of the step.
        self.speeds.clear();
        let mut max_speed = 0.0f64;
        {
            let ctx = SpeedContext::new(self.topology.domain(), &self.labels, &self.time, w, step);
            for p in self.tracker.iter() {
                let v = self.speed.speed(&ctx, p);
                let v = if v.is_finite() { v } else { 0.0 };
                max_speed = max_speed.max(v.abs());
                self.speeds.push((p, v));
            }
        }

        let dt = if max_speed > 0.0 {
            let cfl = w / max_speed;
            self.config.max_time_step.map_or(cfl, |m| m.min(cfl))
        } else {
            0.0
        };

        if dt > 0.0 {
            for &(p, v) in &self.speeds {
                self.time.add(p, v * dt);
            }
        }

        let mut flipped = Vec::new();
        let mut candidates = 0;
        let mut deferred = 0;
        for &(p, _) in &self.speeds {
            let t = self.time.get(p);
            let inside = self.labels.is_inside(p);
            let target = if !inside && t > h {
                Some(INSIDE)
            } else if inside && t < -h {
                Some(OUTSIDE)
            } else {
                None
            };
            let Some(new_label) = target else {
                // Overshoot away from the other side cannot flip anything.
                if t.abs() > h {
                    self.time.set(p, t.clamp(-h, h));
                }
                continue;
            };
            candidates += 1;
            let valid = {
                let ctx = FlipContext::new(&self.topology, &self.labels, step);
                self.predicate.is_valid(&ctx, p, new_label)
            };
            if valid {
                self.labels.set(p, new_label);
                let rebased = if new_label == INSIDE { t - w } else { t + w };
                self.time.set(p, rebased.clamp(-h, h));
                flipped.push(p);
            } else {
                deferred += 1;
                trace!(step = step.0, point = %p, time = t, "flip deferred");
            }
        }

        let delta = self.tracker.refresh(&self.topology, &self.labels, &flipped);
        for &q in &delta.left {
            self.time.set(q, 0.0);
        }
        self.elapsed += dt;

        self.last_metrics = StepMetrics {
            step,
            dt,
            max_speed,
            frontier_size,
            candidates,
            flips: flipped.len(),
            deferred,
            entered: delta.entered.len(),
            left: delta.left.len(),
            elapsed_us: started.elapsed().as_micros() as u64,
        };
        debug!(
            step = step.0,
            dt,
            max_speed,
            flips = flipped.len(),
            deferred,
            frontier = self.tracker.len(),
            "step complete"
        );
        dt
    }

    /// Current labels.
    pub fn labels(&self) -> &LabelField {
        &self.labels
    }

    /// Current distance/time field.
    pub fn time(&self) -> &ScalarField {
        &self.time
    }

    /// The topology substrate.
    pub fn topology(&self) -> &T {
        &self.topology
    }

    /// The lattice.
    pub fn domain(&self) -> &GridDomain {
        self.topology.domain()
    }

    /// The tracked frontier.
    pub fn frontier(&self) -> &FrontierTracker {
        &self.tracker
    }

    /// Configuration the evolver was built with.
    pub fn config(&self) -> &EvolverConfig {
        &self.config
    }

    /// The speed functor.
    pub fn speed(&self) -> &S {
        &self.speed
    }

    /// The validity predicate.
    pub fn predicate(&self) -> &P {
        &self.predicate
    }

    /// Number of completed steps (0 after construction).
    pub fn current_step(&self) -> StepId {
        self.step
    }

    /// Sum of all time steps so far.
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed
    }

    /// Metrics of the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Number of inside points.
    pub fn foreground_size(&self) -> usize {
        self.labels.foreground_size()
    }

    /// Consume the evolver and return the final labels.
    pub fn into_labels(self) -> LabelField {
        self.labels
    }
}

impl<S, P, T> fmt::Debug for FrontierEvolver<S, P, T>
where
    S: SpeedFunctor,
    P: ValidityPredicate,
    T: Topology,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrontierEvolver")
            .field("step", &self.step)
            .field("elapsed", &self.elapsed)
            .field("frontier", &self.tracker.len())
            .field("speed", &self.speed.name())
            .field("predicate", &self.predicate.name())
            .finish()
    }
}
