//! Integration test: end-to-end evolution scenarios.

use std::f64::consts::PI;

use frontier_core::{LabelField, OUTSIDE};
use frontier_engine::{
    labels_hash, run, EvolveError, EvolverConfig, FrontierEvolver, MemorySink, RunBudget,
};
use frontier_policies::{
    AlwaysValid, BalloonSpeed, DistanceCurvatureSpeed, MeanCurvatureSpeed, PredicatePolicy,
    SimplePoint,
};
use frontier_space::{ball_labels, DigitalTopology, GridDomain};

fn disk(radius: f64) -> (DigitalTopology, LabelField) {
    let domain = GridDomain::with_extents(&[64, 64]).unwrap();
    let labels = ball_labels(&domain, &[32.0, 32.0], radius);
    (DigitalTopology::standard(domain).unwrap(), labels)
}

// ── Balloon ──────────────────────────────────────────────────────────

#[test]
fn disk_grows_monotonically_towards_the_dilated_disk() {
    let r = 10.0;
    let (topo, labels) = disk(r);
    let mut e = FrontierEvolver::seeded(
        topo,
        labels,
        BalloonSpeed::new(1.0).unwrap(),
        AlwaysValid,
        EvolverConfig::default(),
    )
    .unwrap();

    let mut area = e.foreground_size();
    let mut t = 0.0;
    while t < r - 1e-9 {
        let dt = e.update();
        assert!(dt > 0.0);
        t += dt;
        let now = e.foreground_size();
        assert!(now >= area, "area shrank from {area} to {now}");
        area = now;
    }

    let expected = PI * (r + t).powi(2);
    let ratio = area as f64 / expected;
    assert!(
        (0.8..1.15).contains(&ratio),
        "area {area} vs pi (r + t)^2 = {expected:.1} (t = {t})"
    );
}

#[test]
fn negative_balloon_shrinks_disk() {
    let (topo, labels) = disk(12.0);
    let before = labels.foreground_size();
    let mut e = FrontierEvolver::seeded(
        topo,
        labels,
        BalloonSpeed::new(-1.0).unwrap(),
        SimplePoint,
        EvolverConfig::default(),
    )
    .unwrap();
    for _ in 0..5 {
        e.update();
    }
    assert!(e.foreground_size() < before);
    assert!(e.foreground_size() > 0);
}

#[test]
fn zero_balloon_never_changes_labels() {
    for predicate in [PredicatePolicy::AlwaysValid, PredicatePolicy::SimplePoint] {
        let (topo, labels) = disk(9.0);
        let before = labels_hash(&labels);
        let mut e = FrontierEvolver::seeded(
            topo,
            labels,
            BalloonSpeed::new(0.0).unwrap(),
            predicate,
            EvolverConfig::default(),
        )
        .unwrap();
        for _ in 0..10 {
            assert_eq!(e.update(), 0.0);
            assert_eq!(labels_hash(e.labels()), before);
        }
    }
}

// ── Curvature ───────────────────────────────────────────────────────

#[test]
fn mean_curvature_shrinks_disk() {
    let (topo, labels) = disk(10.0);
    let before = labels.foreground_size();
    let mut e = FrontierEvolver::seeded(
        topo,
        labels,
        MeanCurvatureSpeed::builder().build().unwrap(),
        AlwaysValid,
        EvolverConfig::default(),
    )
    .unwrap();
    for _ in 0..30 {
        e.update();
    }
    assert!(
        e.foreground_size() < before,
        "area {} not below {before}",
        e.foreground_size()
    );
}

#[test]
fn distance_curvature_runs_in_3d() {
    let domain = GridDomain::with_extents(&[16, 16, 16]).unwrap();
    let labels = ball_labels(&domain, &[8.0, 8.0, 8.0], 5.0);
    let topo = DigitalTopology::standard(domain).unwrap();
    let mut e = FrontierEvolver::seeded(
        topo,
        labels,
        DistanceCurvatureSpeed::new(),
        SimplePoint,
        EvolverConfig::with_band_width(0.5),
    )
    .unwrap();
    for _ in 0..5 {
        let dt = e.update();
        assert!(dt * e.last_metrics().max_speed <= 0.5 + 1e-12);
    }
    assert!(e.foreground_size() > 0);
}

// ── Seed search ─────────────────────────────────────────────────────

#[test]
fn empty_image_has_no_seed() {
    let domain = GridDomain::with_extents(&[64, 64]).unwrap();
    let labels = LabelField::filled(domain.len(), OUTSIDE);
    let topo = DigitalTopology::standard(domain).unwrap();
    let err = FrontierEvolver::seeded(
        topo,
        labels,
        BalloonSpeed::new(1.0).unwrap(),
        AlwaysValid,
        EvolverConfig {
            search_budget: 500,
            ..EvolverConfig::default()
        },
    )
    .unwrap_err();
    assert_eq!(err, EvolveError::SeedNotFound { budget: 500 });
}

// ── Driver ──────────────────────────────────────────────────────────

#[test]
fn driver_records_frames_and_area_curve() {
    let (topo, labels) = disk(8.0);
    let mut e = FrontierEvolver::seeded(
        topo,
        labels,
        BalloonSpeed::new(1.0).unwrap(),
        AlwaysValid,
        EvolverConfig::default(),
    )
    .unwrap();
    let mut sink = MemorySink::new();
    let summary = run(&mut e, RunBudget::until(4.0), 2, &mut sink).unwrap();
    // dt = 1 each step: elapsed 0..=4 admits five updates.
    assert_eq!(summary.steps, 5);
    assert_eq!(summary.frames as usize, sink.frames.len());
    assert_eq!(sink.frames[0].0, 1);
    assert_eq!(sink.frames.last().map(|f| f.0), Some(3));
    let areas: Vec<usize> = summary.samples.iter().map(|s| s.1).collect();
    assert!(areas.windows(2).all(|w| w[0] <= w[1]));
    // Frame 3 was taken after step 4, before the last update.
    assert_eq!(sink.frames[2].1.foreground_size(), areas[4]);
    assert!(areas[5] > areas[4]);
}
