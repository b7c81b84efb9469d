//! Benchmark profiles for frontier evolution.
//!
//! - [`disk_profile`]: a disk of radius `size / 4` centred in a `size²` plane
//! - [`sphere_profile`]: the same in a `size³` volume
//! - [`balloon_evolver`]: a ready-to-step unit balloon evolver over a profile
//!
//! Profiles are fixed, valid configurations; builders panic on failure.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use frontier_core::LabelField;
use frontier_engine::{EvolverConfig, FrontierEvolver};
use frontier_policies::{BalloonSpeed, PredicatePolicy};
use frontier_space::{ball_labels, DigitalTopology, GridDomain};

/// A profile: the topology substrate and the initial labels.
pub type Profile = (DigitalTopology, LabelField);

fn centred_ball(extents: &[u32]) -> Profile {
    let domain = GridDomain::with_extents(extents).expect("profile extents are valid");
    let size = f64::from(extents[0]);
    let centre = vec![size / 2.0; extents.len()];
    let labels = ball_labels(&domain, &centre, size / 4.0);
    let topology = DigitalTopology::standard(domain).expect("2D/3D standard pair");
    (topology, labels)
}

/// A centred disk of radius `size / 4` in a `size × size` plane.
pub fn disk_profile(size: u32) -> Profile {
    centred_ball(&[size, size])
}

/// A centred ball of radius `size / 4` in a `size³` volume.
pub fn sphere_profile(size: u32) -> Profile {
    centred_ball(&[size, size, size])
}

/// Unit balloon evolver over `profile`.
pub fn balloon_evolver(
    profile: Profile,
    predicate: PredicatePolicy,
) -> FrontierEvolver<BalloonSpeed, PredicatePolicy> {
    let (topology, labels) = profile;
    let speed = BalloonSpeed::new(1.0).expect("unit force is finite");
    FrontierEvolver::seeded(topology, labels, speed, predicate, EvolverConfig::default())
        .expect("profile has a foreground boundary")
}
