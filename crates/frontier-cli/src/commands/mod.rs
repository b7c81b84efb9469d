//! Subcommands and the options they share.

pub mod plane;
pub mod volume;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use frontier::engine::{run, EvolverConfig, FrontierEvolver, RunBudget, RunSummary, SnapshotSink};
use frontier::policies::{
    BalloonSpeed, DistanceCurvatureSpeed, MeanCurvatureSpeed, PredicatePolicy, SpeedPolicy,
};
use frontier::space::DigitalTopology;
use frontier::types::LabelField;
use tracing::{info, warn};

/// Speed functor selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SpeedKind {
    /// Constant normal force `k`
    Balloon,
    /// Mean curvature motion plus `k`
    Mcm,
    /// Laplacian of the level function
    DtCurvature,
}

/// Validity predicate selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PredicateKind {
    /// Accept every flip
    Always,
    /// Accept only simple points (topology preserving)
    Simple,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct EvolutionArgs {
    /// Number of iterations between two snapshots
    #[arg(short, long, default_value = "1")]
    pub display_step: u64,

    /// Width of the flipping band, in (0, 1] [default: 1.0]
    #[arg(short = 'w', long)]
    pub band_width: Option<f64>,

    /// Balloon force
    #[arg(short = 'k', long, default_value = "0.0", allow_negative_numbers = true)]
    pub balloon_force: f64,

    /// Output files basename
    #[arg(short, long, default_value = "interface")]
    pub output_files: PathBuf,

    /// Speed functor
    #[arg(long, value_enum, default_value = "mcm")]
    pub speed: SpeedKind,

    /// Validity predicate
    #[arg(long, value_enum, default_value = "always")]
    pub predicate: PredicateKind,

    /// JSON run file holding an evolver configuration
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl EvolutionArgs {
    /// Evolver configuration: the run file (if any) overridden by flags,
    /// validated before any evolver is built.
    pub fn evolver_config(&self, max_time_step: Option<f64>) -> Result<EvolverConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading run file {}", path.display()))?;
                serde_json::from_str::<EvolverConfig>(&text)
                    .with_context(|| format!("parsing run file {}", path.display()))?
            }
            None => EvolverConfig::default(),
        };
        if let Some(w) = self.band_width {
            config.band_width = w;
        }
        if max_time_step.is_some() {
            config.max_time_step = max_time_step;
        }
        config.validate().context("invalid evolver configuration")?;
        Ok(config)
    }

    /// The selected speed functor.
    pub fn speed_policy(&self) -> Result<SpeedPolicy> {
        let k = self.balloon_force;
        let speed = match self.speed {
            SpeedKind::Balloon => BalloonSpeed::new(k).context("balloon force")?.into(),
            SpeedKind::Mcm => MeanCurvatureSpeed::builder()
                .balloon(k)
                .build()
                .context("mean curvature speed")?
                .into(),
            SpeedKind::DtCurvature => {
                if k != 0.0 {
                    warn!(balloon_force = k, "balloon force is ignored by dt-curvature");
                }
                DistanceCurvatureSpeed::new().into()
            }
        };
        Ok(speed)
    }

    /// The selected validity predicate.
    pub fn predicate_policy(&self) -> PredicatePolicy {
        match self.predicate {
            PredicateKind::Always => PredicatePolicy::AlwaysValid,
            PredicateKind::Simple => PredicatePolicy::SimplePoint,
        }
    }
}

/// Build the evolver and drive it, returning the run summary.
pub fn evolve<K>(
    topology: DigitalTopology,
    labels: LabelField,
    args: &EvolutionArgs,
    config: EvolverConfig,
    budget: RunBudget,
    sink: &mut K,
) -> Result<(RunSummary, LabelField)>
where
    K: SnapshotSink,
{
    let speed = args.speed_policy()?;
    let predicate = args.predicate_policy();
    let mut evolver = FrontierEvolver::seeded(topology, labels, speed, predicate, config)
        .context("starting the evolution")?;
    let summary = run(&mut evolver, budget, args.display_step, sink)
        .context("writing snapshots")?;
    info!(
        steps = summary.steps,
        elapsed = summary.elapsed,
        frames = summary.frames,
        "total time spent: {}",
        summary.elapsed
    );
    Ok((summary, evolver.into_labels()))
}

/// Print `(time, area)` samples, one per line, under a comment header.
pub fn write_samples(out: &mut dyn Write, summary: &RunSummary) -> Result<()> {
    writeln!(out, "# time computed area")?;
    for (t, area) in &summary.samples {
        writeln!(out, "{t} {area}")?;
    }
    Ok(())
}
