//! `plane`: 2D evolution of a disk or of a PGM image.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use frontier::engine::RunBudget;
use frontier::io::{read_pgm_file, FileSink, ImageFormat};
use frontier::space::{ball_labels, DigitalTopology, GridDomain};
use frontier::types::LabelField;
use tracing::info;

use super::{evolve, write_samples, EvolutionArgs};

/// Snapshot format of the 2D driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlaneFormat {
    /// PGM image
    Raster,
    /// SVG drawing of the grid points and the interface
    Vector,
}

impl From<PlaneFormat> for ImageFormat {
    fn from(f: PlaneFormat) -> Self {
        match f {
            PlaneFormat::Raster => ImageFormat::Pgm,
            PlaneFormat::Vector => ImageFormat::Svg,
        }
    }
}

/// Arguments of the `plane` subcommand.
#[derive(Args, Debug)]
pub struct PlaneArgs {
    /// Binary PGM image of the starting interface (dark pixels inside)
    #[arg(short, long)]
    pub input_image: Option<PathBuf>,

    /// Domain size when starting from the default disk
    #[arg(short = 's', long, default_value = "64")]
    pub domain_size: u32,

    /// Maximum time of the evolution
    #[arg(short, long, default_value = "1.0")]
    pub time_bound: f64,

    /// Snapshot format
    #[arg(short = 'f', long, value_enum, default_value = "raster")]
    pub output_format: PlaneFormat,

    #[command(flatten)]
    pub evolution: EvolutionArgs,
}

/// The starting interface: a disk of diameter `3/5` of the domain centred
/// in `[0, size]²`.
pub fn default_disk(size: u32) -> Result<(GridDomain, LabelField)> {
    let top = i32::try_from(size).context("domain size")?;
    let domain = GridDomain::new(vec![0, 0].into(), vec![top, top].into())?;
    let c = f64::from(size / 2);
    let radius = f64::from(size * 3 / 5 / 2);
    Ok((domain.clone(), ball_labels(&domain, &[c, c], radius)))
}

/// Load the starting interface of a `plane` run.
pub fn starting_interface(args: &PlaneArgs) -> Result<(GridDomain, LabelField)> {
    match &args.input_image {
        Some(path) => {
            info!(image = %path.display(), "reading starting interface");
            let (domain, mut labels) = read_pgm_file(path)
                .with_context(|| format!("reading {}", path.display()))?;
            labels.invert();
            Ok((domain, labels))
        }
        None => {
            info!(size = args.domain_size, "starting interface initialized with a ball shape");
            default_disk(args.domain_size)
        }
    }
}

/// Run the `plane` subcommand.
pub fn execute(args: PlaneArgs) -> Result<()> {
    if !(args.time_bound.is_finite() && args.time_bound >= 0.0) {
        bail!("time bound must be a finite non-negative number, got {}", args.time_bound);
    }
    let config = args.evolution.evolver_config(None)?;
    let (domain, labels) = starting_interface(&args)?;
    let topology = DigitalTopology::standard(domain)?;

    let mut sink = FileSink::new(&args.evolution.output_files, args.output_format.into());
    let (summary, _) = evolve(
        topology,
        labels,
        &args.evolution,
        config,
        RunBudget::until(args.time_bound),
        &mut sink,
    )?;
    write_samples(&mut std::io::stdout().lock(), &summary)?;
    Ok(())
}
