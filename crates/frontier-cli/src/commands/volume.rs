//! `volume`: 3D evolution of a `.vol` image.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use frontier::engine::RunBudget;
use frontier::io::{read_vol_file, FileSink, ImageFormat};
use frontier::space::DigitalTopology;
use tracing::info;

use super::{evolve, write_samples, EvolutionArgs};

/// Snapshot format of the 3D driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VolumeFormat {
    /// PGM image of the central section
    Pgm,
    /// Whole volume
    Vol,
}

impl From<VolumeFormat> for ImageFormat {
    fn from(f: VolumeFormat) -> Self {
        match f {
            VolumeFormat::Pgm => ImageFormat::Pgm,
            VolumeFormat::Vol => ImageFormat::Vol,
        }
    }
}

/// Arguments of the `volume` subcommand.
#[derive(Args, Debug)]
pub struct VolumeArgs {
    /// Binary vol image of the starting interface (non-zero voxels inside)
    #[arg(short, long)]
    pub input_image: PathBuf,

    /// Upper bound on each time step
    #[arg(short, long, default_value = "1.0")]
    pub time_step: f64,

    /// Maximal number of steps
    #[arg(short = 'n', long, default_value = "1")]
    pub steps_number: u64,

    /// Snapshot format
    #[arg(short = 'f', long, value_enum, default_value = "pgm")]
    pub output_format: VolumeFormat,

    #[command(flatten)]
    pub evolution: EvolutionArgs,
}

/// Run the `volume` subcommand.
pub fn execute(args: VolumeArgs) -> Result<()> {
    let config = args.evolution.evolver_config(Some(args.time_step))?;
    info!(image = %args.input_image.display(), "reading starting interface");
    let (domain, labels) = read_vol_file(&args.input_image)
        .with_context(|| format!("reading {}", args.input_image.display()))?;
    let topology = DigitalTopology::standard(domain)?;

    let mut sink = FileSink::new(&args.evolution.output_files, args.output_format.into());
    let (summary, _) = evolve(
        topology,
        labels,
        &args.evolution,
        config,
        RunBudget::Steps(args.steps_number),
        &mut sink,
    )?;
    write_samples(&mut std::io::stdout().lock(), &summary)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use frontier::io::write_vol_file;
    use frontier::space::{ball_labels, GridDomain};

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: VolumeArgs,
    }

    fn parse(argv: &[&str]) -> Result<VolumeArgs, clap::Error> {
        let mut full = vec!["volume"];
        full.extend_from_slice(argv);
        Harness::try_parse_from(full).map(|h| h.args)
    }

    #[test]
    fn input_image_is_required() {
        assert!(parse(&[]).is_err());
        let args = parse(&["-i", "ball.vol"]).unwrap();
        assert_eq!(args.steps_number, 1);
        assert_eq!(args.time_step, 1.0);
        assert_eq!(args.output_format, VolumeFormat::Pgm);
    }

    #[test]
    fn time_step_caps_the_step() {
        let args = parse(&["-i", "ball.vol", "-t", "0.25"]).unwrap();
        let config = args.evolution.evolver_config(Some(args.time_step)).unwrap();
        assert_eq!(config.max_time_step, Some(0.25));
        let bad = parse(&["-i", "ball.vol", "-t", "0"]).unwrap();
        assert!(bad.evolution.evolver_config(Some(bad.time_step)).is_err());
    }

    #[test]
    fn ball_volume_run_writes_vol_frames() {
        let dir = std::env::temp_dir().join(format!("frontier-cli-volume-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let input = dir.join("ball.vol");
        let domain = GridDomain::with_extents(&[12, 12, 12]).unwrap();
        write_vol_file(&input, &domain, &ball_labels(&domain, &[6.0, 6.0, 6.0], 3.0)).unwrap();

        let input_arg = input.to_string_lossy().into_owned();
        let base_arg = dir.join("out").to_string_lossy().into_owned();
        let args = parse(&[
            "-i", &input_arg, "-n", "2", "-f", "vol", "--speed", "balloon", "-k", "1", "-o",
            &base_arg,
        ])
        .unwrap();
        execute(args).unwrap();

        for frame in 1..=3 {
            assert!(dir.join(format!("out{frame:04}.vol")).exists(), "frame {frame}");
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
