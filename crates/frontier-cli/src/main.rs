//! Frontier command-line drivers.
//!
//! `frontier plane` evolves a 2D interface (a centred disk or a PGM image),
//! `frontier volume` a 3D one read from a `.vol` file. Both print
//! `time area` samples on stdout and write numbered snapshots.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Narrow-band digital frontier evolution
#[derive(Parser)]
#[command(name = "frontier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Narrow-band evolution of digital interfaces", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evolve a 2D interface
    Plane(commands::plane::PlaneArgs),
    /// Evolve a 3D interface read from a vol file
    Volume(commands::volume::VolumeArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr; stdout carries the samples.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Plane(args) => commands::plane::execute(args),
        Commands::Volume(args) => commands::volume::execute(args),
    }
}
