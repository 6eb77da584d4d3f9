//! it8 - Inspect and write color calibration files
//!
//! Reads and writes TI1 target charts, TI3 measurement results and CCMX
//! correction matrices.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "it8")]
#[command(author, version, about = "Inspect and write TI1/TI3/CCMX calibration files")]
#[command(long_about = "
Reads and writes CGATS calibration files: TI1 target charts, TI3 measured
results and CCMX device correction matrices.

Examples:
  it8 info display.ti3                   # Kind, metadata and sample count
  it8 info *.ccmx --json                 # Machine-readable summary
  it8 dump display.ti3                   # All readings, absolute values
  it8 normalize raw.ti3 -o norm.ti3      # Re-save normalized to Y=100
  it8 normalize norm.ti3 -o raw.ti3 --off
  it8 ccmx huey.ccmx --matrix 1,0,0,0,1,0,0,0,1 --instrument Huey
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show calibration file information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Print every reading or the correction matrix
    #[command(visible_alias = "d")]
    Dump(DumpArgs),

    /// Re-save a TI1/TI3 file with normalization switched on or off
    #[command(visible_alias = "n")]
    Normalize(NormalizeArgs),

    /// Create a CCMX correction matrix file
    Ccmx(CcmxArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input calibration file(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct DumpArgs {
    /// Input calibration file
    input: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct NormalizeArgs {
    /// Input TI1/TI3 file
    input: PathBuf,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Write absolute readings instead of normalized ones
    #[arg(long)]
    off: bool,
}

#[derive(Args)]
struct CcmxArgs {
    /// Output CCMX file
    output: PathBuf,

    /// Matrix values, row-major: m00,m01,m02,m10,m11,m12,m20,m21,m22
    #[arg(short, long, required = true, value_delimiter = ',', allow_negative_numbers = true)]
    matrix: Vec<f64>,

    /// Instrument the matrix corrects
    #[arg(long)]
    instrument: Option<String>,

    /// Originator written to the file
    #[arg(long)]
    originator: Option<String>,

    /// Display or reference the matrix was measured against
    #[arg(long)]
    reference: Option<String>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose > 0),
        Commands::Dump(args) => commands::dump::run(args),
        Commands::Normalize(args) => commands::normalize::run(args),
        Commands::Ccmx(args) => commands::ccmx::run(args),
    }
}
