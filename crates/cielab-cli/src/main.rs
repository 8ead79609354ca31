//! cielab - CIE Lab <-> XYZ (D65) converter
//!
//! Converts single colors given on the command line, or streams of colors
//! read from a file or stdin.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "cielab")]
#[command(author, version, about = "CIE Lab <-> XYZ (D65) converter")]
#[command(long_about = "
Converts colors between CIE Lab and CIE XYZ using the D65 reference white
(95.047, 100, 108.883). Alpha is passed through unchanged and defaults to 1.

Examples:
  cielab to-xyz 53.24 80.09 67.2             # Lab -> XYZ
  cielab to-lab 95.047 100 108.883 --alpha 0.5
  cielab convert --to lab -i colors.txt      # one 'X Y Z [alpha]' per line
  cat lab.txt | cielab convert --to xyz -p 6
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging; RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Decimal places in printed values
    #[arg(short, long, global = true, default_value = "4")]
    precision: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one Lab color to XYZ
    #[command(name = "to-xyz", visible_alias = "x")]
    ToXyz(ToXyzArgs),

    /// Convert one XYZ color to Lab
    #[command(name = "to-lab", visible_alias = "l")]
    ToLab(ToLabArgs),

    /// Convert a list of colors, one per line
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),
}

/// Arguments for the `to-xyz` command.
#[derive(Args, Debug)]
struct ToXyzArgs {
    /// Lightness (0..100)
    #[arg(allow_negative_numbers = true)]
    l: f64,

    /// Green-red axis
    #[arg(allow_negative_numbers = true)]
    a: f64,

    /// Blue-yellow axis
    #[arg(allow_negative_numbers = true)]
    b: f64,

    /// Alpha (defaults to 1)
    #[arg(long, allow_negative_numbers = true)]
    alpha: Option<f64>,
}

/// Arguments for the `to-lab` command.
#[derive(Args, Debug)]
struct ToLabArgs {
    /// X tristimulus (0..100 scale)
    #[arg(allow_negative_numbers = true)]
    x: f64,

    /// Y tristimulus (0..100 scale)
    #[arg(allow_negative_numbers = true)]
    y: f64,

    /// Z tristimulus (0..100 scale)
    #[arg(allow_negative_numbers = true)]
    z: f64,

    /// Alpha (defaults to 1)
    #[arg(long, allow_negative_numbers = true)]
    alpha: Option<f64>,
}

/// Arguments for the `convert` command.
#[derive(Args, Debug)]
struct ConvertArgs {
    /// Target space
    #[arg(short, long, value_enum)]
    to: Target,

    /// Input file (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,
}

/// Conversion direction for `convert`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Target {
    /// Input is Lab, output XYZ
    Xyz,
    /// Input is XYZ, output Lab
    Lab,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::ToXyz(args) => commands::single::run_to_xyz(args, cli.precision),
        Commands::ToLab(args) => commands::single::run_to_lab(args, cli.precision),
        Commands::Convert(args) => commands::convert::run(args, cli.precision),
    }
}
