use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use ribo_algos::Precision;

#[derive(Parser)]
#[command(
    name = "ribo-align",
    about = "Anchor-based superposition of molecular structures",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Move the first frame's centroid to the origin
    Center {
        /// Input trajectory (.xyz or .xyz.gz)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (default: <INPUT>_centered.xyz)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Rotate an incoming structure onto a reference structure
    Align {
        /// Structure to move
        #[arg(value_name = "INCOMING")]
        incoming: PathBuf,

        /// Structure to hold fixed
        #[arg(value_name = "REFERENCE")]
        reference: PathBuf,

        /// Output file (default: <INCOMING>_aligned.xyz)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Anchor atom label
        #[arg(long = "anchor", value_name = "LABEL")]
        anchor: Option<String>,

        /// Arithmetic for applying the rotation
        #[arg(long, value_name = "MODE")]
        precision: Option<PrecisionArg>,

        /// TOML settings file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Skip centering both structures before fitting
        #[arg(long)]
        no_center: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PrecisionArg {
    /// Native f64 arithmetic
    Native,
    /// Exact decimal accumulation
    Decimal,
}

impl From<PrecisionArg> for Precision {
    fn from(arg: PrecisionArg) -> Self {
        match arg {
            PrecisionArg::Native => Precision::Native,
            PrecisionArg::Decimal => Precision::Decimal,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
