use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::pipeline::{DEFAULT_OUTPUT, RunConfig};

#[derive(Debug, Parser)]
#[command(
    name = "kira-dspmatrix",
    version,
    about = "Build a gene x sample count matrix from GeoMx DSP DCC files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Panel(PanelArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Glob pattern selecting DCC files, e.g. 'DCC/*.dcc'")]
    pub dcc: String,

    #[arg(long, help = "Probe panel configuration (PKC JSON)")]
    pub pkc: PathBuf,

    #[arg(long, help = "Sample sheet: lab worksheet (.txt) or CSV")]
    pub meta: PathBuf,

    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub out: PathBuf,
}

#[derive(Debug, Args)]
pub struct PanelArgs {
    #[arg(long, help = "Sample sheet: lab worksheet (.txt) or CSV")]
    pub meta: PathBuf,

    #[arg(long)]
    pub sample_id: String,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        RunConfig {
            dcc_pattern: args.dcc,
            pkc_path: args.pkc,
            meta_path: args.meta,
            out_path: args.out,
        }
    }
}
