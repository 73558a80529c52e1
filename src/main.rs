mod cli;
mod input;
mod logging;
mod model;
mod panels;
mod pipeline;

use clap::Parser;

use crate::cli::{Cli, Commands, PanelArgs};
use crate::input::resolve::resolve_panel;
use crate::pipeline::{MatrixError, RunConfig, run_pipeline};

fn main() {
    logging::init_logging();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), MatrixError> {
    match cli.command {
        Commands::Run(args) => {
            let config = RunConfig::from(args);
            tracing::info!(
                dcc = %config.dcc_pattern,
                pkc = %config.pkc_path.display(),
                meta = %config.meta_path.display(),
                "building count matrix"
            );
            run_pipeline(&config)?;
        }
        Commands::Panel(PanelArgs { meta, sample_id }) => {
            let panel = resolve_panel(&sample_id, None, Some(meta.as_path()))?;
            println!("{panel}");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
