use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::input::InputError;
use crate::input::meta::{MetaError, load_metadata};
use crate::model::matrix::CountMatrix;
use crate::panels::PanelError;
use crate::panels::loader::load_pkc;

pub mod stage1_discover;
pub mod stage2_counts;
pub mod stage3_matrix;
pub mod stage4_output;

use stage1_discover::discover_dcc_files;
use stage2_counts::run_stage2;
use stage3_matrix::run_stage3;
use stage4_output::write_count_matrix;

pub const DEFAULT_OUTPUT: &str = "count_matrix.csv";

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Panel(#[from] PanelError),
    #[error(transparent)]
    Meta(#[from] MetaError),
    #[error("invalid glob pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("unreadable glob entry: {0}")]
    Glob(#[from] glob::GlobError),
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

impl MatrixError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        MatrixError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub dcc_pattern: String,
    pub pkc_path: PathBuf,
    pub meta_path: PathBuf,
    pub out_path: PathBuf,
}

/// Panel and metadata are loaded once; the output is only written after every
/// DCC file has been processed.
pub fn build_count_matrix(config: &RunConfig) -> Result<CountMatrix, MatrixError> {
    let probes = load_pkc(&config.pkc_path)?;
    let meta = load_metadata(&config.meta_path)?;
    let files = discover_dcc_files(&config.dcc_pattern)?;
    let stage2 = run_stage2(&files, &probes, &meta)?;
    Ok(run_stage3(&stage2.records))
}

pub fn run_pipeline(config: &RunConfig) -> Result<CountMatrix, MatrixError> {
    let matrix = build_count_matrix(config)?;
    write_count_matrix(&matrix, &config.out_path)?;
    Ok(matrix)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
