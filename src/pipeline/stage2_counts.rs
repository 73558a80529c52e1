use std::path::PathBuf;

use crate::input::dcc::load_dcc_counts;
use crate::input::meta::SampleTable;
use crate::input::resolve::resolve_sample_name;
use crate::input::sample_id_from_path;
use crate::model::counts::{SampleCounts, SkipTally};
use crate::panels::ProbeMap;
use crate::pipeline::MatrixError;

#[derive(Debug)]
pub struct Stage2Output {
    pub records: Vec<SampleCounts>,
    pub skipped: SkipTally,
}

pub fn run_stage2(
    files: &[PathBuf],
    probes: &ProbeMap,
    meta: &SampleTable,
) -> Result<Stage2Output, MatrixError> {
    let mut records = Vec::with_capacity(files.len());
    let mut skipped = SkipTally::default();

    for path in files {
        let counts = load_dcc_counts(path, probes)?;
        let sample_id = sample_id_from_path(path)?;
        let sample_name = resolve_sample_name(&sample_id, Some(meta), None)?;

        skipped.merge(&counts.skipped);
        let record = SampleCounts {
            sample_id,
            sample_name,
            genes: counts.genes,
        };
        tracing::debug!(
            sample_id = %record.sample_id,
            sample_name = %record.sample_name,
            genes = record.genes.len(),
            "sample resolved"
        );
        records.push(record);
    }

    if skipped.total() > 0 {
        tracing::info!(
            malformed = skipped.malformed,
            unknown_probe = skipped.unknown_probe,
            bad_count = skipped.bad_count,
            overflow = skipped.overflow,
            "skipped count lines"
        );
    }

    Ok(Stage2Output { records, skipped })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_counts.rs"]
mod tests;
