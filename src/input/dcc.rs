use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::input::{InputError, read_to_string_maybe_gz};
use crate::model::counts::{DccCounts, LineOutcome, SkipReason};
use crate::panels::ProbeMap;

lazy_static! {
    static ref CODE_SUMMARY: Regex =
        Regex::new(r"(?s)<Code_Summary>(.*?)</Code_Summary>").unwrap();
}

pub fn load_dcc_counts(path: &Path, probes: &ProbeMap) -> Result<DccCounts, InputError> {
    let content = read_to_string_maybe_gz(path)?;
    let block = code_summary_block(&content).ok_or_else(|| {
        InputError::Parse(format!(
            "{}: no <Code_Summary> block",
            path.display()
        ))
    })?;
    let counts = sum_code_summary(block, probes);
    tracing::debug!(
        file = %path.display(),
        genes = counts.genes.len(),
        malformed = counts.skipped.malformed,
        unknown_probe = counts.skipped.unknown_probe,
        bad_count = counts.skipped.bad_count,
        overflow = counts.skipped.overflow,
        "dcc counts extracted"
    );
    Ok(counts)
}

pub fn code_summary_block(content: &str) -> Option<&str> {
    CODE_SUMMARY
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// A line whose count would overflow its gene's total is skipped and the
/// total keeps its previous value.
pub fn sum_code_summary(block: &str, probes: &ProbeMap) -> DccCounts {
    let mut out = DccCounts::default();
    for line in block.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match classify_line(line, probes) {
            LineOutcome::Count { gene, count } => {
                let total = out.genes.entry(gene.to_string()).or_insert(0);
                match total.checked_add(count) {
                    Some(sum) => *total = sum,
                    None => out.skipped.record(SkipReason::Overflow),
                }
            }
            LineOutcome::Skip(reason) => out.skipped.record(reason),
        }
    }
    out
}

pub fn classify_line<'a>(line: &str, probes: &'a ProbeMap) -> LineOutcome<'a> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 2 {
        return LineOutcome::Skip(SkipReason::Malformed);
    }
    let Some(gene) = probes.gene_for(fields[0].trim()) else {
        return LineOutcome::Skip(SkipReason::UnknownProbe);
    };
    match fields[1].trim().parse::<u64>() {
        Ok(count) => LineOutcome::Count { gene, count },
        Err(_) => LineOutcome::Skip(SkipReason::BadCount),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/dcc.rs"]
mod tests;
