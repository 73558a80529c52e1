use std::path::PathBuf;

use glob::glob;

use crate::pipeline::MatrixError;

/// Glob matches sorted by path so that column order does not depend on
/// directory enumeration.
pub fn discover_dcc_files(pattern: &str) -> Result<Vec<PathBuf>, MatrixError> {
    let entries = glob(pattern).map_err(|source| MatrixError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;
    let mut files = entries.collect::<Result<Vec<_>, _>>()?;
    files.retain(|path| path.is_file());
    files.sort();

    if files.is_empty() {
        tracing::warn!(pattern, "no DCC files matched");
    } else {
        tracing::info!(pattern, files = files.len(), "discovered DCC files");
    }
    Ok(files)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_discover.rs"]
mod tests;
