use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use crate::model::matrix::CountMatrix;
use crate::pipeline::MatrixError;

/// Header is an empty corner cell then sample names; each row is a gene name
/// then counts, with absent counts left empty.
pub fn write_count_matrix(matrix: &CountMatrix, path: &Path) -> Result<(), MatrixError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| MatrixError::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| MatrixError::io(path, e))?;
    let mut w = csv::Writer::from_writer(BufWriter::new(file));

    let mut header = Vec::with_capacity(matrix.samples.len() + 1);
    header.push(String::new());
    header.extend(matrix.samples.iter().cloned());
    w.write_record(&header)?;

    for (gene, row) in matrix.genes.iter().zip(&matrix.cells) {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(gene.clone());
        record.extend(row.iter().map(|cell| cell.map(|v| v.to_string()).unwrap_or_default()));
        w.write_record(&record)?;
    }

    w.flush().map_err(|e| MatrixError::io(path, e))?;
    tracing::info!(
        file = %path.display(),
        genes = matrix.genes.len(),
        samples = matrix.samples.len(),
        "count matrix written"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_output.rs"]
mod tests;
