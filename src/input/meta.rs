use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use thiserror::Error;

use crate::input::{InputError, open_maybe_gz};

pub const SAMPLE_ID_COLUMN: &str = "Sample_ID";
const HEADER_PREFIX: &str = "Sample_ID";
const ROW_PREFIX: &str = "DSP";

#[derive(Debug, Error)]
pub enum MetaError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("{path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: data row at line {line} precedes the Sample_ID header")]
    RowBeforeHeader { path: String, line: usize },
    #[error("{path}: second Sample_ID header at line {line}")]
    DuplicateHeader { path: String, line: usize },
    #[error("{path}: no Sample_ID header row")]
    MissingHeader { path: String },
    #[error("{path}: line {line} has {found} fields, header has {expected}")]
    FieldCount {
        path: String,
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("metadata has no column {0:?}")]
    MissingColumn(String),
    #[error("sample {0:?} not found in metadata")]
    SampleNotFound(String),
    #[error("either a metadata file or a metadata table must be given, not both")]
    AmbiguousSource,
    #[error("either a metadata file or a metadata table must be given")]
    MissingSource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SampleTable {
    pub fn column_index(&self, name: &str) -> Result<usize, MetaError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| MetaError::MissingColumn(name.to_string()))
    }

    /// First row whose `column` equals `value`.
    pub fn find_row(&self, column: &str, value: &str) -> Result<Option<&[String]>, MetaError> {
        let idx = self.column_index(column)?;
        Ok(self
            .rows
            .iter()
            .find(|row| row.get(idx).is_some_and(|v| v == value))
            .map(Vec::as_slice))
    }

    pub fn field<'a>(&self, row: &'a [String], column: &str) -> Result<&'a str, MetaError> {
        let idx = self.column_index(column)?;
        Ok(row.get(idx).map(String::as_str).unwrap_or(""))
    }
}

/// `.txt` (or `.txt.gz`) selects the lab worksheet layout, anything else is
/// read as CSV.
pub fn load_metadata(path: &Path) -> Result<SampleTable, MetaError> {
    let table = if is_worksheet(path) {
        load_lab_worksheet(path)?
    } else {
        load_sample_csv(path)?
    };
    warn_duplicate_ids(&table);
    tracing::info!(
        file = %path.display(),
        columns = table.columns.len(),
        rows = table.rows.len(),
        "metadata loaded"
    );
    Ok(table)
}

fn is_worksheet(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    Path::new(name).extension().is_some_and(|ext| ext == "txt")
}

pub fn load_lab_worksheet(path: &Path) -> Result<SampleTable, MetaError> {
    let reader = open_maybe_gz(path)?;
    let path_str = path.display().to_string();
    let mut header: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| InputError::io(path, e))?;
        let line_no = idx + 1;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            continue;
        }

        if line.starts_with(HEADER_PREFIX) {
            if header.is_some() {
                return Err(MetaError::DuplicateHeader {
                    path: path_str,
                    line: line_no,
                });
            }
            header = Some(line.split('\t').map(str::to_string).collect());
        } else if line.starts_with(ROW_PREFIX) {
            let Some(columns) = &header else {
                return Err(MetaError::RowBeforeHeader {
                    path: path_str,
                    line: line_no,
                });
            };
            let row = expand_worksheet_row(line);
            if row.len() != columns.len() {
                return Err(MetaError::FieldCount {
                    path: path_str,
                    line: line_no,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
            rows.push(row);
        }
    }

    let columns = header.ok_or(MetaError::MissingHeader { path: path_str })?;
    Ok(SampleTable { columns, rows })
}

/// The worksheet joins scan name and segment with a space in the second
/// field; split it back into separate columns.
pub fn expand_worksheet_row(line: &str) -> Vec<String> {
    let mut row = Vec::new();
    for (i, field) in line.split('\t').enumerate() {
        if i == 1 {
            row.extend(field.split(' ').map(str::to_string));
        } else {
            row.push(field.to_string());
        }
    }
    row
}

pub fn load_sample_csv(path: &Path) -> Result<SampleTable, MetaError> {
    let reader = open_maybe_gz(path)?;
    let csv_err = |source: csv::Error| MetaError::Csv {
        path: path.display().to_string(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(SampleTable { columns, rows })
}

fn warn_duplicate_ids(table: &SampleTable) {
    let Ok(idx) = table.column_index(SAMPLE_ID_COLUMN) else {
        return;
    };
    let mut seen = HashSet::new();
    for row in &table.rows {
        let Some(id) = row.get(idx) else { continue };
        if !seen.insert(id.as_str()) {
            tracing::warn!(sample_id = %id, "duplicate sample id in metadata; keeping first");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/meta.rs"]
mod tests;
