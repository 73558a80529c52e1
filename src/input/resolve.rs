use std::borrow::Cow;
use std::path::Path;

use crate::input::meta::{MetaError, SAMPLE_ID_COLUMN, SampleTable, load_metadata};

pub const NO_TEMPLATE_CONTROL: &str = "No Template Control";

const SLIDE_NAME_COLUMN: &str = "slide name";
const SCAN_NAME_COLUMN: &str = "scan name";
const SEGMENT_COLUMN: &str = "segment";
const GROUP_COLUMN: &str = "group";
const PANEL_COLUMN: &str = "panel";

/// Exactly one of `table` and `path` must be given.
fn metadata_source<'a>(
    table: Option<&'a SampleTable>,
    path: Option<&Path>,
) -> Result<Cow<'a, SampleTable>, MetaError> {
    match (table, path) {
        (Some(_), Some(_)) => Err(MetaError::AmbiguousSource),
        (None, None) => Err(MetaError::MissingSource),
        (Some(table), None) => Ok(Cow::Borrowed(table)),
        (None, Some(path)) => Ok(Cow::Owned(load_metadata(path)?)),
    }
}

fn sample_row<'t>(table: &'t SampleTable, sample_id: &str) -> Result<&'t [String], MetaError> {
    table
        .find_row(SAMPLE_ID_COLUMN, sample_id)?
        .ok_or_else(|| MetaError::SampleNotFound(sample_id.to_string()))
}

pub fn resolve_sample_name(
    sample_id: &str,
    table: Option<&SampleTable>,
    path: Option<&Path>,
) -> Result<String, MetaError> {
    let table = metadata_source(table, path)?;
    let row = sample_row(&table, sample_id)?;

    if table.field(row, SLIDE_NAME_COLUMN)? == NO_TEMPLATE_CONTROL {
        return Ok(NO_TEMPLATE_CONTROL.to_string());
    }

    let parts = [SCAN_NAME_COLUMN, SEGMENT_COLUMN, GROUP_COLUMN]
        .iter()
        .map(|col| table.field(row, col).map(|v| v.replace(' ', "-")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join("_"))
}

pub fn resolve_panel(
    sample_id: &str,
    table: Option<&SampleTable>,
    path: Option<&Path>,
) -> Result<String, MetaError> {
    let table = metadata_source(table, path)?;
    let row = sample_row(&table, sample_id)?;
    Ok(table.field(row, PANEL_COLUMN)?.to_string())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/resolve.rs"]
mod tests;
