//! Excel/ODS compound table reader using calamine

use calamine::{Data, Range, Reader, open_workbook_auto};
use std::path::Path;
use tracing::debug;

use crate::error::LoadError;
use crate::normalize::to_subscript;
use crate::table::{ColumnNames, CompoundRecord, CompoundTable};

/// Options controlling which sheet and columns are read
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Worksheet to read; the first one when `None`
    pub sheet: Option<String>,
    pub columns: ColumnNames,
}

/// Read a compound table from a workbook file.
///
/// The first row of the sheet is the header row. Formulas are normalized to
/// subscript digits while loading.
pub fn read_compound_table<P: AsRef<Path>>(
    path: P,
    options: &ReadOptions,
) -> Result<CompoundTable, LoadError> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = workbook.sheet_names();
    let sheet_name = match &options.sheet {
        Some(name) => sheet_names
            .iter()
            .find(|s| *s == name)
            .cloned()
            .ok_or_else(|| LoadError::SheetNotFound(name.clone()))?,
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| LoadError::NoSheets(path.to_path_buf()))?,
    };

    debug!(path = %path.display(), sheet = %sheet_name, "Reading worksheet");

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|source| LoadError::Sheet {
            sheet: sheet_name.clone(),
            source,
        })?;

    table_from_range(&sheet_name, &range, &options.columns)
}

/// Build a compound table from a worksheet range whose first row holds the headers
pub fn table_from_range(
    sheet_name: &str,
    range: &Range<Data>,
    columns: &ColumnNames,
) -> Result<CompoundTable, LoadError> {
    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| LoadError::EmptySheet(sheet_name.to_string()))?;

    let name_col = find_column(header, &columns.name, sheet_name)?;
    let formula_col = find_column(header, &columns.formula, sheet_name)?;

    let mut records = Vec::new();
    for row in rows {
        // Only text names can equal a submitted query
        let Some(name) = row.get(name_col).and_then(name_text) else {
            continue;
        };
        let formula = row
            .get(formula_col)
            .and_then(cell_text)
            .map(|f| to_subscript(&f))
            .unwrap_or_default();
        records.push(CompoundRecord { name, formula });
    }

    debug!(sheet = %sheet_name, records = records.len(), "Parsed compound rows");

    Ok(CompoundTable::new(records))
}

fn find_column(header: &[Data], column: &str, sheet_name: &str) -> Result<usize, LoadError> {
    header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s == column))
        .ok_or_else(|| LoadError::MissingColumn {
            column: column.to_string(),
            sheet: sheet_name.to_string(),
        })
}

/// Name cell as a lookup key; blank, numeric and other non-text cells have none
fn name_text(data: &Data) -> Option<String> {
    match data {
        Data::String(s) => Some(s.clone()),
        _ => None,
    }
}

/// Text form of a cell, `None` for empty and error cells
fn cell_text(data: &Data) -> Option<String> {
    match data {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
