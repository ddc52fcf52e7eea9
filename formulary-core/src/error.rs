//! Errors raised while loading a compound table

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open workbook {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Workbook {} contains no worksheets", .0.display())]
    NoSheets(PathBuf),

    #[error("Worksheet '{0}' not found in workbook")]
    SheetNotFound(String),

    #[error("Failed to read worksheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("Worksheet '{0}' has no header row")]
    EmptySheet(String),

    #[error("Column '{column}' not found in worksheet '{sheet}'")]
    MissingColumn { column: String, sheet: String },
}
