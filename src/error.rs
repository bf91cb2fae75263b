//! Typed failures that abort an export run

use std::path::PathBuf;
use thiserror::Error;

/// Sheet- and file-level errors.
///
/// Per-cell problems never show up here: they degrade to the documented
/// sentinel values at the point of lookup.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("reference workbook not found at: {0:?}")]
    MissingReference(PathBuf),

    #[error("sheet '{sheet}' not found in {workbook:?}")]
    MissingSheet { workbook: PathBuf, sheet: String },

    #[error("sheet '{sheet}' has no '{column}' column")]
    MissingColumn { sheet: String, column: String },

    #[error("genre marker '{0}' not found in the reference header row")]
    MissingGenreMarker(String),
}
