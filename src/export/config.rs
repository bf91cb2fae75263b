//! Export configuration

use std::path::{Path, PathBuf};

/// Default location of the reference workbook, relative to the working directory
pub const DEFAULT_REFERENCE_PATH: &str = "Reference/Reference.xlsx";

/// Configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Input workbook with the `Song`, `Sing` and optional `Delete Song` sheets
    pub input: PathBuf,

    /// Reference workbook with the `Reference`, `Ref2` and `RefSing` sheets
    pub reference: PathBuf,

    /// Directory the six artifacts are written to
    pub output_dir: PathBuf,

    /// Only export the first N song rows (None = all)
    pub row_limit: Option<usize>,
}

impl ExportConfig {
    /// Create a configuration that writes next to the input workbook
    pub fn new(input: PathBuf) -> Self {
        let output_dir = input
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Self {
            input,
            reference: PathBuf::from(DEFAULT_REFERENCE_PATH),
            output_dir,
            row_limit: None,
        }
    }

    /// Use a different reference workbook
    pub fn with_reference(mut self, reference: PathBuf) -> Self {
        self.reference = reference;
        self
    }

    /// Write artifacts to a different directory
    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Cap the number of exported song rows
    pub fn with_row_limit(mut self, limit: usize) -> Self {
        self.row_limit = Some(limit);
        self
    }
}
