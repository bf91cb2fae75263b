//! Workbook access through calamine

use super::sheet::Sheet;
use crate::error::ExportError;
use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// An open `.xlsx`/`.xls` workbook
pub struct Workbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

impl Workbook {
    /// Open a workbook, detecting its format from the extension
    pub fn open(path: &Path) -> Result<Self> {
        let sheets = open_workbook_auto(path)
            .with_context(|| format!("Failed to open workbook: {:?}", path))?;

        Ok(Self {
            path: path.to_path_buf(),
            sheets,
        })
    }

    /// Whether a sheet with this exact name exists
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.sheet_names().iter().any(|s| s == name)
    }

    /// Read a whole sheet into a grid anchored at A1
    pub fn sheet(&mut self, name: &str) -> Result<Sheet> {
        if !self.has_sheet(name) {
            return Err(ExportError::MissingSheet {
                workbook: self.path.clone(),
                sheet: name.to_string(),
            }
            .into());
        }

        let range = self
            .sheets
            .worksheet_range(name)
            .with_context(|| format!("Failed to read sheet '{}' from {:?}", name, self.path))?;

        log::debug!(
            "Read sheet '{}': {} rows x {} columns",
            name,
            range.height(),
            range.width()
        );

        Ok(Sheet::from_range(name, &range))
    }
}
