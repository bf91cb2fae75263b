//! Spreadsheet input
//!
//! Reads the catalog workbook (`Song`, `Sing`, `Delete Song`) and exposes
//! raw sheets to the reference loader. Cells are loosely typed; callers pick
//! an explicit accessor with a defined fallback for every field.

mod catalog;
mod cell;
mod reader;
mod sheet;

pub use catalog::{
    catalog_from_tables, read_catalog, read_delete_entries, DELETE_SHEET, SINGER_SHEET,
    SONG_SHEET,
};
pub use cell::Cell;
pub use reader::Workbook;
pub use sheet::{Record, Sheet, Table};
