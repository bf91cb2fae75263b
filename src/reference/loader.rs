//! Shaping the raw reference workbook into lookup tables

use super::tables::ReferenceTables;
use crate::error::ExportError;
use crate::workbook::{Sheet, Table, Workbook};
use anyhow::{Context, Result};
use std::ops::Range;
use std::path::Path;

pub const REFERENCE_SHEET: &str = "Reference";
pub const LANGUAGE_SHEET: &str = "Ref2";
pub const SINGER_TYPE_SHEET: &str = "RefSing";

/// Header label marking the genre (name, id) column pair
pub const GENRE_MARKER: &str = "SongTypeID Convert";

/// Rows of the `Reference` sheet holding the volume block (row 0 is a header)
const VOLUME_ROWS: Range<usize> = 1..30;
const VOLUME_SOURCE_COL: usize = 0;
const VOLUME_TARGET_COL: usize = 1;

/// Rows of the `Reference` sheet holding the genre block
const GENRE_ROWS: Range<usize> = 1..70;

const LANGUAGE_SOURCE_COL: usize = 0;
const LANGUAGE_TARGET_COL: usize = 1;

/// Load and shape all reference tables from the reference workbook
pub fn load_reference(path: &Path) -> Result<ReferenceTables> {
    if !path.exists() {
        return Err(ExportError::MissingReference(path.to_path_buf()).into());
    }

    log::info!("Loading reference tables from {:?}", path);
    let mut workbook = Workbook::open(path)?;

    let reference = workbook.sheet(REFERENCE_SHEET)?;
    let languages = workbook.sheet(LANGUAGE_SHEET)?;
    let singer_types = Table::from_sheet(workbook.sheet(SINGER_TYPE_SHEET)?);

    let tables = build_reference(&reference, &languages, &singer_types)
        .with_context(|| format!("Failed to shape reference workbook {:?}", path))?;

    log::info!(
        "Reference tables: {} volume, {} language, {} genre, {} singer type entries",
        tables.volume_count(),
        tables.language_count(),
        tables.genre_count(),
        tables.singer_type_count()
    );

    Ok(tables)
}

/// Build the lookup tables from already-read sheets
///
/// * `reference` - headerless `Reference` sheet (volume block and genre block)
/// * `languages` - headerless two-column `Ref2` sheet
/// * `singer_types` - `RefSing` table with `Src1`, `Src2`, `Data` columns
pub fn build_reference(
    reference: &Sheet,
    languages: &Sheet,
    singer_types: &Table,
) -> Result<ReferenceTables> {
    let mut tables = ReferenceTables::new();

    load_volume(&mut tables, reference);
    load_genre(&mut tables, reference)?;
    load_language(&mut tables, languages);
    load_singer_type(&mut tables, singer_types)?;

    Ok(tables)
}

fn load_volume(tables: &mut ReferenceTables, sheet: &Sheet) {
    for row in VOLUME_ROWS {
        let source = sheet.cell(row, VOLUME_SOURCE_COL);
        let target = sheet.cell(row, VOLUME_TARGET_COL);
        if source.is_empty() || target.is_empty() {
            continue;
        }
        if !tables.insert_volume(&source.text(), target.as_f64()) {
            log::debug!("Volume row {} has no integer source value, skipped", row + 1);
        }
    }
}

/// Locate the genre block by its header marker, then read (name, id) pairs
fn load_genre(tables: &mut ReferenceTables, sheet: &Sheet) -> Result<()> {
    let name_col = sheet
        .row(0)
        .iter()
        .position(|cell| cell.text() == GENRE_MARKER)
        .ok_or_else(|| ExportError::MissingGenreMarker(GENRE_MARKER.to_string()))?;
    let id_col = name_col + 1;

    log::debug!("Genre block found at column {}", name_col + 1);

    for row in GENRE_ROWS {
        let name = sheet.cell(row, name_col);
        let id = sheet.cell(row, id_col);
        if name.is_empty() || id.is_empty() {
            continue;
        }
        tables.insert_genre(&name.text(), id.as_int());
    }

    Ok(())
}

fn load_language(tables: &mut ReferenceTables, sheet: &Sheet) {
    for row in 0..sheet.row_count() {
        let source = sheet.cell(row, LANGUAGE_SOURCE_COL);
        if source.is_empty() {
            continue;
        }
        let target = sheet.cell(row, LANGUAGE_TARGET_COL);
        tables.insert_language(&source.text(), &target.text());
    }
}

fn load_singer_type(tables: &mut ReferenceTables, table: &Table) -> Result<()> {
    table.require_columns(&["Src1", "Src2", "Data"])?;

    for record in table.records() {
        let country = record.get("Src1");
        let sex = record.get("Src2");
        if country.is_empty() || sex.is_empty() {
            continue;
        }
        tables.insert_singer_type(&country.text(), &sex.text(), record.get("Data").as_int());
    }

    Ok(())
}
