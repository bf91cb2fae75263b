//! Worksheet grids and header-addressed tables

use super::cell::Cell;
use crate::error::ExportError;
use calamine::{Data, Range};
use std::collections::HashMap;

static EMPTY_CELL: Cell = Cell::Empty;

/// Dense cell grid anchored at A1
///
/// Positions outside the stored grid read as [`Cell::Empty`], so fixed
/// row/column windows can be addressed without bounds checks.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Build a sheet from rows of cells, first row is row 0 (A1)
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Convert a calamine range, re-anchoring it at A1
    ///
    /// calamine ranges start at the first used cell; headerless reference
    /// sheets are addressed by absolute position so the offset is padded back.
    pub fn from_range(name: impl Into<String>, range: &Range<Data>) -> Self {
        let (row_offset, col_offset) = range
            .start()
            .map(|(r, c)| (r as usize, c as usize))
            .unwrap_or((0, 0));

        let mut rows = vec![Vec::new(); row_offset];
        for row in range.rows() {
            let mut cells = vec![Cell::Empty; col_offset];
            cells.extend(row.iter().map(Cell::from));
            rows.push(cells);
        }

        Self::new(name, rows)
    }

    /// Cell at an absolute (row, column) position
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Number of stored rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Row at an absolute position (empty slice when out of range)
    pub fn row(&self, row: usize) -> &[Cell] {
        self.rows.get(row).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A sheet whose first used row names its columns
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    columns: HashMap<String, usize>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Interpret a sheet as header + records
    ///
    /// Leading blank rows are skipped, the first non-blank row is the header.
    /// Fully blank rows below it carry no record and are dropped.
    pub fn from_sheet(sheet: Sheet) -> Self {
        let Sheet { name, rows } = sheet;
        let mut rows = rows
            .into_iter()
            .skip_while(|r| r.iter().all(Cell::is_empty));

        let mut columns = HashMap::new();
        if let Some(header) = rows.next() {
            for (idx, cell) in header.iter().enumerate() {
                let label = cell.text();
                if !label.is_empty() {
                    // Duplicate headers: the leftmost column keeps the name
                    columns.entry(label).or_insert(idx);
                }
            }
        }

        let rows = rows
            .filter(|r| !r.iter().all(Cell::is_empty))
            .collect();

        Self {
            name,
            columns,
            rows,
        }
    }

    /// Build a table from a header and data rows (mostly for tests and embedders)
    pub fn from_rows(name: &str, header: &[&str], rows: Vec<Vec<Cell>>) -> Self {
        let mut all = vec![header.iter().map(|h| Cell::from(*h)).collect::<Vec<_>>()];
        all.extend(rows);
        Self::from_sheet(Sheet::new(name, all))
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Fail with [`ExportError::MissingColumn`] on the first absent column
    pub fn require_columns(&self, columns: &[&str]) -> Result<(), ExportError> {
        match columns.iter().find(|c| !self.has_column(c)) {
            Some(missing) => Err(ExportError::MissingColumn {
                sheet: self.name.clone(),
                column: missing.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Number of data records
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate data records in sheet order
    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(move |cells| Record {
            table: self,
            cells,
        })
    }
}

/// One data row of a [`Table`]
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    table: &'a Table,
    cells: &'a [Cell],
}

impl<'a> Record<'a> {
    /// Cell under `column`; empty when the column or the cell is absent
    pub fn get(&self, column: &str) -> &'a Cell {
        self.table
            .columns
            .get(column)
            .and_then(|&idx| self.cells.get(idx))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Rendered text under `column`
    pub fn text(&self, column: &str) -> String {
        self.get(column).text()
    }
}
