//! Tabular sources the row table is built from.

use crate::cell::CellValue;

/// A rectangular, 1-indexed table whose first row holds column headers.
pub trait TabularSource {
    /// Number of rows, header included.
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    /// Returns the cell at `row`, `column` (both 1-based), or `None` when empty.
    fn cell(&self, row: usize, column: usize) -> Option<&CellValue>;
}

/// In-memory grid of cells loaded from a spreadsheet or CSV file.
///
/// Rows may be ragged; missing trailing cells read as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<Option<CellValue>>>,
    width: usize,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builds a sheet from rows of cells, starting at row 1.
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<Option<CellValue>>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            name: name.into(),
            rows,
            width,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a row below the current last row.
    pub fn push_row(&mut self, row: Vec<Option<CellValue>>) {
        self.width = self.width.max(row.len());
        self.rows.push(row);
    }

    /// Places `value` at `row`, `column` (1-based), growing the grid as needed.
    pub fn set(&mut self, row: usize, column: usize, value: CellValue) {
        if row == 0 || column == 0 {
            return;
        }
        if self.rows.len() < row {
            self.rows.resize_with(row, Vec::new);
        }
        let cells = &mut self.rows[row - 1];
        if cells.len() < column {
            cells.resize(column, None);
        }
        cells[column - 1] = Some(value);
        self.width = self.width.max(column);
    }
}

impl TabularSource for Sheet {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.width
    }

    fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        let cells = self.rows.get(row.checked_sub(1)?)?;
        cells.get(column.checked_sub(1)?)?.as_ref()
    }
}
