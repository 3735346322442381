//! Folding a tabular source into a row table.

use tracing::debug;

use tooltip_model::{CellValue, RowRecord, RowTable, TabularSource};

/// Builds a row table from `source`, whose first row holds the headers.
///
/// Each data row becomes a record of its non-empty cells keyed by column
/// header. Rows without any non-empty cell are left out, and every kept row
/// keeps its source row number. Never fails: every cell value renders to text.
pub fn build_row_table<S>(source: &S) -> RowTable
where
    S: TabularSource + ?Sized,
{
    let column_count = source.column_count();
    let headers: Vec<String> = (1..=column_count)
        .map(|column| header_name(source, column))
        .collect();

    let mut table = RowTable::new();
    let mut skipped_rows = 0usize;
    for row in 2..=source.row_count() {
        let mut record = RowRecord::new();
        for (column, header) in (1..=column_count).zip(&headers) {
            let Some(value) = source.cell(row, column) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            record.insert(header.as_str(), value.to_string());
        }

        if record.is_empty() {
            skipped_rows += 1;
            continue;
        }
        let Ok(row_number) = u32::try_from(row) else {
            break;
        };
        table.insert(row_number, record);
    }

    debug!(
        rows = table.len(),
        columns = column_count,
        skipped_rows,
        "row table built"
    );
    table
}

/// Header for a 1-based column: the header cell's text, or `Column_{column}`
/// when that cell is blank (empty, zero or `False`).
pub fn header_name<S>(source: &S, column: usize) -> String
where
    S: TabularSource + ?Sized,
{
    match source.cell(1, column) {
        Some(value) if !is_blank_header(value) => value.to_string(),
        _ => format!("Column_{column}"),
    }
}

fn is_blank_header(value: &CellValue) -> bool {
    match value {
        CellValue::Text(text) => text.is_empty(),
        CellValue::Integer(number) => *number == 0,
        CellValue::Float(number) => *number == 0.0,
        CellValue::Boolean(flag) => !flag,
        CellValue::DateTime(_) | CellValue::Error(_) => false,
    }
}
