//! Workbook sheets (xlsx, xlsm, xlsb, xls, ods) through calamine.

use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use tracing::debug;

use tooltip_model::{CellValue, Sheet};

use crate::error::{IngestError, Result};

/// Reads the cached values of one worksheet.
///
/// Cells keep their absolute positions, so a used range starting below the
/// first row or right of the first column still lines up with the row
/// numbers shown in the spreadsheet application.
pub(super) fn read_workbook_sheet(path: &Path, sheet_name: Option<&str>) -> Result<Sheet> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let names = workbook.sheet_names().to_vec();
    let index = match sheet_name {
        Some(wanted) => names
            .iter()
            .position(|name| name == wanted)
            .ok_or_else(|| IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: wanted.to_string(),
                available: names.join(", "),
            })?,
        None => 0,
    };
    let name = names.get(index).cloned().ok_or_else(|| IngestError::NoSheets {
        path: path.to_path_buf(),
    })?;

    let range = workbook
        .worksheet_range_at(index)
        .ok_or_else(|| IngestError::NoSheets {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut sheet = Sheet::new(name);
    let (start_row, start_column) = range.start().unwrap_or((0, 0));
    for (row, column, data) in range.cells() {
        let Some(value) = cell_from_data(data) else {
            continue;
        };
        sheet.set(
            start_row as usize + row + 1,
            start_column as usize + column + 1,
            value,
        );
    }
    debug!(
        path = %path.display(),
        sheet = sheet.name(),
        start_row,
        start_column,
        "worksheet read"
    );
    Ok(sheet)
}

/// Converts a calamine cell into a [`CellValue`], `None` for empty cells.
pub fn cell_from_data(data: &Data) -> Option<CellValue> {
    let value = match data {
        Data::Empty => return None,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Int(value) => CellValue::Integer(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Boolean(*value),
        Data::DateTime(_) => match data.as_datetime() {
            Some(value) => CellValue::DateTime(value),
            None => CellValue::Text(data.to_string()),
        },
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::Text(text.clone()),
        Data::Error(error) => CellValue::Error(error.to_string()),
    };
    Some(value)
}
