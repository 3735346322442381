//! CSV sheets.

use std::path::Path;

use csv::ReaderBuilder;

use tooltip_model::{CellValue, Sheet};

use crate::error::{IngestError, Result};

/// Reads every record of a CSV file as text cells, header row included.
pub(super) fn read_csv_sheet(path: &Path) -> Result<Sheet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("csv");
    let mut sheet = Sheet::new(name);
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let cells = record
            .iter()
            .enumerate()
            .map(|(column, field)| {
                // Skip BOM if present
                let field = if line == 0 && column == 0 {
                    field.strip_prefix('\u{feff}').unwrap_or(field)
                } else {
                    field
                };
                (!field.is_empty()).then(|| CellValue::from(field))
            })
            .collect();
        sheet.push_row(cells);
    }
    Ok(sheet)
}
