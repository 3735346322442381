//! Loading sheets from disk.

mod delimited;
mod workbook;

use std::path::Path;

use tracing::info;

use tooltip_model::{RowTable, Sheet};

use crate::builder::build_row_table;
use crate::error::{IngestError, Result};

pub use workbook::cell_from_data;

/// File formats a sheet can be loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    /// Excel or OpenDocument workbook read through calamine.
    Workbook,
    /// Comma separated values.
    Csv,
}

impl SheetFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(Self::Workbook),
            "csv" => Ok(Self::Csv),
            _ => Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            }),
        }
    }
}

/// Loads one worksheet of a workbook, or a CSV file, into a [`Sheet`].
///
/// For workbooks `sheet_name` selects a worksheet; the first one is used when
/// it is `None`. CSV files have a single sheet and ignore the name.
pub fn load_sheet(path: &Path, sheet_name: Option<&str>) -> Result<Sheet> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let sheet = match SheetFormat::from_path(path)? {
        SheetFormat::Workbook => workbook::read_workbook_sheet(path, sheet_name)?,
        SheetFormat::Csv => delimited::read_csv_sheet(path)?,
    };
    Ok(sheet)
}

/// Loads a sheet and folds it into a row table.
pub fn load_row_table(path: &Path, sheet_name: Option<&str>) -> Result<RowTable> {
    let sheet = load_sheet(path, sheet_name)?;
    let table = build_row_table(&sheet);
    info!(
        path = %path.display(),
        sheet = sheet.name(),
        rows = table.len(),
        "spreadsheet loaded"
    );
    Ok(table)
}
