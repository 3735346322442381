//! Error types for spreadsheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a spreadsheet.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Spreadsheet file not found.
    #[error("spreadsheet not found: {path}")]
    FileNotFound { path: PathBuf },

    /// File extension does not name a supported format.
    #[error("unsupported spreadsheet format '{extension}': {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Workbook Errors ===
    /// Workbook could not be opened or a worksheet could not be read.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// Requested worksheet does not exist.
    #[error("worksheet '{sheet}' not found in {path} (available: {available})")]
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: String,
    },

    /// Workbook contains no worksheets.
    #[error("workbook has no worksheets: {path}")]
    NoSheets { path: PathBuf },

    // === CSV Errors ===
    /// Failed to parse a CSV file.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
