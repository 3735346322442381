//! Spreadsheet ingestion for tooltip filling.
//!
//! Loads the first (or a named) worksheet of a workbook, or a CSV file, into a
//! [`Sheet`](tooltip_model::Sheet) and folds it into a
//! [`RowTable`](tooltip_model::RowTable) keyed by the original row numbers.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tooltip_ingest::load_row_table;
//!
//! let table = load_row_table(Path::new("Perla_11_1_vorlage-steps.xlsx"), None)?;
//! if let Some(record) = table.get(38) {
//!     println!("{:?}", record.get("taxon"));
//! }
//! ```

mod builder;
mod error;
mod sheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === Row Table ===
pub use builder::{build_row_table, header_name};

// === Sheet Loading ===
pub use sheet::{SheetFormat, cell_from_data, load_row_table, load_sheet};
