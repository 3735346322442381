//! Core data types for filling annotation tooltips from spreadsheet rows.
//!
//! - [`CellValue`]: a scalar read from a sheet, with total stringification
//! - [`RowRecord`] / [`RowTable`]: the per-row column data the resolver reads
//! - [`TabularSource`] / [`Sheet`]: the 1-indexed table shape rows are built from
//! - [`AnnotationStore`]: the seam to a document holding annotations

pub mod annotation;
pub mod cell;
pub mod source;
pub mod table;

pub use annotation::{AnnotationKind, AnnotationRef, AnnotationStore};
pub use cell::CellValue;
pub use source::{Sheet, TabularSource};
pub use table::{RowRecord, RowTable};
