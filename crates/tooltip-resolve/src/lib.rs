//! Resolving annotation text to spreadsheet row data.
//!
//! An annotation such as `"see row 10 datum field"` names a spreadsheet row
//! and, optionally, one of a fixed set of fields. [`resolve`] finds that row
//! in a [`RowTable`](tooltip_model::RowTable) and returns the replacement
//! tooltip text, or `None` when nothing matches and the annotation should be
//! left alone.
//!
//! Resolution is total: malformed text, unknown rows and missing fields all
//! degrade to `None` or to the full-record fallback, never to an error.

pub mod fields;
pub mod reference;
pub mod resolver;

pub use fields::{CanonicalField, FieldAliasTable};
pub use reference::{ParsedReference, extract_row_text, parse_lookup_row};
pub use resolver::{format_record, resolve, resolve_with};
