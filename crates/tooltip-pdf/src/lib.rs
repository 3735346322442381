//! PDF annotation access for tooltip filling.
//!
//! [`PdfAnnotations`] lists the annotations of every page of a PDF and reads
//! or rewrites their `/Contents`, implementing
//! [`AnnotationStore`](tooltip_model::AnnotationStore) on top of `lopdf`.

mod error;
mod store;
pub mod text;

pub use error::{PdfError, Result};
pub use store::PdfAnnotations;
