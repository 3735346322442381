//! Error types for PDF annotation access.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a PDF.
#[derive(Debug, Error)]
pub enum PdfError {
    /// Input document not found.
    #[error("PDF not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Document could not be parsed.
    #[error("failed to load PDF {path}: {message}")]
    Load { path: PathBuf, message: String },

    /// Document could not be written.
    #[error("failed to save PDF {path}: {message}")]
    Save { path: PathBuf, message: String },

    /// No annotation at the given position.
    #[error("no annotation {index} on page {page}")]
    AnnotationNotFound { page: u32, index: usize },

    /// A PDF object was missing or had an unexpected type.
    #[error("malformed PDF object: {message}")]
    Object { message: String },
}

impl From<lopdf::Error> for PdfError {
    fn from(err: lopdf::Error) -> Self {
        Self::Object {
            message: err.to_string(),
        }
    }
}

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;
