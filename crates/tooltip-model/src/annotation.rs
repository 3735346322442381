//! Annotation model and the document seam the driver writes through.

use std::fmt;

/// Annotation subtype as reported by the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    Text,
    Note,
    FreeText,
    Popup,
    Highlight,
    Other(String),
}

impl AnnotationKind {
    /// Maps a subtype name (`Text`, `FreeText`, ...) to a kind.
    pub fn from_subtype(name: &str) -> Self {
        match name {
            "Text" => Self::Text,
            "Note" => Self::Note,
            "FreeText" => Self::FreeText,
            "Popup" => Self::Popup,
            "Highlight" => Self::Highlight,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "Text",
            Self::Note => "Note",
            Self::FreeText => "FreeText",
            Self::Popup => "Popup",
            Self::Highlight => "Highlight",
            Self::Other(name) => name,
        }
    }

    /// Returns true for the kinds that carry a tooltip worth resolving.
    pub fn is_tooltip(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Location of one annotation inside a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRef {
    /// 1-based page number.
    pub page: u32,
    /// 0-based position within the page's annotation list.
    pub index: usize,
    pub kind: AnnotationKind,
}

/// A document whose annotations can be listed, read and rewritten.
pub trait AnnotationStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Lists every annotation, page by page, in document order.
    fn annotations(&self) -> Result<Vec<AnnotationRef>, Self::Error>;

    /// Current contents; an annotation without contents reads as empty.
    fn contents(&self, annotation: &AnnotationRef) -> Result<String, Self::Error>;

    /// Replaces the contents and commits the change to the document.
    fn set_contents(&mut self, annotation: &AnnotationRef, contents: &str)
    -> Result<(), Self::Error>;
}
