//! Annotation store backed by an in-memory `lopdf` document.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use lopdf::{Dictionary, Document, Object, ObjectId};
use tracing::{debug, warn};

use tooltip_model::{AnnotationKind, AnnotationRef, AnnotationStore};

use crate::error::{PdfError, Result};
use crate::text::{decode_text_string, encode_text_string};

/// Where an annotation dictionary lives inside the document.
#[derive(Debug, Clone, Copy)]
enum Slot {
    /// Indirect object referenced from `/Annots`.
    Object(ObjectId),
    /// Inline dictionary in the page's own `/Annots` array.
    InPage { page: ObjectId, index: usize },
    /// Inline dictionary in an `/Annots` array stored as its own object.
    InArray { array: ObjectId, index: usize },
}

/// PDF document whose page annotations can be read and rewritten.
pub struct PdfAnnotations {
    document: Document,
    pages: BTreeMap<u32, ObjectId>,
}

impl PdfAnnotations {
    /// Loads a PDF from disk.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(PdfError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let document = Document::load(path).map_err(|e| PdfError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let store = Self::from_document(document);
        debug!(path = %path.display(), pages = store.page_count(), "PDF opened");
        Ok(store)
    }

    pub fn from_document(document: Document) -> Self {
        let pages = document.get_pages();
        Self { document, pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        self.document
            .save(path)
            .map_err(|e| PdfError::Save {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        debug!(path = %path.display(), "PDF saved");
        Ok(())
    }

    pub fn save_to<W: Write>(&mut self, writer: &mut W) -> Result<()> {
        self.document
            .save_to(writer)
            .map_err(|e| PdfError::Object {
                message: e.to_string(),
            })
    }

    fn page_id(&self, page: u32) -> Option<ObjectId> {
        self.pages.get(&page).copied()
    }

    /// The `/Annots` array of a page, plus its object id when stored indirectly.
    fn annots(&self, page_id: ObjectId) -> Result<Option<(&[Object], Option<ObjectId>)>> {
        let page = self.document.get_object(page_id)?.as_dict()?;
        let Ok(annots) = page.get(b"Annots") else {
            return Ok(None);
        };
        let annots = match annots {
            Object::Array(items) => Some((items.as_slice(), None)),
            Object::Reference(id) => {
                let items = self.document.get_object(*id)?.as_array()?;
                Some((items.as_slice(), Some(*id)))
            }
            _ => None,
        };
        Ok(annots)
    }

    fn locate(&self, page: u32, index: usize) -> Result<Slot> {
        let not_found = || PdfError::AnnotationNotFound { page, index };
        let page_id = self.page_id(page).ok_or_else(not_found)?;
        let (items, array_id) = self.annots(page_id)?.ok_or_else(not_found)?;
        match items.get(index) {
            Some(Object::Reference(id)) => Ok(Slot::Object(*id)),
            Some(Object::Dictionary(_)) => Ok(match array_id {
                Some(array) => Slot::InArray { array, index },
                None => Slot::InPage {
                    page: page_id,
                    index,
                },
            }),
            _ => Err(not_found()),
        }
    }

    fn slot_dict(&self, slot: Slot) -> Result<&Dictionary> {
        let dict = match slot {
            Slot::Object(id) => self.document.get_object(id)?.as_dict()?,
            Slot::InPage { page, index } => {
                let page = self.document.get_object(page)?.as_dict()?;
                array_entry(page.get(b"Annots")?.as_array()?, index)?.as_dict()?
            }
            Slot::InArray { array, index } => {
                let items = self.document.get_object(array)?.as_array()?;
                array_entry(items, index)?.as_dict()?
            }
        };
        Ok(dict)
    }

    fn slot_dict_mut(&mut self, slot: Slot) -> Result<&mut Dictionary> {
        let dict = match slot {
            Slot::Object(id) => self.document.get_object_mut(id)?.as_dict_mut()?,
            Slot::InPage { page, index } => {
                let page = self.document.get_object_mut(page)?.as_dict_mut()?;
                let items = page.get_mut(b"Annots")?.as_array_mut()?;
                array_entry_mut(items, index)?.as_dict_mut()?
            }
            Slot::InArray { array, index } => {
                let items = self.document.get_object_mut(array)?.as_array_mut()?;
                array_entry_mut(items, index)?.as_dict_mut()?
            }
        };
        Ok(dict)
    }

    fn kind_of(&self, slot: Slot) -> Result<AnnotationKind> {
        let dict = self.slot_dict(slot)?;
        let subtype = dict
            .get(b"Subtype")
            .and_then(Object::as_name)
            .map(String::from_utf8_lossy)
            .unwrap_or_default();
        Ok(AnnotationKind::from_subtype(&subtype))
    }
}

fn array_entry(items: &[Object], index: usize) -> Result<&Object> {
    items.get(index).ok_or_else(|| PdfError::Object {
        message: format!("annotation array has no entry {index}"),
    })
}

fn array_entry_mut(items: &mut [Object], index: usize) -> Result<&mut Object> {
    items.get_mut(index).ok_or_else(|| PdfError::Object {
        message: format!("annotation array has no entry {index}"),
    })
}

/// PDF date string (ISO 32000-1, 7.9.4) for the current time.
fn pdf_date_now() -> String {
    Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()
}

impl AnnotationStore for PdfAnnotations {
    type Error = PdfError;

    fn annotations(&self) -> Result<Vec<AnnotationRef>> {
        let mut annotations = Vec::new();
        for (&page, &page_id) in &self.pages {
            let Some((items, _)) = self.annots(page_id)? else {
                continue;
            };
            for index in 0..items.len() {
                let kind = match self.locate(page, index).and_then(|slot| self.kind_of(slot)) {
                    Ok(kind) => kind,
                    Err(error) => {
                        warn!(page, index, %error, "skipping unreadable annotation");
                        continue;
                    }
                };
                annotations.push(AnnotationRef { page, index, kind });
            }
        }
        Ok(annotations)
    }

    fn contents(&self, annotation: &AnnotationRef) -> Result<String> {
        let dict = self.slot_dict(self.locate(annotation.page, annotation.index)?)?;
        let contents = match dict.get(b"Contents") {
            Ok(Object::String(bytes, _)) => decode_text_string(bytes),
            Ok(Object::Reference(id)) => match self.document.get_object(*id)? {
                Object::String(bytes, _) => decode_text_string(bytes),
                _ => String::new(),
            },
            _ => String::new(),
        };
        Ok(contents)
    }

    fn set_contents(&mut self, annotation: &AnnotationRef, contents: &str) -> Result<()> {
        let slot = self.locate(annotation.page, annotation.index)?;
        let dict = self.slot_dict_mut(slot)?;
        dict.set("Contents", encode_text_string(contents));
        dict.set("M", Object::string_literal(pdf_date_now()));
        Ok(())
    }
}
