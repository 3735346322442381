//! Reading and rewriting annotation contents of in-memory PDFs.

use std::io::Write;

use lopdf::{Dictionary, Document, Object, dictionary};

use tooltip_model::{AnnotationKind, AnnotationRef, AnnotationStore};
use tooltip_pdf::{PdfAnnotations, PdfError};

fn annotation(subtype: &str, contents: Option<&str>) -> Dictionary {
    let mut dict = dictionary! {
        "Type" => "Annot",
        "Subtype" => subtype,
        "Rect" => vec![10.into(), 10.into(), 30.into(), 30.into()],
    };
    if let Some(text) = contents {
        dict.set("Contents", Object::string_literal(text));
    }
    dict
}

/// One page per entry; annotations stored as indirect objects.
fn build_document(pages: Vec<Vec<Dictionary>>) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids: Vec<Object> = Vec::new();
    for annotations in pages {
        let annots: Vec<Object> = annotations
            .into_iter()
            .map(|dict| doc.add_object(dict).into())
            .collect();
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            "Annots" => annots,
        });
        kids.push(page_id.into());
    }
    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn reload(store: &mut PdfAnnotations) -> PdfAnnotations {
    let mut bytes = Vec::new();
    store.save_to(&mut bytes).unwrap();
    PdfAnnotations::from_document(Document::load_mem(&bytes).unwrap())
}

#[test]
fn lists_annotations_page_by_page() {
    let doc = build_document(vec![
        vec![annotation("Text", Some("row 2")), annotation("Link", None)],
        vec![],
        vec![annotation("FreeText", Some("rows 4-5")), annotation("Highlight", None)],
    ]);
    let store = PdfAnnotations::from_document(doc);

    let listed = store.annotations().unwrap();

    assert_eq!(store.page_count(), 3);
    let summary: Vec<(u32, usize, AnnotationKind)> = listed
        .into_iter()
        .map(|annotation| (annotation.page, annotation.index, annotation.kind))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, 0, AnnotationKind::Text),
            (1, 1, AnnotationKind::Other("Link".to_string())),
            (3, 0, AnnotationKind::FreeText),
            (3, 1, AnnotationKind::Highlight),
        ]
    );
}

#[test]
fn missing_contents_read_as_empty() {
    let doc = build_document(vec![vec![
        annotation("Popup", None),
        annotation("Text", Some("row 7 taxon")),
    ]]);
    let store = PdfAnnotations::from_document(doc);
    let listed = store.annotations().unwrap();

    assert_eq!(store.contents(&listed[0]).unwrap(), "");
    assert_eq!(store.contents(&listed[1]).unwrap(), "row 7 taxon");
}

#[test]
fn rewritten_contents_survive_save() {
    let doc = build_document(vec![vec![annotation("Text", Some("row 3 gewaessername"))]]);
    let mut store = PdfAnnotations::from_document(doc);
    let target = store.annotations().unwrap().remove(0);

    store
        .set_contents(&target, "row: 3\nGewässer Nord")
        .unwrap();
    let reloaded = reload(&mut store);

    let listed = reloaded.annotations().unwrap();
    assert_eq!(listed, vec![target]);
    assert_eq!(reloaded.contents(&listed[0]).unwrap(), "row: 3\nGewässer Nord");
}

#[test]
fn set_contents_stamps_modification_date() {
    let doc = build_document(vec![vec![annotation("Text", Some("row 3"))]]);
    let mut store = PdfAnnotations::from_document(doc);
    let target = store.annotations().unwrap().remove(0);

    store.set_contents(&target, "row: 3\nx").unwrap();

    let document = store.into_document();
    let stamped = document.objects.values().any(|object| match object {
        Object::Dictionary(dict) => matches!(
            dict.get(b"M"),
            Ok(Object::String(bytes, _)) if bytes.starts_with(b"D:")
        ),
        _ => false,
    });
    assert!(stamped);
}

#[test]
fn inline_and_indirect_annots_arrays() {
    let mut doc = build_document(vec![vec![], vec![]]);
    let pages = doc.get_pages();

    // Page 1: inline annotation dictionary directly in the page's /Annots.
    let first_page = pages[&1];
    doc.get_object_mut(first_page)
        .unwrap()
        .as_dict_mut()
        .unwrap()
        .set("Annots", vec![Object::Dictionary(annotation("Note", Some("row 2")))]);

    // Page 2: /Annots is a reference to an array object holding an inline dictionary.
    let array_id = doc.add_object(vec![Object::Dictionary(annotation(
        "Text",
        Some("row 4"),
    ))]);
    let second_page = pages[&2];
    doc.get_object_mut(second_page)
        .unwrap()
        .as_dict_mut()
        .unwrap()
        .set("Annots", array_id);

    let mut store = PdfAnnotations::from_document(doc);
    let listed = store.annotations().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].kind, AnnotationKind::Note);
    assert_eq!(listed[1].kind, AnnotationKind::Text);

    store.set_contents(&listed[0], "first").unwrap();
    store.set_contents(&listed[1], "second").unwrap();
    let reloaded = reload(&mut store);

    let listed = reloaded.annotations().unwrap();
    assert_eq!(reloaded.contents(&listed[0]).unwrap(), "first");
    assert_eq!(reloaded.contents(&listed[1]).unwrap(), "second");
}

#[test]
fn unknown_position_is_an_error() {
    let doc = build_document(vec![vec![annotation("Text", None)]]);
    let mut store = PdfAnnotations::from_document(doc);
    let missing = AnnotationRef {
        page: 1,
        index: 5,
        kind: AnnotationKind::Text,
    };

    assert!(matches!(
        store.contents(&missing),
        Err(PdfError::AnnotationNotFound { page: 1, index: 5 })
    ));
    assert!(matches!(
        store.set_contents(&missing, "x"),
        Err(PdfError::AnnotationNotFound { .. })
    ));
}

#[test]
fn open_reports_missing_and_corrupt_files() {
    let missing = PdfAnnotations::open(std::path::Path::new("/nonexistent/template.pdf"));
    assert!(matches!(missing, Err(PdfError::FileNotFound { .. })));

    let mut garbage = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    write!(garbage, "definitely not a PDF").unwrap();
    let corrupt = PdfAnnotations::open(garbage.path());
    assert!(matches!(corrupt, Err(PdfError::Load { .. })));
}

#[test]
fn save_and_open_from_disk() {
    let doc = build_document(vec![vec![annotation("FreeText", Some("row 9"))]]);
    let mut store = PdfAnnotations::from_document(doc);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.pdf");

    store.save(&path).unwrap();
    let reopened = PdfAnnotations::open(&path).unwrap();

    let listed = reopened.annotations().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(reopened.contents(&listed[0]).unwrap(), "row 9");
}
