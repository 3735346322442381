//! Loading CSV sheets from disk into row tables.

use std::io::Write;

use tempfile::NamedTempFile;

use tooltip_ingest::{IngestError, load_row_table, load_sheet};
use tooltip_model::{CellValue, TabularSource};

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn loads_rows_with_source_numbers() {
    let file = create_temp_csv(
        "messstelle,gewaessername,datum,taxon\n\
         M-101,Ammersee,2024-05-01,Chara globularis\n\
         ,,,\n\
         M-102,Starnberger See,2024-05-02,\n",
    );

    let table = load_row_table(file.path(), None).unwrap();

    assert_eq!(table.len(), 2);
    let first = table.get(2).unwrap();
    assert_eq!(first.get("gewaessername"), Some("Ammersee"));
    assert_eq!(first.get("taxon"), Some("Chara globularis"));
    assert!(!table.contains_row(3));
    let second = table.get(4).unwrap();
    assert_eq!(second.len(), 3);
    assert_eq!(second.get("taxon"), None);
}

#[test]
fn strips_bom_and_keeps_ragged_rows() {
    let file = create_temp_csv("\u{feff}a,b\n1\n1,2,3\n");

    let sheet = load_sheet(file.path(), None).unwrap();

    assert_eq!(sheet.row_count(), 3);
    assert_eq!(sheet.column_count(), 3);
    assert_eq!(sheet.cell(1, 1), Some(&CellValue::from("a")));
    assert_eq!(sheet.cell(2, 2), None);

    let table = load_row_table(file.path(), None).unwrap();
    let third = table.get(3).unwrap();
    let entries: Vec<(&str, &str)> = third.iter().collect();
    assert_eq!(entries, vec![("a", "1"), ("b", "2"), ("Column_3", "3")]);
}

#[test]
fn quoted_fields_keep_commas_and_newlines() {
    let file = create_temp_csv("taxon,bemerkung\nChara,\"flach, klar\nSicht 2m\"\n");

    let table = load_row_table(file.path(), None).unwrap();

    assert_eq!(
        table.get(2).unwrap().get("bemerkung"),
        Some("flach, klar\nSicht 2m")
    );
}

#[test]
fn rejects_unknown_extension() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    write!(file, "a,b\n1,2\n").unwrap();

    let result = load_row_table(file.path(), None);

    assert!(matches!(result, Err(IngestError::UnsupportedFormat { .. })));
}

#[test]
fn corrupt_workbook_is_reported() {
    let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
    write!(file, "not a zip archive").unwrap();

    let result = load_sheet(file.path(), None);

    assert!(matches!(result, Err(IngestError::Workbook { .. })));
}
