//! Resolution of realistic annotation texts against a survey sheet.

use insta::assert_snapshot;

use tooltip_model::{RowRecord, RowTable};
use tooltip_resolve::resolve;

fn survey_table() -> RowTable {
    let mut table = RowTable::new();
    let rows: [(u32, &[(&str, &str)]); 3] = [
        (
            5,
            &[
                ("messstelle", "MST-4711"),
                ("gewaessername", "Ammersee"),
                ("datum", "2024-07-12 00:00:00"),
                ("taxon", "Chara globularis"),
            ],
        ),
        (10, &[("datum", "2024-05-01")]),
        (
            48,
            &[
                ("messstelle", "MST-0815"),
                ("taxon", "Potamogeton perfoliatus"),
                ("wuchsform", "submers"),
            ],
        ),
    ];
    for (row, entries) in rows {
        table.insert(row, entries.iter().copied().collect::<RowRecord>());
    }
    table
}

#[test]
fn datum_field_round_trip() {
    let table = survey_table();
    assert_eq!(
        resolve(&table, "see row 10 datum field").as_deref(),
        Some("row: 10\n2024-05-01")
    );
}

#[test]
fn range_is_not_looked_up() {
    let table = survey_table();
    assert_eq!(resolve(&table, "rows 47-50 gewaessername"), None);
}

#[test]
fn second_row_keyword_ends_the_lookup_scan() {
    let table = survey_table();
    assert_eq!(resolve(&table, "Rows 47-50, see row 48 wuchsform"), None);
    assert_eq!(resolve(&table, "arrow row 5 taxon"), None);
    assert_eq!(resolve(&table, "browse row 5"), None);
}

#[test]
fn range_echo_with_lookup_row_inside_segment() {
    let table = survey_table();
    let output = resolve(&table, "Rows 47-50, see 48 wuchsform").unwrap();
    assert_snapshot!(output, @r"
    rows: 47-50
    submers
    ");
}

#[test]
fn messstelle_wins_over_taxon() {
    let table = survey_table();
    assert_eq!(
        resolve(&table, "Taxon an Messstelle, row 48").as_deref(),
        Some("row: 48\nMST-0815")
    );
}

#[test]
fn umlaut_alias_selects_gewaessername() {
    let table = survey_table();
    assert_eq!(
        resolve(&table, "Gewässername an row 5").as_deref(),
        Some("row: 5\nAmmersee")
    );
}

#[test]
fn unknown_field_falls_back_to_full_record() {
    let table = survey_table();
    let output = resolve(&table, "row 5 unknownfield").unwrap();
    assert_snapshot!(output, @r"
    row: 5
    messstelle: MST-4711
    gewaessername: Ammersee
    datum: 2024-07-12 00:00:00
    taxon: Chara globularis
    ");
}

#[test]
fn resolving_previous_output_yields_bare_record() {
    let table = survey_table();
    let first = resolve(&table, "row 48 taxon").unwrap();
    assert_eq!(first, "row: 48\nPotamogeton perfoliatus");

    // "row: 48" still yields lookup row 48 through the token scan, but it
    // echoes no reference and names no field, so the whole record comes back.
    let again = resolve(&table, &first).unwrap();
    assert_snapshot!(again, @r"
    messstelle: MST-0815
    taxon: Potamogeton perfoliatus
    wuchsform: submers
    ");
    assert_eq!(resolve(&table, "row 48 taxon").unwrap(), first);
}

#[test]
fn whitespace_only_text() {
    assert_eq!(resolve(&survey_table(), "   "), None);
    assert_eq!(resolve(&RowTable::new(), "\n\t"), None);
}
