//! Turning annotation text into replacement tooltip content.

use tracing::trace;

use tooltip_model::{RowRecord, RowTable};

use crate::fields::FieldAliasTable;
use crate::reference::ParsedReference;

/// Resolves annotation text against `table` using the standard field aliases.
///
/// Returns `None` when the text is blank, names no lookup row, or names a row
/// the table does not hold; the caller should then keep the existing content.
pub fn resolve(table: &RowTable, raw_text: &str) -> Option<String> {
    resolve_with(table, FieldAliasTable::standard(), raw_text)
}

/// Same as [`resolve`] with an explicit alias table.
pub fn resolve_with(table: &RowTable, aliases: &FieldAliasTable, raw_text: &str) -> Option<String> {
    let folded = raw_text.trim().to_lowercase();
    if folded.is_empty() {
        return None;
    }

    let reference = ParsedReference::parse(&folded, aliases);
    let Some(row) = reference.row else {
        trace!(row_text = ?reference.row_text, "no lookup row in annotation text");
        return None;
    };
    let Some(record) = table.get(row) else {
        trace!(row, "row not in table");
        return None;
    };

    let content = match reference
        .field
        .and_then(|field| record.get(field.as_str()))
    {
        Some(value) => value.to_string(),
        None => format_record(record),
    };

    let resolved = match &reference.row_text {
        Some(text) if reference.is_range() => format!("rows: {text}\n{content}"),
        Some(text) => format!("row: {text}\n{content}"),
        None => content,
    };
    Some(resolved)
}

/// Formats every entry as `key: value`, one per line, in column order.
pub fn format_record(record: &RowRecord) -> String {
    record
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> RowTable {
        let mut table = RowTable::new();
        table.insert(
            5,
            [("messstelle", "M-5"), ("taxon", "Chara"), ("tiefe", "2")]
                .into_iter()
                .collect(),
        );
        table.insert(10, [("datum", "2024-05-01")].into_iter().collect());
        table
    }

    #[test]
    fn field_value_with_row_prefix() {
        let table = sample_table();
        assert_eq!(
            resolve(&table, "see row 10 datum field").as_deref(),
            Some("row: 10\n2024-05-01")
        );
    }

    #[test]
    fn unknown_field_returns_whole_record() {
        let table = sample_table();
        assert_eq!(
            resolve(&table, "row 5 unknownfield").as_deref(),
            Some("row: 5\nmessstelle: M-5\ntaxon: Chara\ntiefe: 2")
        );
    }

    #[test]
    fn matched_field_missing_from_row_returns_whole_record() {
        let table = sample_table();
        assert_eq!(
            resolve(&table, "row 10 taxon").as_deref(),
            Some("row: 10\ndatum: 2024-05-01")
        );
    }

    #[test]
    fn input_is_case_folded_and_trimmed() {
        let table = sample_table();
        assert_eq!(
            resolve(&table, "  ROW 5 TAXON \n").as_deref(),
            Some("row: 5\nChara")
        );
    }

    #[test]
    fn quoted_row_has_no_prefix() {
        let table = sample_table();
        assert_eq!(resolve(&table, "row '5' taxon").as_deref(), Some("Chara"));
    }

    #[test]
    fn blank_and_unmatched_text_resolve_to_none() {
        let table = sample_table();
        assert_eq!(resolve(&table, ""), None);
        assert_eq!(resolve(&table, " \t\n"), None);
        assert_eq!(resolve(&table, "taxon"), None);
        assert_eq!(resolve(&table, "row 6 taxon"), None);
    }

    #[test]
    fn custom_aliases() {
        let table = sample_table();
        let aliases = FieldAliasTable::new([(crate::CanonicalField::Taxon, ["art"])]);
        assert_eq!(
            resolve_with(&table, &aliases, "Art in row 5").as_deref(),
            Some("row: 5\nChara")
        );
    }

    #[test]
    fn empty_record_formats_to_empty_string() {
        assert_eq!(format_record(&RowRecord::new()), "");
    }
}
