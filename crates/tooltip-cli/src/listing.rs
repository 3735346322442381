//! Plain-text and JSON renderings of a loaded row table.

use tooltip_model::RowTable;

/// Renders each row as `Row N:` followed by indented `key: value` lines.
pub fn render_rows(table: &RowTable) -> String {
    let mut out = String::new();
    for (row, record) in table {
        out.push_str(&format!("Row {row}:\n"));
        for (key, value) in record.iter() {
            out.push_str(&format!("  {key}: {value}\n"));
        }
    }
    out
}

/// Renders the table as pretty JSON keyed by row number.
pub fn render_rows_json(table: &RowTable) -> serde_json::Result<String> {
    serde_json::to_string_pretty(table)
}
