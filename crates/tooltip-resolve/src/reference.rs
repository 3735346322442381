//! Row references inside annotation text.
//!
//! Two independent passes read the same text. The pattern pass captures the
//! literal reference (`38`, `47-50`) for echoing back; the token pass finds
//! the integer used for the table lookup. They can disagree: `rows 47-50`
//! echoes `47-50` but has no lookup row, since ranges are not expanded.
//! The token pass only looks between the first and second `row`, so any
//! later reference is never looked up.

use std::sync::LazyLock;

use regex::Regex;

use crate::fields::{CanonicalField, FieldAliasTable};

/// `row 38`, `rows 47-50`: keyword, whitespace, number or number range.
static ROW_REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"rows?\s+(\d+(?:-\d+)?)").expect("Invalid row reference regex"));

/// Everything one annotation text says about the row it refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReference {
    /// Row number used for the table lookup.
    pub row: Option<u32>,
    /// Reference exactly as written, e.g. `38` or `47-50`.
    pub row_text: Option<String>,
    pub field: Option<CanonicalField>,
}

impl ParsedReference {
    /// Parses lower-cased, trimmed annotation text.
    pub fn parse(folded: &str, aliases: &FieldAliasTable) -> Self {
        Self {
            row: parse_lookup_row(folded),
            row_text: extract_row_text(folded).map(str::to_string),
            field: aliases.match_field(folded),
        }
    }

    /// True when the echoed reference names a range rather than one row.
    pub fn is_range(&self) -> bool {
        self.row_text.as_deref().is_some_and(|text| text.contains('-'))
    }
}

/// Captures the first `row N` / `rows N-M` reference as written.
pub fn extract_row_text(folded: &str) -> Option<&str> {
    ROW_REFERENCE_REGEX
        .captures(folded)
        .and_then(|captures| captures.get(1))
        .map(|number| number.as_str())
}

/// Finds the lookup row: the first integer token between the first and the
/// second `row` (or the end of the text when there is no second one).
///
/// Tokens are whitespace separated with surrounding `'` removed. Integers
/// may carry a sign and single underscores between digits (`1_0`). The scan
/// stops at the first integer token even when it cannot name a row (zero,
/// negative or out of range), in which case there is no lookup row.
pub fn parse_lookup_row(folded: &str) -> Option<u32> {
    let segment = folded.split("row").nth(1)?;
    let token = segment.split_whitespace().find_map(integer_token)?;
    let digits = token.strip_prefix('+').unwrap_or(token).replace('_', "");
    digits.parse::<u32>().ok().filter(|row| *row > 0)
}

/// Returns the unquoted token when it is an optionally signed decimal integer.
fn integer_token(token: &str) -> Option<&str> {
    let token = token.trim_matches('\'');
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    let is_integer = !digits.is_empty()
        && digits.split('_').all(|group| {
            !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit())
        });
    is_integer.then_some(token)
}
