//! Canonical field identifiers and the alias substrings that select them.

use std::fmt;
use std::sync::LazyLock;

/// Fields an annotation can ask for, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalField {
    Messstelle,
    Gewaessername,
    Messstellenbezeichnung,
    Datum,
    Taxon,
    Wuchsform,
}

impl CanonicalField {
    /// All fields in priority order.
    pub const ALL: [Self; 6] = [
        Self::Messstelle,
        Self::Gewaessername,
        Self::Messstellenbezeichnung,
        Self::Datum,
        Self::Taxon,
        Self::Wuchsform,
    ];

    /// Column header the field is stored under in a row record.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Messstelle => "messstelle",
            Self::Gewaessername => "gewaessername",
            Self::Messstellenbezeichnung => "messstellenbezeichnung",
            Self::Datum => "datum",
            Self::Taxon => "taxon",
            Self::Wuchsform => "wuchsform",
        }
    }

    fn default_aliases(self) -> &'static [&'static str] {
        match self {
            Self::Messstelle => &["messstelle", "messstelle_mstnr"],
            Self::Gewaessername => &["gewaessername", "gewässername"],
            Self::Messstellenbezeichnung => &["messstellenbezeichnung"],
            Self::Datum => &["datum"],
            Self::Taxon => &["taxon"],
            Self::Wuchsform => &["wuchsform"],
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static STANDARD_ALIASES: LazyLock<FieldAliasTable> = LazyLock::new(|| {
    FieldAliasTable::new(
        CanonicalField::ALL
            .iter()
            .map(|&field| (field, field.default_aliases().to_vec())),
    )
});

/// Ordered mapping from canonical field to its lower-cased alias substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAliasTable {
    entries: Vec<(CanonicalField, Vec<String>)>,
}

impl FieldAliasTable {
    /// Builds a table; entry order is the match priority. Aliases are lower-cased.
    pub fn new<I, A, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (CanonicalField, A)>,
        A: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(field, aliases)| {
                let aliases = aliases
                    .into_iter()
                    .map(|alias| alias.as_ref().to_lowercase())
                    .filter(|alias| !alias.is_empty())
                    .collect();
                (field, aliases)
            })
            .collect();
        Self { entries }
    }

    /// The process-wide table of known fields.
    pub fn standard() -> &'static Self {
        &STANDARD_ALIASES
    }

    pub fn aliases(&self, field: CanonicalField) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, aliases)| aliases.as_slice())
    }

    /// First field, in priority order, with an alias occurring in `folded`.
    ///
    /// `folded` must already be lower-cased.
    pub fn match_field(&self, folded: &str) -> Option<CanonicalField> {
        self.entries
            .iter()
            .find(|(_, aliases)| aliases.iter().any(|alias| folded.contains(alias.as_str())))
            .map(|(field, _)| *field)
    }
}

impl Default for FieldAliasTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}
