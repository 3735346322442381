//! Row records keyed by spreadsheet row number.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Column values present for one spreadsheet row, in column order.
///
/// Absent columns mean "no data"; a record never holds an empty value
/// produced by the row table builder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    entries: Vec<(String, String)>,
}

impl RowRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`.
    ///
    /// A key seen before keeps its original position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(column, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for RowRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl Serialize for RowRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Spreadsheet rows keyed by their original 1-based row number.
///
/// The header row is never present, so the smallest possible key is 2.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct RowTable {
    rows: BTreeMap<u32, RowRecord>,
}

impl RowTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, row: u32, record: RowRecord) {
        self.rows.insert(row, record);
    }

    pub fn get(&self, row: u32) -> Option<&RowRecord> {
        self.rows.get(&row)
    }

    pub fn contains_row(&self, row: u32) -> bool {
        self.rows.contains_key(&row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates rows in ascending row number.
    pub fn iter(&self) -> btree_map::Iter<'_, u32, RowRecord> {
        self.rows.iter()
    }
}

impl FromIterator<(u32, RowRecord)> for RowTable {
    fn from_iter<I: IntoIterator<Item = (u32, RowRecord)>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RowTable {
    type Item = (&'a u32, &'a RowRecord);
    type IntoIter = btree_map::Iter<'a, u32, RowRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
