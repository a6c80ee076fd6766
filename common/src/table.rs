//! Record table
//!
//! Holds the loaded records in their load order together with the
//! normalized search key of each one, computed once at construction.

use crate::types::Record;
use serde::Serialize;
use std::fmt;

/// Comparison key derived from a display name: trimmed and lowercased
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NormalizedKey(String);

impl NormalizedKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Contiguous substring test
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl AsRef<str> for NormalizedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim surrounding whitespace and lowercase
///
/// Uses Unicode lowercase mapping, so the result does not depend on the
/// process locale and accented letters keep their accents.
pub fn normalize(raw: &str) -> NormalizedKey {
    NormalizedKey(raw.trim().to_lowercase())
}

/// Read-only table of job-function records
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    records: Vec<Record>,
    keys: Vec<NormalizedKey>,
}

impl RecordTable {
    pub fn new(records: Vec<Record>) -> Self {
        let keys = records.iter().map(|r| normalize(r.name())).collect();
        Self { records, keys }
    }

    /// All records in load order
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// Records paired with their normalized key, in load order
    pub fn entries(&self) -> impl Iterator<Item = (&Record, &NormalizedKey)> {
        self.records.iter().zip(self.keys.iter())
    }

    /// Display names in load order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(Record::name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for RecordTable {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
