//! Ordered token collection

use super::record::TokenRecord;
use super::value::has_reference_delimiter;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Token records keyed by dotted path, in source traversal order
///
/// Iteration order is the order in which keys were first inserted. Inserting a record whose key
/// already exists replaces it in place, so a later source document can override an earlier one
/// without moving the token in the style-sheet output.
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    records: Vec<TokenRecord>,
    index: HashMap<String, usize>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced (if any)
    pub fn insert(&mut self, record: TokenRecord) -> Option<TokenRecord> {
        let key = record.key();
        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.records[position], record)),
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    /// Look up a record by its dotted key
    pub fn get(&self, key: &str) -> Option<&TokenRecord> {
        self.index.get(key).map(|&position| &self.records[position])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TokenRecord> {
        self.records.iter()
    }

    /// Dotted keys in iteration order
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(TokenRecord::key)
    }

    /// Whether any string value still contains the reference-open delimiter
    pub fn has_reference_delimiters(&self) -> bool {
        self.records
            .iter()
            .any(|record| has_reference_delimiter(&record.value))
    }
}

impl PartialEq for TokenSet {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl FromIterator<TokenRecord> for TokenSet {
    fn from_iter<T: IntoIterator<Item = TokenRecord>>(iter: T) -> Self {
        let mut set = TokenSet::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a TokenRecord;
    type IntoIter = std::slice::Iter<'a, TokenRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serializes as a JSON object keyed by dotted path, preserving order
impl Serialize for TokenSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.key(), record)?;
        }
        map.end()
    }
}
