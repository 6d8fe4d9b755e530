//! Ordered catalog of printings.
//!
//! `CardCatalog` keeps printings in the order they appear in the source
//! file. That order decides which printing becomes primary, so it must
//! survive loading.

use rustc_hash::FxHashMap;
use serde_json::{Map, Value};

use super::ids::PrintingKey;
use super::record::CardRecord;
use crate::error::{Error, Result};

/// Insertion-ordered mapping from printing key to record.
///
/// ## Example
///
/// ```
/// use ccg_versions::catalog::{CardCatalog, CardRecord};
///
/// let mut catalog = CardCatalog::new();
/// catalog.insert("SV1-002", CardRecord::new().with_card_id("C1"));
/// catalog.insert("SV1-001", CardRecord::new().with_card_id("C1"));
///
/// let keys: Vec<_> = catalog.keys().map(|k| k.as_str()).collect();
/// assert_eq!(keys, ["SV1-002", "SV1-001"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    entries: Vec<(PrintingKey, CardRecord)>,
    index: FxHashMap<PrintingKey, usize>,
}

impl CardCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a parsed JSON document.
    ///
    /// The document must be an object whose values are objects.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::from_map(map),
            _ => Err(Error::NotAnObject {
                context: "catalog".to_string(),
            }),
        }
    }

    /// Build a catalog from a JSON object, keeping its key order.
    pub fn from_map(map: Map<String, Value>) -> Result<Self> {
        let mut catalog = Self::new();
        for (key, record) in map {
            match record {
                Value::Object(fields) => {
                    catalog.insert(key, CardRecord::from_map(fields));
                }
                _ => {
                    return Err(Error::NotAnObject {
                        context: format!("record {key:?}"),
                    })
                }
            }
        }
        Ok(catalog)
    }

    /// Parse a catalog from JSON text. `context` names the source in errors.
    pub fn from_json_str(json: &str, context: &str) -> Result<Self> {
        let value = serde_json::from_str(json).map_err(|source| Error::MalformedInput {
            context: context.to_string(),
            source,
        })?;
        Self::from_value(value)
    }

    /// Insert a printing.
    ///
    /// A new key goes to the end. An existing key keeps its position and
    /// its record is replaced; the previous record is returned.
    pub fn insert(&mut self, key: impl Into<PrintingKey>, record: CardRecord) -> Option<CardRecord> {
        let key = key.into();
        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, record));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, record));
        None
    }

    /// Get a record by printing key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CardRecord> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Check if a printing key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Number of printings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate printings in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&PrintingKey, &CardRecord)> {
        self.entries.iter().map(|(k, r)| (k, r))
    }

    /// Iterate printing keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &PrintingKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Reorder printings by key.
    ///
    /// Primaries are chosen by position, so sorting first makes them
    /// independent of how the source file happened to be ordered.
    #[must_use]
    pub fn sorted_by_key(mut self) -> Self {
        self.entries.sort_by(|a, b| a.0.cmp(&b.0));
        self.index = self
            .entries
            .iter()
            .enumerate()
            .map(|(pos, (key, _))| (key.clone(), pos))
            .collect();
        self
    }

    /// Convert back into a JSON object in catalog order.
    #[must_use]
    pub fn into_value(self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .into_iter()
            .map(|(key, record)| (key.into_string(), Value::Object(record.into_map())))
            .collect();
        Value::Object(map)
    }
}

impl<K: Into<PrintingKey>> FromIterator<(K, CardRecord)> for CardCatalog {
    fn from_iter<I: IntoIterator<Item = (K, CardRecord)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (key, record) in iter {
            catalog.insert(key, record);
        }
        catalog
    }
}
