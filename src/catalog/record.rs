//! Card records - the per-printing data in a catalog.
//!
//! Records are opaque apart from `card_id`. Every other field is kept
//! as-is so a catalog can be written back out unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ids::CardId;
use crate::error::{Error, Result};

/// Field holding the logical card identifier.
pub const CARD_ID_FIELD: &str = "card_id";

/// One printing's record.
///
/// ## Example
///
/// ```
/// use ccg_versions::catalog::{CardId, CardRecord};
///
/// let record = CardRecord::new()
///     .with_card_id("C1")
///     .with_field("name", "Pikachu");
///
/// assert_eq!(record.card_id("SV1-001").unwrap(), CardId::from("C1"));
/// assert_eq!(record.get_text("name"), Some("Pikachu"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardRecord {
    fields: Map<String, Value>,
}

impl CardRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing JSON object.
    #[must_use]
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Set a field (builder pattern).
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set the card id (builder pattern).
    #[must_use]
    pub fn with_card_id(self, id: impl Into<CardId>) -> Self {
        let id = id.into();
        self.with_field(CARD_ID_FIELD, id.to_value())
    }

    /// Get a raw field value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Get a text field.
    #[must_use]
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Read the card id of this record.
    ///
    /// `key` is the printing this record belongs to and is only used for
    /// error reporting. An absent, `null` or empty-string id counts as
    /// missing.
    pub fn card_id(&self, key: &str) -> Result<CardId> {
        let value = match self.fields.get(CARD_ID_FIELD) {
            None | Some(Value::Null) => return Err(missing(key)),
            Some(Value::String(s)) if s.is_empty() => return Err(missing(key)),
            Some(value) => value,
        };
        CardId::from_value(value).ok_or_else(|| Error::InvalidCardId {
            key: key.to_string(),
            found: value.to_string(),
        })
    }

    /// Borrow all fields.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consume the record, returning its JSON object.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

fn missing(key: &str) -> Error {
    Error::MissingCardId {
        key: key.to_string(),
    }
}
