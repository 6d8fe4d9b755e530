//! Identifiers used by the card catalog.
//!
//! A `PrintingKey` names one numbered printing of a card (e.g. `"SV1-001"`).
//! A `CardId` names the logical card shared by all of its printings.
//! Many printings map to one card id.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key of one printing in the catalog.
///
/// Unique within a catalog; this is the key of the source JSON object.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrintingKey(String);

impl PrintingKey {
    /// Create a new printing key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, returning the owned string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PrintingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PrintingKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PrintingKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for PrintingKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Logical card identifier shared by every printing of the same card.
///
/// Catalogs carry ids either as strings or as integers; the original
/// representation is kept so output matches input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardId {
    Text(String),
    Number(i64),
}

impl CardId {
    /// Read a card id from a JSON value.
    ///
    /// Returns `None` for values that cannot identify a card
    /// (non-integer numbers, booleans, arrays, objects, null).
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(CardId::Text(s.clone())),
            Value::Number(n) => n.as_i64().map(CardId::Number),
            _ => None,
        }
    }

    /// Convert back to the JSON value it was read from.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            CardId::Text(s) => Value::String(s.clone()),
            CardId::Number(n) => Value::from(*n),
        }
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardId::Text(s) => f.write_str(s),
            CardId::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        CardId::Text(id.to_string())
    }
}

impl From<i64> for CardId {
    fn from(id: i64) -> Self {
        CardId::Number(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_printing_key() {
        let key = PrintingKey::new("SV1-001");
        assert_eq!(key.as_str(), "SV1-001");
        assert_eq!(format!("{}", key), "SV1-001");
        assert_eq!(key.into_string(), "SV1-001");
    }

    #[test]
    fn test_card_id_from_value() {
        assert_eq!(CardId::from_value(&json!("C1")), Some(CardId::from("C1")));
        assert_eq!(CardId::from_value(&json!(42)), Some(CardId::Number(42)));
        assert_eq!(CardId::from_value(&json!(1.5)), None);
        assert_eq!(CardId::from_value(&json!(true)), None);
        assert_eq!(CardId::from_value(&json!(null)), None);
    }

    #[test]
    fn test_card_id_keeps_representation() {
        assert_eq!(CardId::from("7").to_value(), json!("7"));
        assert_eq!(CardId::Number(7).to_value(), json!(7));
        assert_ne!(CardId::from("7"), CardId::Number(7));
    }

    #[test]
    fn test_card_id_serialization() {
        let text = serde_json::to_string(&CardId::from("C1")).unwrap();
        let number = serde_json::to_string(&CardId::Number(3)).unwrap();
        assert_eq!(text, "\"C1\"");
        assert_eq!(number, "3");

        let back: CardId = serde_json::from_str(&number).unwrap();
        assert_eq!(back, CardId::Number(3));
    }
}
