//! Per-printing version annotations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::group::PrintingList;
use crate::catalog::{CardId, PrintingKey};

/// Version info for one printing.
///
/// Serializes as `{"is_primary": .., "card_id": .., "other_versions": [..]}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionAnnotation {
    /// True iff this is the first-seen printing of its card.
    pub is_primary: bool,

    /// Card id shared with the siblings.
    pub card_id: CardId,

    /// Every other printing of the same card, in catalog order.
    pub other_versions: PrintingList,
}

impl VersionAnnotation {
    /// Annotation for the primary printing.
    #[must_use]
    pub fn primary(card_id: CardId, other_versions: PrintingList) -> Self {
        Self {
            is_primary: true,
            card_id,
            other_versions,
        }
    }

    /// Annotation for a non-primary printing.
    #[must_use]
    pub fn alternate(card_id: CardId, other_versions: PrintingList) -> Self {
        Self {
            is_primary: false,
            card_id,
            other_versions,
        }
    }

    /// True if the card has more than one printing.
    #[must_use]
    pub fn has_alternates(&self) -> bool {
        !self.other_versions.is_empty()
    }

    /// True if `key` is listed as a sibling.
    #[must_use]
    pub fn lists(&self, key: &str) -> bool {
        self.other_versions.iter().any(|k| k.as_str() == key)
    }

    /// Write the annotation fields into a record, replacing any previous
    /// values of those fields.
    pub fn apply_to(&self, record: &mut Map<String, Value>) {
        record.insert("is_primary".to_string(), Value::Bool(self.is_primary));
        record.insert("card_id".to_string(), self.card_id.to_value());
        record.insert(
            "other_versions".to_string(),
            Value::Array(
                self.other_versions
                    .iter()
                    .map(|k| Value::String(k.as_str().to_string()))
                    .collect(),
            ),
        );
    }

    /// JSON object form.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        self.apply_to(&mut map);
        Value::Object(map)
    }
}

/// Sibling list for the printing at `pos`: every key in the group but that one.
pub(crate) fn siblings(keys: &[PrintingKey], pos: usize) -> PrintingList {
    keys.iter()
        .enumerate()
        .filter(|&(i, _)| i != pos)
        .map(|(_, k)| k.clone())
        .collect()
}
