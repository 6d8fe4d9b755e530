//! Grouping of printings by card id.
//!
//! `IdentifierGroups` is an ordered multi-map: card id -> printing keys.
//! Groups are kept in first-seen order and each group lists its keys in
//! insertion order. A group is created on the first insert for its id.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::catalog::{CardId, PrintingKey};

/// Printing keys of one card. Most cards have only a handful of printings.
pub type PrintingList = SmallVec<[PrintingKey; 4]>;

/// All printings of one card id, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierGroup {
    pub card_id: CardId,
    pub keys: PrintingList,
}

impl IdentifierGroup {
    /// The first-seen printing.
    #[must_use]
    pub fn primary(&self) -> Option<&PrintingKey> {
        self.keys.first()
    }

    /// Number of printings in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// True if the group has no printings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Ordered multi-map from card id to its printings.
#[derive(Clone, Debug, Default)]
pub struct IdentifierGroups {
    groups: Vec<IdentifierGroup>,
    index: FxHashMap<CardId, usize>,
}

impl IdentifierGroups {
    /// Create an empty grouping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key` to the group for `card_id`, creating it if absent.
    pub fn insert(&mut self, card_id: CardId, key: PrintingKey) {
        match self.index.get(&card_id) {
            Some(&pos) => self.groups[pos].keys.push(key),
            None => {
                self.index.insert(card_id.clone(), self.groups.len());
                let mut keys = PrintingList::new();
                keys.push(key);
                self.groups.push(IdentifierGroup { card_id, keys });
            }
        }
    }

    /// Get the group for a card id.
    #[must_use]
    pub fn get(&self, card_id: &CardId) -> Option<&IdentifierGroup> {
        self.index.get(card_id).map(|&pos| &self.groups[pos])
    }

    /// Number of distinct card ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True if nothing has been grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total printings across all groups.
    #[must_use]
    pub fn printing_count(&self) -> usize {
        self.groups.iter().map(IdentifierGroup::len).sum()
    }

    /// Iterate groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &IdentifierGroup> {
        self.groups.iter()
    }
}

impl IntoIterator for IdentifierGroups {
    type Item = IdentifierGroup;
    type IntoIter = std::vec::IntoIter<IdentifierGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
