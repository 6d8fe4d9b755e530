//! Version index construction.
//!
//! `VersionIndexer::build` groups a catalog's printings by card id and
//! annotates every printing with its primary flag and its siblings.
//! The first printing seen for a card id is its primary.

use rustc_hash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use super::annotation::{siblings, VersionAnnotation};
use super::group::{IdentifierGroups, PrintingList};
use crate::catalog::{CardCatalog, PrintingKey};
use crate::error::Result;

/// Builds version indexes from catalogs.
///
/// ## Example
///
/// ```
/// use ccg_versions::catalog::{CardCatalog, CardRecord};
/// use ccg_versions::versions::VersionIndexer;
///
/// let catalog: CardCatalog = [
///     ("SV1-001", CardRecord::new().with_card_id("C1")),
///     ("SV1-002", CardRecord::new().with_card_id("C1")),
///     ("SV2-001", CardRecord::new().with_card_id("C2")),
/// ]
/// .into_iter()
/// .collect();
///
/// let index = VersionIndexer::build(&catalog).unwrap();
///
/// let primary = index.get("SV1-001").unwrap();
/// assert!(primary.is_primary);
/// assert!(primary.lists("SV1-002"));
///
/// let alternate = index.get("SV1-002").unwrap();
/// assert!(!alternate.is_primary);
/// assert!(alternate.lists("SV1-001"));
///
/// assert!(!index.get("SV2-001").unwrap().has_alternates());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct VersionIndexer;

impl VersionIndexer {
    /// Build the version index for a catalog.
    ///
    /// Fails on the first printing without a usable `card_id`; nothing is
    /// returned for the rest of the catalog in that case.
    pub fn build(catalog: &CardCatalog) -> Result<VersionIndex> {
        let groups = Self::group(catalog)?;
        Ok(Self::annotate(groups))
    }

    /// Group printing keys by card id, in catalog order.
    pub fn group(catalog: &CardCatalog) -> Result<IdentifierGroups> {
        let mut groups = IdentifierGroups::new();
        for (key, record) in catalog.iter() {
            let card_id = record.card_id(key.as_str())?;
            groups.insert(card_id, key.clone());
        }
        Ok(groups)
    }

    /// Annotate every printing of every group.
    #[must_use]
    pub fn annotate(groups: IdentifierGroups) -> VersionIndex {
        let mut index = VersionIndex {
            card_count: groups.len(),
            ..VersionIndex::default()
        };

        for group in groups {
            let keys = group.keys;
            let Some((primary, rest)) = keys.split_first() else {
                continue;
            };

            let others: PrintingList = rest.iter().cloned().collect();
            if !others.is_empty() {
                index.cards_with_alternates += 1;
            }
            index.push(
                primary.clone(),
                VersionAnnotation::primary(group.card_id.clone(), others),
            );

            for (pos, key) in keys.iter().enumerate().skip(1) {
                index.push(
                    key.clone(),
                    VersionAnnotation::alternate(group.card_id.clone(), siblings(&keys, pos)),
                );
            }
        }

        index
    }
}

/// Derived version index: printing key -> annotation.
///
/// Ordered by card (first-seen), then by position within the card.
/// Serializes as a JSON object in that order.
#[derive(Clone, Debug, Default)]
pub struct VersionIndex {
    entries: Vec<(PrintingKey, VersionAnnotation)>,
    index: FxHashMap<PrintingKey, usize>,
    card_count: usize,
    cards_with_alternates: usize,
}

impl VersionIndex {
    fn push(&mut self, key: PrintingKey, annotation: VersionAnnotation) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, annotation));
    }

    /// Get the annotation for a printing.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&VersionAnnotation> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// Number of annotated printings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no printings were annotated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct card ids.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Iterate annotations in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&PrintingKey, &VersionAnnotation)> {
        self.entries.iter().map(|(k, a)| (k, a))
    }

    /// Counts for reporting.
    #[must_use]
    pub fn summary(&self) -> IndexSummary {
        IndexSummary {
            printings: self.entries.len(),
            cards: self.card_count,
            annotations: self.entries.len(),
            cards_with_alternates: self.cards_with_alternates,
        }
    }

    /// JSON object form, in output order.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(key, annotation)| (key.as_str().to_string(), annotation.to_value()))
            .collect();
        Value::Object(map)
    }
}

impl Serialize for VersionIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, annotation) in &self.entries {
            map.serialize_entry(key, annotation)?;
        }
        map.end()
    }
}

/// Counts reported after a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct IndexSummary {
    /// Printings read from the catalog.
    pub printings: usize,
    /// Distinct card ids.
    pub cards: usize,
    /// Annotations produced.
    pub annotations: usize,
    /// Cards with more than one printing.
    pub cards_with_alternates: usize,
}

impl std::fmt::Display for IndexSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "printings read: {}", self.printings)?;
        writeln!(f, "distinct card ids: {}", self.cards)?;
        write!(f, "annotations written: {}", self.annotations)
    }
}
