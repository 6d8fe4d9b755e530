//! Printing version index.
//!
//! Groups printings that share a card id, marks the first-seen printing of
//! each card as primary and links every printing to its siblings.
//!
//! ## Invariants
//!
//! - Every catalog printing gets exactly one annotation.
//! - Each card id has exactly one primary printing.
//! - A printing never lists itself in `other_versions`.
//! - Sibling links are symmetric.

pub mod annotation;
pub mod group;
pub mod indexer;

pub use annotation::VersionAnnotation;
pub use group::{IdentifierGroup, IdentifierGroups, PrintingList};
pub use indexer::{IndexSummary, VersionIndex, VersionIndexer};
