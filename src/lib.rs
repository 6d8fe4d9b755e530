//! # ccg-versions
//!
//! Card catalog tooling: a printing version index and catalog overlay merge.
//!
//! ## Design Principles
//!
//! 1. **Order Is Data**: The primary printing of a card is the first one
//!    seen in the catalog, so catalog order is preserved from load to output.
//!
//! 2. **Pure Core**: `VersionIndexer::build` is a pure function over a
//!    `CardCatalog`. Files, directories and logging live in `batch`.
//!
//! 3. **Fail Fast**: A printing without a `card_id` stops the run before
//!    anything is written.
//!
//! ## Modules
//!
//! - `catalog`: Printing keys, card ids, records and the ordered catalog
//! - `versions`: Grouping by card id and version annotations
//! - `merge`: JSON deep merge and overlay discovery
//! - `batch`: Index and build jobs with their file I/O
//! - `error`: Crate error type

pub mod batch;
pub mod catalog;
pub mod error;
pub mod merge;
pub mod versions;

// Re-export commonly used types
pub use crate::catalog::{CardCatalog, CardId, CardRecord, PrintingKey};

pub use crate::versions::{
    IdentifierGroup, IdentifierGroups, IndexSummary, PrintingList,
    VersionAnnotation, VersionIndex, VersionIndexer,
};

pub use crate::merge::{deep_merge, discover_overlays};

pub use crate::batch::{run_build, run_index, BuildJob, BuildReport, IndexJob, JsonStyle};

pub use crate::error::{Error, Result};
