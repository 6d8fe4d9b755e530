//! Batch jobs and their file I/O.
//!
//! - `IndexJob` / `run_index`: catalog file -> version index file
//! - `BuildJob` / `run_build`: catalogs + overlays -> merged catalogs,
//!   with version annotations merged into the card catalog

pub mod build;
pub mod config;
pub mod index;
pub mod json;

pub use build::{build_catalog, run_build, BuildReport};
pub use config::{BuildJob, IndexJob, JsonStyle};
pub use index::run_index;
pub use json::{read_json, write_json};
