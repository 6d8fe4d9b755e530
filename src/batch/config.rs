//! Batch job configuration.
//!
//! Every path a job touches is part of its config; nothing is resolved
//! against process-wide state beyond the working directory that relative
//! paths are interpreted in.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default catalog read by the index job.
pub const DEFAULT_INDEX_INPUT: &str = "website/data/cards_ja.json";

/// Default output of the index job.
pub const DEFAULT_INDEX_OUTPUT: &str = "data/cards_ja.additional2.json";

/// Catalog stem that carries card records.
pub const DEFAULT_CARDS_STEM: &str = "cards_ja";

/// Catalogs processed by the build job when none are given.
pub const DEFAULT_CATALOGS: &[&str] = &[
    "cards_ja",
    "categories_ja",
    "products_ja",
    "illustrators_ja",
    "colors_ja",
    "types_ja",
];

/// Catalogs whose top-level keys are sorted after merging.
pub const DEFAULT_SORTED_CATALOGS: &[&str] = &["products_ja"];

/// Top-level keys removed from a catalog after merging, by stem.
pub const DEFAULT_DROPPED_KEYS: &[(&str, &str)] = &[
    ("products_ja", "products.PRカード"),
    ("types_ja", "types.null"),
];

/// JSON output layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JsonStyle {
    /// Two-space indentation, trailing newline.
    #[default]
    Pretty,
    /// Single line.
    Compact,
}

/// Configuration for building a version index from one catalog file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexJob {
    /// Catalog to read.
    pub input: PathBuf,

    /// Where the index is written. Replaced on every run.
    pub output: PathBuf,

    /// Sort printings by key before indexing so primaries do not depend
    /// on source file order.
    pub sort_keys: bool,

    /// Output layout.
    pub style: JsonStyle,
}

impl IndexJob {
    /// Create a job for explicit input and output paths.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            sort_keys: false,
            style: JsonStyle::Pretty,
        }
    }

    /// Sort printings by key before indexing.
    #[must_use]
    pub fn sorted(mut self) -> Self {
        self.sort_keys = true;
        self
    }

    /// Set the output layout.
    #[must_use]
    pub fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for IndexJob {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_INPUT, DEFAULT_INDEX_OUTPUT)
    }
}

/// Configuration for the catalog build: overlay merge plus version data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildJob {
    /// Directory holding `<stem>.json` and its overlays.
    pub data_dir: PathBuf,

    /// Directory the merged catalogs are written to.
    pub out_dir: PathBuf,

    /// Catalog stems to process, in order.
    pub catalogs: Vec<String>,

    /// Stem of the card catalog, which also receives version annotations.
    pub cards_stem: String,

    /// Catalogs whose top-level keys are sorted before writing.
    pub sorted_catalogs: BTreeSet<String>,

    /// Top-level keys removed from a catalog before writing, by stem.
    pub dropped_keys: BTreeMap<String, BTreeSet<String>>,

    /// Output layout.
    pub style: JsonStyle,
}

impl BuildJob {
    /// Create a job over the default catalogs.
    pub fn new(data_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            out_dir: out_dir.into(),
            catalogs: DEFAULT_CATALOGS.iter().map(|s| s.to_string()).collect(),
            cards_stem: DEFAULT_CARDS_STEM.to_string(),
            sorted_catalogs: DEFAULT_SORTED_CATALOGS.iter().map(|s| s.to_string()).collect(),
            dropped_keys: BTreeMap::new(),
            style: JsonStyle::Compact,
        }
        .with_dropped_keys(DEFAULT_DROPPED_KEYS.iter().copied())
    }

    /// Sort the top-level keys of `stem` before writing.
    #[must_use]
    pub fn with_sorted_catalog(mut self, stem: impl Into<String>) -> Self {
        self.sorted_catalogs.insert(stem.into());
        self
    }

    /// Remove top-level keys before writing, given as `(stem, key)` pairs.
    #[must_use]
    pub fn with_dropped_keys<I, S, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = (S, K)>,
        S: Into<String>,
        K: Into<String>,
    {
        for (stem, key) in keys {
            self.dropped_keys
                .entry(stem.into())
                .or_default()
                .insert(key.into());
        }
        self
    }

    /// Disable key sorting and key removal for every catalog.
    #[must_use]
    pub fn without_cleanup(mut self) -> Self {
        self.sorted_catalogs.clear();
        self.dropped_keys.clear();
        self
    }

    /// Check if `stem` has its keys sorted.
    #[must_use]
    pub fn sorts(&self, stem: &str) -> bool {
        self.sorted_catalogs.contains(stem)
    }

    /// Keys removed from `stem`, if any.
    #[must_use]
    pub fn dropped_keys_for(&self, stem: &str) -> Option<&BTreeSet<String>> {
        self.dropped_keys.get(stem).filter(|keys| !keys.is_empty())
    }

    /// Replace the list of catalogs.
    #[must_use]
    pub fn with_catalogs<I, S>(mut self, catalogs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalogs = catalogs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the card catalog stem.
    #[must_use]
    pub fn with_cards_stem(mut self, stem: impl Into<String>) -> Self {
        self.cards_stem = stem.into();
        self
    }

    /// Set the output layout.
    #[must_use]
    pub fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    /// Path of the main file for a catalog.
    #[must_use]
    pub fn source_path(&self, stem: &str) -> PathBuf {
        catalog_file(&self.data_dir, stem)
    }

    /// Path the merged catalog is written to.
    #[must_use]
    pub fn output_path(&self, stem: &str) -> PathBuf {
        catalog_file(&self.out_dir, stem)
    }
}

impl Default for BuildJob {
    fn default() -> Self {
        Self::new("../data", "data")
    }
}

fn catalog_file(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}.json"))
}
