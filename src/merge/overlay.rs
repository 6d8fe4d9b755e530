//! Discovery of catalog overlay files.
//!
//! An overlay for catalog `<stem>` is any `<stem>.additional*.json` file
//! next to `<stem>.json`. Overlays are applied in file-name order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Check if `file_name` is an overlay of catalog `stem`.
#[must_use]
pub fn is_overlay(file_name: &str, stem: &str) -> bool {
    file_name != format!("{stem}.json")
        && file_name.ends_with(".json")
        && file_name
            .strip_prefix(stem)
            .is_some_and(|rest| rest.starts_with(".additional"))
}

/// List the overlays of catalog `stem` in `dir`, sorted by file name.
pub fn discover_overlays(dir: &Path, stem: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut overlays = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if is_overlay(name, stem) && entry.path().is_file() {
            overlays.push(entry.path());
        }
    }
    overlays.sort();
    Ok(overlays)
}
