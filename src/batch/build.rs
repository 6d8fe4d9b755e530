//! The catalog build job.
//!
//! For each catalog: load `<stem>.json`, deep-merge its overlays, and for
//! the card catalog write in the version annotations built from the
//! merged data. Configured keys are then dropped or sorted and the
//! result goes to the output directory.

use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::config::BuildJob;
use super::json::{read_json, write_json};
use crate::catalog::CardCatalog;
use crate::error::Result;
use crate::merge::{deep_merge, discover_overlays};
use crate::versions::{IndexSummary, VersionIndex, VersionIndexer};

/// Outcome of building one catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Catalog stem.
    pub stem: String,
    /// Overlays merged, in order.
    pub overlays_applied: Vec<PathBuf>,
    /// Overlays that could not be read or parsed.
    pub overlays_skipped: Vec<PathBuf>,
    /// Top-level entries in the written catalog.
    pub records: usize,
    /// Version index counts, for the card catalog only.
    pub versions: Option<IndexSummary>,
    /// Where the catalog was written.
    pub output: PathBuf,
}

/// Build every catalog named by the job, stopping at the first failure.
pub fn run_build(job: &BuildJob) -> Result<Vec<BuildReport>> {
    job.catalogs
        .iter()
        .map(|stem| build_catalog(job, stem))
        .collect()
}

/// Build a single catalog.
pub fn build_catalog(job: &BuildJob, stem: &str) -> Result<BuildReport> {
    let mut report = BuildReport {
        stem: stem.to_string(),
        output: job.output_path(stem),
        ..BuildReport::default()
    };

    let mut content = read_json(&job.source_path(stem))?;

    for overlay in discover_overlays(&job.data_dir, stem)? {
        match read_json(&overlay) {
            Ok(extra) => {
                deep_merge(&mut content, extra);
                info!(overlay = %overlay.display(), "merged overlay");
                report.overlays_applied.push(overlay);
            }
            Err(err) => {
                warn!(overlay = %overlay.display(), error = %err, "skipping overlay");
                report.overlays_skipped.push(overlay);
            }
        }
    }

    if stem == job.cards_stem {
        let catalog = CardCatalog::from_value(content)?;
        let index = VersionIndexer::build(&catalog)?;
        let summary = index.summary();
        info!(
            cards = summary.cards,
            printings = summary.printings,
            "generated version data"
        );

        content = catalog.into_value();
        apply_versions(&mut content, &index);
        report.versions = Some(summary);
    }

    content = clean_up(job, stem, content);

    report.records = match &content {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        _ => 1,
    };

    write_json(&report.output, &content, job.style)?;
    info!(stem, records = report.records, "catalog written");
    Ok(report)
}

/// Write each annotation into its record.
///
/// Annotation fields replace earlier values, so version data already
/// present in an overlay is not duplicated.
fn apply_versions(content: &mut Value, index: &VersionIndex) {
    let Value::Object(records) = content else {
        return;
    };
    for (key, annotation) in index.iter() {
        if let Some(Value::Object(record)) = records.get_mut(key.as_str()) {
            annotation.apply_to(record);
        }
    }
}

/// Drop configured keys, then sort if the catalog is configured for it.
fn clean_up(job: &BuildJob, stem: &str, content: Value) -> Value {
    let map = match content {
        Value::Object(map) => map,
        other => return other,
    };

    let dropped = job.dropped_keys_for(stem);
    let mut entries: Vec<(String, Value)> = map
        .into_iter()
        .filter(|(key, _)| {
            let drop = dropped.is_some_and(|keys| keys.contains(key));
            if drop {
                debug!(stem, key = key.as_str(), "dropping key");
            }
            !drop
        })
        .collect();

    if job.sorts(stem) {
        entries.sort_by(|a, b| a.0.cmp(&b.0));
    }

    Value::Object(entries.into_iter().collect::<Map<String, Value>>())
}
