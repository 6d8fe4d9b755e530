//! The version index job: catalog file in, annotation file out.

use tracing::{debug, info};

use super::config::IndexJob;
use super::json::{read_json, write_json};
use crate::catalog::CardCatalog;
use crate::error::Result;
use crate::versions::{IndexSummary, VersionIndexer};

/// Read the catalog, build its version index and write it out.
///
/// On any error nothing is written and the previous output is left alone.
pub fn run_index(job: &IndexJob) -> Result<IndexSummary> {
    info!(input = %job.input.display(), "loading catalog");
    let mut catalog = CardCatalog::from_value(read_json(&job.input)?)?;
    if job.sort_keys {
        debug!("sorting printings by key");
        catalog = catalog.sorted_by_key();
    }

    let index = VersionIndexer::build(&catalog)?;
    let summary = index.summary();
    debug!(
        cards = summary.cards,
        with_alternates = summary.cards_with_alternates,
        "grouped printings"
    );

    write_json(&job.output, &index, job.style)?;
    info!(
        output = %job.output.display(),
        annotations = summary.annotations,
        "wrote version index"
    );
    Ok(summary)
}
