//! JSON file output for one aggregation run.
//!
//! Serializes the consolidated item list for consumption by other tools
//! (archival, a web front end, diffing between runs).

use crate::models::AggregationResult;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Write the run's items as a JSON array to `path`.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn write_items(result: &AggregationResult, path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(&result.items)?;
    fs::write(path, json).await?;
    info!(count = result.items.len(), "Wrote items JSON");
    Ok(())
}
