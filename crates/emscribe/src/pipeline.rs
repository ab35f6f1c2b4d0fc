//! End-to-end wiring: Clusterer -> Assigner -> Reconciler -> Assembler

use emscribe_activity::{assign, compute_setup_params, compute_unique_metadata};
use emscribe_cluster::TimestampClusterer;
use emscribe_core::{Activity, ClusterConfig, FileRecord, MetadataMap, PipelineError};
use emscribe_record::{assemble, SessionRecord};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Per-path metadata extraction seam (binary-format parsing lives behind it)
pub trait MetadataExtractor {
    fn extract(&self, path: &str) -> anyhow::Result<MetadataMap>;
}

/// Build `FileRecord`s from discovered `(path, mtime)` pairs.
///
/// A file whose extraction fails is logged and excluded; this is a soft
/// per-file failure, not a pipeline fault. Output is sorted ascending by
/// mtime, as the assigner requires.
pub fn materialize_files<E: MetadataExtractor>(
    extractor: &E,
    discovered: &[(String, f64)],
) -> Vec<FileRecord> {
    let mut files = Vec::with_capacity(discovered.len());
    for (path, mtime) in discovered {
        match extractor.extract(path) {
            Ok(metadata) => files.push(FileRecord::new(path.clone(), *mtime, metadata)),
            Err(err) => {
                warn!(path = %path, error = %err, "metadata extraction failed, excluding file")
            }
        }
    }
    files.sort_by(|a, b| a.mtime.partial_cmp(&b.mtime).unwrap_or(std::cmp::Ordering::Equal));
    files
}

/// Run the full segmentation pipeline over one session's files.
pub fn run(
    mut files: Vec<FileRecord>,
    sample_id: &str,
    reservation: Value,
    config: &ClusterConfig,
) -> Result<SessionRecord, PipelineError> {
    if files.is_empty() {
        return Err(PipelineError::NoFilesInRange);
    }
    files.sort_by(|a, b| a.mtime.partial_cmp(&b.mtime).unwrap_or(std::cmp::Ordering::Equal));

    let mtimes: Vec<f64> = files.iter().map(|f| f.mtime).collect();
    let clusterer = TimestampClusterer::new(config.clone());
    let boundaries = clusterer.cluster(&mtimes)?;
    debug!(
        files = mtimes.len(),
        boundaries = boundaries.len(),
        "clustered session timestamps"
    );

    let mut activities = assign(files, &boundaries)?;
    for activity in &mut activities {
        activity.mode = dominant_mode(activity);
        compute_setup_params(activity);
        compute_unique_metadata(activity);
    }

    Ok(assemble(&activities, sample_id, reservation))
}

/// Most frequent `DatasetType` value among an activity's files, ties
/// broken by first occurrence.
fn dominant_mode(activity: &Activity) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for file in &activity.files {
        if let Some(kind) = file.metadata.get("DatasetType").and_then(|v| v.as_str()) {
            let count = counts.entry(kind).or_insert(0);
            if *count == 0 {
                order.push(kind);
            }
            *count += 1;
        }
    }
    // min_by_key keeps the first of equal elements, so ties resolve to
    // the earliest-seen type
    order
        .iter()
        .min_by_key(|kind| std::cmp::Reverse(counts.get(*kind).copied().unwrap_or(0)))
        .map(|kind| kind.to_string())
        .unwrap_or_default()
}
