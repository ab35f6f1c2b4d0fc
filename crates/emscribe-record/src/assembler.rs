//! Hierarchical record construction from reconciled activities

use crate::escape::escape_text;
use chrono::{DateTime, Utc};
use emscribe_core::{Activity, MetadataMap};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One named parameter in the assembled record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    pub value: String,
    /// Flagged as possibly unreliable by the extractor
    #[serde(default, skip_serializing_if = "is_false")]
    pub warning: bool,
}

/// One dataset (file) entry within an activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRecord {
    pub location: String,
    pub preview: String,
    pub meta: Vec<Param>,
}

/// One acquisition activity, ready for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub seq: usize,
    pub start: String,
    pub mode: String,
    pub sample_id: String,
    pub setup_params: Vec<Param>,
    pub datasets: Vec<DatasetRecord>,
}

/// The full assembled session record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub sample_id: String,
    /// Reservation/session description, pass-through from the harvester
    pub reservation: Value,
    pub activities: Vec<ActivityRecord>,
}

fn is_false(b: &bool) -> bool {
    !b
}

/// Assemble reconciled activities into an ordered session record.
///
/// Performs no I/O: preview locations are derived strings, existence
/// checks and byte serialization belong to the schema collaborator.
pub fn assemble(activities: &[Activity], sample_id: &str, reservation: Value) -> SessionRecord {
    let records = activities
        .iter()
        .enumerate()
        .map(|(seq, activity)| {
            let setup_params = sorted_params(
                activity.setup_params.as_ref().cloned().unwrap_or_default(),
                &[],
            );

            let empty = Vec::new();
            let unique = activity.unique_meta.as_ref().unwrap_or(&empty);
            let datasets = activity
                .files
                .iter()
                .enumerate()
                .map(|(i, file)| DatasetRecord {
                    location: file.path.clone(),
                    preview: preview_location(&file.path),
                    meta: sorted_params(
                        unique.get(i).cloned().unwrap_or_default(),
                        activity.warnings.get(i).map(Vec::as_slice).unwrap_or(&[]),
                    ),
                })
                .collect();

            ActivityRecord {
                seq,
                start: format_epoch(activity.start),
                mode: activity.mode.clone(),
                sample_id: sample_id.to_string(),
                setup_params,
                datasets,
            }
        })
        .collect();

    SessionRecord {
        sample_id: sample_id.to_string(),
        reservation,
        activities: records,
    }
}

/// Parameters sorted case-insensitively by key for stable output
fn sorted_params(map: MetadataMap, warning_keys: &[String]) -> Vec<Param> {
    let mut params: Vec<Param> = map
        .into_iter()
        .map(|(name, value)| {
            let warning = warning_keys.contains(&name);
            Param {
                value: render_value(&value),
                name,
                warning,
            }
        })
        .collect();
    params.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    params
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => escape_text(s),
        other => escape_text(&other.to_string()),
    }
}

/// Derived preview-location string; whether it exists is checked elsewhere
fn preview_location(path: &str) -> String {
    format!("{}.thumb.png", path)
}

fn format_epoch(epoch: f64) -> String {
    let secs = epoch.div_euclid(1.0) as i64;
    let nanos = (epoch.rem_euclid(1.0) * 1e9) as u32;
    DateTime::<Utc>::from_timestamp(secs, nanos)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .to_rfc3339()
}
