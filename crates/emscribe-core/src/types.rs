//! Core types for acquisition-activity segmentation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Flat per-file metadata mapping as produced by the extractor
pub type MetadataMap = HashMap<String, Value>;

/// Reserved metadata key holding extractor-flagged suspect key paths
pub const WARNINGS_KEY: &str = "warnings";

/// One data file observed during an instrument session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Opaque file identifier (path as reported by discovery)
    pub path: String,
    /// Modification time, seconds since epoch
    pub mtime: f64,
    /// Extracted metadata, always present (possibly minimal on corrupt input)
    pub metadata: MetadataMap,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, mtime: f64, metadata: MetadataMap) -> Self {
        Self {
            path: path.into(),
            mtime,
            metadata,
        }
    }

    /// Extractor warnings for this file, if any were flagged
    pub fn warning_keys(&self) -> Vec<String> {
        match self.metadata.get(WARNINGS_KEY) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// A contiguous, time-bounded group of files from one phase of operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Mtime of the earliest member file
    pub start: f64,
    /// Mtime of the latest member file
    pub end: f64,
    /// Free-text classification, derived outside the reconciler
    #[serde(default)]
    pub mode: String,
    /// Member files, ascending by mtime (discovery order)
    pub files: Vec<FileRecord>,
    /// Values shared verbatim by every member file; `None` until reconciled
    #[serde(default)]
    pub setup_params: Option<MetadataMap>,
    /// Per-file complement of `setup_params`, same order as `files`
    #[serde(default)]
    pub unique_meta: Option<Vec<MetadataMap>>,
    /// Extractor warning key-paths per file, same order as `files`
    #[serde(default)]
    pub warnings: Vec<Vec<String>>,
}

impl Activity {
    /// Start a new activity from its first file
    pub fn starting_with(file: FileRecord) -> Self {
        let start = file.mtime;
        let warnings = vec![file.warning_keys()];
        Self {
            start,
            end: start,
            mode: String::new(),
            files: vec![file],
            setup_params: None,
            unique_meta: None,
            warnings,
        }
    }

    /// Append a later file, refreshing the end timestamp
    pub fn push(&mut self, file: FileRecord) {
        self.end = file.mtime;
        self.warnings.push(file.warning_keys());
        self.files.push(file);
    }
}
