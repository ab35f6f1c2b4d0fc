//! Session manifest loading (discovery output plus harvester fields)

use emscribe_core::{FileRecord, MetadataMap};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// One discovered file with its extracted metadata
#[derive(Debug, Deserialize)]
pub struct ManifestFile {
    pub path: String,
    pub mtime: f64,
    #[serde(default)]
    pub metadata: MetadataMap,
}

/// Everything the pipeline needs for one session
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub sample_id: String,
    /// Opaque reservation description from the harvester
    #[serde(default)]
    pub reservation: Value,
    pub files: Vec<ManifestFile>,
}

impl Manifest {
    pub fn into_file_records(self) -> Vec<FileRecord> {
        self.files
            .into_iter()
            .map(|f| FileRecord::new(f.path, f.mtime, f.metadata))
            .collect()
    }
}

pub fn load_manifest(path: &Path) -> anyhow::Result<Manifest> {
    let contents = std::fs::read_to_string(path)?;
    let manifest: Manifest = serde_json::from_str(&contents)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_manifest_parses_full() {
        let raw = r#"{
            "sample_id": "S-42",
            "reservation": {"title": "afternoon block"},
            "files": [
                {"path": "a.dm3", "mtime": 1.5, "metadata": {"DatasetType": "Image"}}
            ]
        }"#;
        let manifest: Manifest = serde_json::from_str(raw).unwrap();
        assert_eq!(manifest.sample_id, "S-42");
        assert_eq!(manifest.files.len(), 1);

        let files = manifest.into_file_records();
        assert_eq!(files[0].path, "a.dm3");
        assert_eq!(files[0].mtime, 1.5);
        assert_eq!(files[0].metadata.get("DatasetType"), Some(&json!("Image")));
    }

    #[test]
    fn test_manifest_defaults() {
        let raw = r#"{"files": []}"#;
        let manifest: Manifest = serde_json::from_str(raw).unwrap();
        assert_eq!(manifest.sample_id, "");
        assert_eq!(manifest.reservation, Value::Null);
        assert!(manifest.files.is_empty());
    }

    #[test]
    fn test_load_manifest_missing_file_errors() {
        let result = load_manifest(Path::new("/nonexistent/manifest.json"));
        assert!(result.is_err());
    }
}
