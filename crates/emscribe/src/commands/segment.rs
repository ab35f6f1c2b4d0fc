use emscribe::manifest::load_manifest;
use emscribe::pipeline;
use emscribe_core::ClusterConfig;
use std::path::Path;

pub fn run(manifest_path: &str, sample_id_override: Option<&str>) -> anyhow::Result<()> {
    let manifest = load_manifest(Path::new(manifest_path))?;

    let sample_id = sample_id_override
        .map(|s| s.to_string())
        .unwrap_or_else(|| manifest.sample_id.clone());
    let reservation = manifest.reservation.clone();
    let files = manifest.into_file_records();

    let record = pipeline::run(files, &sample_id, reservation, &ClusterConfig::new())?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_run_with_manifest_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "sample_id": "S-1",
                "files": [
                    {{"path": "a.dm3", "mtime": 0.0, "metadata": {{"Instrument ID": "X"}}}},
                    {{"path": "b.dm3", "mtime": 1.0, "metadata": {{"Instrument ID": "X"}}}}
                ]
            }}"#
        )
        .unwrap();

        let result = run(file.path().to_str().unwrap(), None);
        assert!(result.is_ok(), "segment should succeed: {:?}", result.err());
    }

    #[test]
    fn test_run_missing_manifest_errors() {
        let result = run("/nonexistent/manifest.json", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_empty_manifest_is_no_files_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"files": []}}"#).unwrap();

        let result = run(file.path().to_str().unwrap(), Some("S-2"));
        assert!(result.is_err(), "zero files must surface as an error");
    }
}
