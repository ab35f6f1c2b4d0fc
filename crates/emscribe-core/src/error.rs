//! Pipeline error taxonomy

use thiserror::Error;

/// Errors surfaced by the segmentation pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The assigner received zero files; reflects a real absence of data
    /// in the requested range, never retried internally.
    #[error("no files found in the requested session range")]
    NoFilesInRange,

    /// No bandwidth on the cross-validation grid produced a finite score.
    /// Indicates a numerical environment problem, treated as fatal.
    #[error("bandwidth cross-validation produced no finite score over {candidates} candidates")]
    BandwidthSearch { candidates: usize },
}
