//! Shared data model, configuration, and error taxonomy for session cataloging

mod config;
mod error;
mod types;

pub use config::ClusterConfig;
pub use error::PipelineError;
pub use types::{Activity, FileRecord, MetadataMap, WARNINGS_KEY};
