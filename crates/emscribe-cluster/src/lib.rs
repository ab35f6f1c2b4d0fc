//! Timestamp clustering via kernel density estimation

mod bandwidth;
mod clusterer;
mod kde;

pub use bandwidth::{log_spaced_grid, select_bandwidth};
pub use clusterer::TimestampClusterer;
pub use kde::{DensityEstimator, GaussianKde};
