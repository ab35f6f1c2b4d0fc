//! Configuration for timestamp clustering

/// Tuning knobs for the clustering stage
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// Number of candidate bandwidths on the log-spaced grid
    pub bandwidth_grid_size: usize,

    /// Density sample points per distinct timestamp
    pub samples_per_point: usize,
}

impl ClusterConfig {
    pub fn new() -> Self {
        Self {
            bandwidth_grid_size: 35,
            samples_per_point: 10,
        }
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self::new()
    }
}
