//! Activity assignment and metadata reconciliation

mod assigner;
mod reconcile;

pub use assigner::assign;
pub use reconcile::{compute_setup_params, compute_unique_metadata};
