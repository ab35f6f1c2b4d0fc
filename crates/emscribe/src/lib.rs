//! Session cataloging pipeline: clustering, assignment, reconciliation, assembly

pub mod manifest;
pub mod pipeline;
