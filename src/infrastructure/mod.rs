//! Infrastructure layer: database repositories and external service clients.

pub mod credit_analysis;
pub mod persistence;
