//! External credit analysis service integration.
//!
//! [`client::CreditAnalysisClient`] defines the contract; the HTTP
//! implementation treats the remote service as a black box with a fixed
//! response shape.

pub mod client;
pub mod http_client;

pub use client::{CreditAnalysis, CreditAnalysisClient};
pub use http_client::HttpCreditAnalysisClient;

#[cfg(test)]
pub use client::MockCreditAnalysisClient;
