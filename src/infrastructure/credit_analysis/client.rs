//! Credit analysis service contract.

use crate::error::AppError;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

/// Credit analysis record returned by the remote service.
///
/// Every field is optional because the remote payload for a missing analysis
/// is empty; a `None` id signals "not found".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditAnalysis {
    pub id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub approved: Option<bool>,
    pub approved_limit: Option<Decimal>,
}

impl CreditAnalysis {
    /// The record the service produces when no analysis exists for an id.
    pub fn not_found() -> Self {
        Self::default()
    }
}

/// Client interface for the external credit analysis service.
///
/// # Implementations
///
/// - [`crate::infrastructure::credit_analysis::HttpCreditAnalysisClient`] - HTTP implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreditAnalysisClient: Send + Sync {
    /// Fetches a credit analysis by id.
    ///
    /// A missing analysis is reported through a record with a `None` id,
    /// mirroring the remote contract, not through an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the remote service is unreachable
    /// or answers with an unexpected status or payload.
    async fn get_credit_analysis_by_id(&self, id: Uuid) -> Result<CreditAnalysis, AppError>;
}
