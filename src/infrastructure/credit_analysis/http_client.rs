//! HTTP implementation of the credit analysis client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use uuid::Uuid;

use crate::error::AppError;
use crate::infrastructure::credit_analysis::client::{CreditAnalysis, CreditAnalysisClient};

/// Calls the remote credit analysis service over HTTP.
///
/// `GET {base_url}/v1/credit-analysis/{id}`. A 404 answer is decoded into
/// [`CreditAnalysis::not_found`] so the service layer owns the not-found
/// decision. No request timeout is configured.
pub struct HttpCreditAnalysisClient {
    client: Client,
    base_url: String,
}

impl HttpCreditAnalysisClient {
    /// Creates a new client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CreditAnalysisClient for HttpCreditAnalysisClient {
    async fn get_credit_analysis_by_id(&self, id: Uuid) -> Result<CreditAnalysis, AppError> {
        let url = format!(
            "{}/v1/credit-analysis/{}",
            self.base_url.trim_end_matches('/'),
            id
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!(error = %e, %id, "credit analysis request failed");
            AppError::internal("Credit analysis service unavailable")
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(CreditAnalysis::not_found());
        }

        if !response.status().is_success() {
            tracing::error!(status = %response.status(), %id, "unexpected credit analysis status");
            return Err(AppError::internal(format!(
                "Credit analysis service answered with status {}",
                response.status()
            )));
        }

        response.json::<CreditAnalysis>().await.map_err(|e| {
            tracing::error!(error = %e, %id, "invalid credit analysis payload");
            AppError::internal("Invalid credit analysis response payload")
        })
    }
}
