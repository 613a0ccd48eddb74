//! Card holder registration and lookup service.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{CardHolder, NewCardHolder, Status};
use crate::domain::repositories::CardHolderRepository;
use crate::error::AppError;
use crate::infrastructure::credit_analysis::{CreditAnalysis, CreditAnalysisClient};

/// Service orchestrating card holder creation and read operations.
///
/// Creation verifies the requested credit analysis with the external service
/// before the holder is activated and persisted; a holder is never stored in
/// an inactive or limitless state.
pub struct CardHolderService {
    credit_analysis_client: Arc<dyn CreditAnalysisClient>,
    card_holder_repository: Arc<dyn CardHolderRepository>,
}

impl CardHolderService {
    /// Creates a new card holder service.
    pub fn new(
        credit_analysis_client: Arc<dyn CreditAnalysisClient>,
        card_holder_repository: Arc<dyn CardHolderRepository>,
    ) -> Self {
        Self {
            credit_analysis_client,
            card_holder_repository,
        }
    }

    /// Registers a new card holder.
    ///
    /// The referenced credit analysis must exist, belong to the same client,
    /// and be approved. On success the holder is activated with the approved
    /// limit and persisted.
    ///
    /// # Errors
    ///
    /// - [`AppError::CreditAnalysisNotFound`] when no analysis exists for the id
    /// - [`AppError::ClientDoesNotCorrespondToCreditAnalysis`] on client mismatch
    /// - [`AppError::CreditAnalysisNotApproved`] when the analysis was rejected
    /// - [`AppError::CardHolderAlreadyRegistered`] on duplicate registration
    pub async fn create_card_holder(
        &self,
        new_card_holder: NewCardHolder,
    ) -> Result<CardHolder, AppError> {
        let analysis = self.verified_credit_analysis(&new_card_holder).await?;

        let approved_limit = analysis.approved_limit.ok_or_else(|| {
            AppError::internal("Credit analysis response is missing the approved limit")
        })?;

        let active = new_card_holder.activate(approved_limit);
        self.card_holder_repository.save(active).await
    }

    /// Fetches the credit analysis and checks it against the request.
    ///
    /// The checks run in a fixed order: existence, client ownership, approval.
    async fn verified_credit_analysis(
        &self,
        new_card_holder: &NewCardHolder,
    ) -> Result<CreditAnalysis, AppError> {
        let analysis = self
            .credit_analysis_client
            .get_credit_analysis_by_id(new_card_holder.credit_analysis_id)
            .await?;

        let Some(analysis_id) = analysis.id else {
            return Err(AppError::credit_analysis_not_found(format!(
                "Credit analysis not found by id {}",
                new_card_holder.credit_analysis_id
            )));
        };

        if analysis.client_id != Some(new_card_holder.client_id) {
            return Err(AppError::client_does_not_correspond(format!(
                "clientId {} does not correspond to credit analysisId {}",
                new_card_holder.client_id, analysis_id
            )));
        }

        if analysis.approved == Some(false) {
            return Err(AppError::credit_analysis_not_approved(format!(
                "The credit analysis {} wasn't approved",
                new_card_holder.credit_analysis_id
            )));
        }

        Ok(analysis)
    }

    /// Lists every registered card holder. No filter, no pagination.
    pub async fn get_all_card_holders(&self) -> Result<Vec<CardHolder>, AppError> {
        self.card_holder_repository.find_all().await
    }

    /// Lists card holders filtered by status, parsed case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCardHolderStatus`] for an unrecognized
    /// status string.
    pub async fn get_all_card_holders_by_status(
        &self,
        status_request: &str,
    ) -> Result<Vec<CardHolder>, AppError> {
        let status: Status = status_request.parse().map_err(|_| {
            AppError::invalid_card_holder_status("The informed card holder status is invalid.")
        })?;

        self.card_holder_repository.find_all_by_status(status).await
    }

    /// Fetches a single card holder by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CardHolderNotFound`] when no record exists.
    pub async fn get_card_holder_by_id(&self, id: Uuid) -> Result<CardHolder, AppError> {
        self.card_holder_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::card_holder_not_found(format!("Card Holder not found by id {id}"))
            })
    }
}
