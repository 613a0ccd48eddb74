//! Repository trait for card holder data access.

use crate::domain::entities::{ActiveCardHolder, CardHolder, Status};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for managing card holders.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCardHolderRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardHolderRepository: Send + Sync {
    /// Persists an activated card holder and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CardHolderAlreadyRegistered`] when the
    /// (client_id, credit_analysis_id) pair is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, card_holder: ActiveCardHolder) -> Result<CardHolder, AppError>;

    /// Finds a card holder by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CardHolder>, AppError>;

    /// Lists every registered card holder.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all(&self) -> Result<Vec<CardHolder>, AppError>;

    /// Lists card holders with the given status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all_by_status(&self, status: Status) -> Result<Vec<CardHolder>, AppError>;
}
