//! Repository trait for credit card data access.

use crate::domain::entities::{CreditCard, NewCreditCard};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for managing credit cards.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCreditCardRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreditCardRepository: Send + Sync {
    /// Persists a new credit card and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn save(&self, new_card: NewCreditCard) -> Result<CreditCard, AppError>;

    /// Lists all credit cards issued under the given card holder.
    ///
    /// Returns an empty list when the holder has no cards; translating the
    /// empty case into an error is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_all_by_card_holder_id(
        &self,
        card_holder_id: Uuid,
    ) -> Result<Vec<CreditCard>, AppError>;
}
