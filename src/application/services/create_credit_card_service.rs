//! Credit card issuing service.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{CreditCard, NewCreditCard};
use crate::domain::repositories::{CardHolderRepository, CreditCardRepository};
use crate::error::AppError;

/// Issues credit cards under an existing card holder, enforcing that a card
/// limit never exceeds the holder's approved credit limit.
pub struct CreateCreditCardService {
    card_holder_repository: Arc<dyn CardHolderRepository>,
    credit_card_repository: Arc<dyn CreditCardRepository>,
}

impl CreateCreditCardService {
    /// Creates a new credit card issuing service.
    pub fn new(
        card_holder_repository: Arc<dyn CardHolderRepository>,
        credit_card_repository: Arc<dyn CreditCardRepository>,
    ) -> Self {
        Self {
            card_holder_repository,
            credit_card_repository,
        }
    }

    /// Issues a credit card for the holder addressed by the request path.
    ///
    /// The path/body id consistency check runs before any lookup. A requested
    /// limit strictly greater than the holder's limit is rejected; a limit
    /// equal to it is accepted.
    ///
    /// # Errors
    ///
    /// - [`AppError::PathCardHolderDoesNotMatchRequestCardHolder`] when the
    ///   path id differs from the body id
    /// - [`AppError::CardHolderNotFound`] when the holder does not exist
    /// - [`AppError::RequestedCardLimitUnavailable`] when the requested limit
    ///   exceeds the holder's credit limit
    pub async fn create_credit_card(
        &self,
        path_card_holder_id: Uuid,
        new_card: NewCreditCard,
    ) -> Result<CreditCard, AppError> {
        if path_card_holder_id != new_card.card_holder_id {
            return Err(AppError::path_card_holder_mismatch(
                "Path cardHolderId doesn't match body cardHolderId",
            ));
        }

        let card_holder = self
            .card_holder_repository
            .find_by_id(new_card.card_holder_id)
            .await?
            .ok_or_else(|| {
                AppError::card_holder_not_found(format!(
                    "Card Holder not found by id {}",
                    new_card.card_holder_id
                ))
            })?;

        if new_card.limit > card_holder.credit_limit {
            return Err(AppError::requested_card_limit_unavailable(format!(
                "Requested limit {} is greater than available limit {}.",
                new_card.limit, card_holder.credit_limit
            )));
        }

        self.credit_card_repository.save(new_card).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CardHolder, Status};
    use crate::domain::repositories::{MockCardHolderRepository, MockCreditCardRepository};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn holder_with_limit(id: Uuid, credit_limit: Decimal) -> CardHolder {
        CardHolder {
            id,
            client_id: Uuid::new_v4(),
            credit_analysis_id: Uuid::new_v4(),
            status: Status::Active,
            credit_limit,
            bank_account: None,
            created_at: Utc::now(),
        }
    }

    fn service_with(
        holder_repo: MockCardHolderRepository,
        card_repo: MockCreditCardRepository,
    ) -> CreateCreditCardService {
        CreateCreditCardService::new(Arc::new(holder_repo), Arc::new(card_repo))
    }

    #[tokio::test]
    async fn test_create_credit_card_succeeds_within_limit() {
        let holder_id = Uuid::new_v4();

        let mut holder_repo = MockCardHolderRepository::new();
        holder_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(holder_with_limit(id, Decimal::new(100_000, 2)))));

        let mut card_repo = MockCreditCardRepository::new();
        card_repo.expect_save().returning(|new_card| {
            Ok(CreditCard {
                id: Uuid::new_v4(),
                card_holder_id: new_card.card_holder_id,
                limit: new_card.limit,
                created_at: Utc::now(),
            })
        });

        let service = service_with(holder_repo, card_repo);
        let card = service
            .create_credit_card(
                holder_id,
                NewCreditCard {
                    card_holder_id: holder_id,
                    limit: Decimal::new(10_000, 2),
                },
            )
            .await
            .unwrap();

        assert_eq!(card.card_holder_id, holder_id);
        assert_eq!(card.limit, Decimal::new(10_000, 2));
    }

    #[tokio::test]
    async fn test_path_mismatch_wins_even_when_holder_is_unknown() {
        // No find_by_id expectation: a lookup before the mismatch check
        // would panic the mock.
        let holder_repo = MockCardHolderRepository::new();
        let card_repo = MockCreditCardRepository::new();

        let service = service_with(holder_repo, card_repo);
        let error = service
            .create_credit_card(
                Uuid::new_v4(),
                NewCreditCard {
                    card_holder_id: Uuid::new_v4(),
                    limit: Decimal::new(10_000, 2),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(
            error,
            AppError::path_card_holder_mismatch("Path cardHolderId doesn't match body cardHolderId")
        );
    }

    #[tokio::test]
    async fn test_create_credit_card_fails_when_holder_not_found() {
        let holder_id = Uuid::new_v4();

        let mut holder_repo = MockCardHolderRepository::new();
        holder_repo.expect_find_by_id().returning(|_| Ok(None));
        let card_repo = MockCreditCardRepository::new();

        let service = service_with(holder_repo, card_repo);
        let error = service
            .create_credit_card(
                holder_id,
                NewCreditCard {
                    card_holder_id: holder_id,
                    limit: Decimal::new(10_000, 2),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(
            error,
            AppError::card_holder_not_found(format!("Card Holder not found by id {holder_id}"))
        );
    }

    #[tokio::test]
    async fn test_requested_limit_above_available_is_rejected_with_both_values() {
        let holder_id = Uuid::new_v4();

        let mut holder_repo = MockCardHolderRepository::new();
        holder_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(holder_with_limit(id, Decimal::new(100_000, 2)))));

        let mut card_repo = MockCreditCardRepository::new();
        card_repo.expect_save().times(0);

        let service = service_with(holder_repo, card_repo);
        let error = service
            .create_credit_card(
                holder_id,
                NewCreditCard {
                    card_holder_id: holder_id,
                    limit: Decimal::from(100_000),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(
            error,
            AppError::requested_card_limit_unavailable(
                "Requested limit 100000 is greater than available limit 1000.00."
            )
        );
    }

    #[tokio::test]
    async fn test_requested_limit_equal_to_available_succeeds() {
        let holder_id = Uuid::new_v4();
        let limit = Decimal::new(100_000, 2);

        let mut holder_repo = MockCardHolderRepository::new();
        holder_repo
            .expect_find_by_id()
            .returning(move |id| Ok(Some(holder_with_limit(id, limit))));

        let mut card_repo = MockCreditCardRepository::new();
        card_repo.expect_save().returning(|new_card| {
            Ok(CreditCard {
                id: Uuid::new_v4(),
                card_holder_id: new_card.card_holder_id,
                limit: new_card.limit,
                created_at: Utc::now(),
            })
        });

        let service = service_with(holder_repo, card_repo);
        let card = service
            .create_credit_card(
                holder_id,
                NewCreditCard {
                    card_holder_id: holder_id,
                    limit,
                },
            )
            .await
            .unwrap();

        assert_eq!(card.limit, limit);
    }
}
