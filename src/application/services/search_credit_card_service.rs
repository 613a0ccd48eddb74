//! Credit card lookup service.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::CreditCard;
use crate::domain::repositories::CreditCardRepository;
use crate::error::AppError;

/// Lists the credit cards issued under a card holder.
pub struct SearchCreditCardService {
    credit_card_repository: Arc<dyn CreditCardRepository>,
}

impl SearchCreditCardService {
    /// Creates a new credit card lookup service.
    pub fn new(credit_card_repository: Arc<dyn CreditCardRepository>) -> Self {
        Self {
            credit_card_repository,
        }
    }

    /// Lists all cards belonging to the given card holder.
    ///
    /// An empty result set is an error, not an empty success: it surfaces a
    /// wrong or unknown id to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NoCreditCardsFound`] when the holder has no cards.
    pub async fn get_all_cards_by_card_holder_id(
        &self,
        card_holder_id: Uuid,
    ) -> Result<Vec<CreditCard>, AppError> {
        let cards = self
            .credit_card_repository
            .find_all_by_card_holder_id(card_holder_id)
            .await?;

        if cards.is_empty() {
            return Err(AppError::no_credit_cards_found(
                "No credit card found, check the cardHolderId",
            ));
        }

        Ok(cards)
    }
}
