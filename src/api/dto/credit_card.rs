//! DTOs for credit card endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{CreditCard, NewCreditCard};

/// Request to issue a credit card under a card holder.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardRequest {
    pub card_holder_id: Uuid,
    #[validate(custom(function = validate_limit_not_negative))]
    pub limit: Decimal,
}

fn validate_limit_not_negative(limit: &Decimal) -> Result<(), validator::ValidationError> {
    if limit.is_sign_negative() {
        return Err(validator::ValidationError::new("limit_negative")
            .with_message("limit must not be negative".into()));
    }
    Ok(())
}

impl From<CreditCardRequest> for NewCreditCard {
    fn from(request: CreditCardRequest) -> Self {
        Self {
            card_holder_id: request.card_holder_id,
            limit: request.limit,
        }
    }
}

/// Credit card projection returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardResponse {
    pub card_holder_id: Uuid,
    pub limit: Decimal,
}

impl From<CreditCard> for CreditCardResponse {
    fn from(card: CreditCard) -> Self {
        Self {
            card_holder_id: card.card_holder_id,
            limit: card.limit,
        }
    }
}
