//! DTOs for card holder endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{BankAccount, CardHolder, NewCardHolder};

/// Request to register a new card holder.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CardHolderRequest {
    pub client_id: Uuid,
    pub credit_analysis_id: Uuid,
    #[validate(nested)]
    pub bank_account: Option<BankAccountRequest>,
}

/// Bank account data embedded in a card holder request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountRequest {
    #[validate(length(min = 1, max = 20, message = "account must be 1-20 characters"))]
    pub account: String,
    #[validate(length(min = 1, max = 10, message = "agency must be 1-10 characters"))]
    pub agency: String,
    #[validate(length(min = 1, max = 5, message = "bankCode must be 1-5 characters"))]
    pub bank_code: String,
}

impl From<CardHolderRequest> for NewCardHolder {
    fn from(request: CardHolderRequest) -> Self {
        Self {
            client_id: request.client_id,
            credit_analysis_id: request.credit_analysis_id,
            bank_account: request.bank_account.map(|b| BankAccount {
                account: b.account,
                agency: b.agency,
                bank_code: b.bank_code,
            }),
        }
    }
}

/// Card holder projection returned by the API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardHolderResponse {
    pub client_id: Uuid,
    pub credit_analysis_id: Uuid,
    pub status: String,
    pub credit_limit: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccountResponse>,
}

/// Bank account projection embedded in a card holder response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountResponse {
    pub account: String,
    pub agency: String,
    pub bank_code: String,
}

impl From<CardHolder> for CardHolderResponse {
    fn from(card_holder: CardHolder) -> Self {
        Self {
            client_id: card_holder.client_id,
            credit_analysis_id: card_holder.credit_analysis_id,
            status: card_holder.status.to_string(),
            credit_limit: card_holder.credit_limit,
            bank_account: card_holder.bank_account.map(|b| BankAccountResponse {
                account: b.account,
                agency: b.agency,
                bank_code: b.bank_code,
            }),
        }
    }
}

/// Query parameters for the card holder list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListCardHoldersQuery {
    pub status: Option<String>,
}
