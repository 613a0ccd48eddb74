//! Request and response DTOs for the REST API.
//!
//! All bodies use camelCase JSON field names.

pub mod card_holder;
pub mod credit_card;
pub mod health;

pub use card_holder::{
    BankAccountRequest, BankAccountResponse, CardHolderRequest, CardHolderResponse,
    ListCardHoldersQuery,
};
pub use credit_card::{CreditCardRequest, CreditCardResponse};
pub use health::HealthResponse;
