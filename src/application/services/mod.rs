//! Business logic services for the application layer.

pub mod card_holder_service;
pub mod create_credit_card_service;
pub mod search_credit_card_service;

pub use card_holder_service::CardHolderService;
pub use create_credit_card_service::CreateCreditCardService;
pub use search_credit_card_service::SearchCreditCardService;
