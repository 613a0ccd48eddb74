//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in [`crate::infrastructure::persistence`]. Mock implementations are
//! auto-generated via `mockall` for service unit tests.

pub mod card_holder_repository;
pub mod credit_card_repository;

pub use card_holder_repository::CardHolderRepository;
pub use credit_card_repository::CreditCardRepository;

#[cfg(test)]
pub use card_holder_repository::MockCardHolderRepository;
#[cfg(test)]
pub use credit_card_repository::MockCreditCardRepository;
