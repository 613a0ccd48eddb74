//! PostgreSQL repository implementations.
//!
//! Queries are runtime-checked (`sqlx::query_as`) so the crate builds without
//! a live database. Unique-constraint violations on card holder registration
//! are translated into [`crate::error::AppError::CardHolderAlreadyRegistered`]
//! here, at the write boundary; the raw sqlx error never escapes.

pub mod pg_card_holder_repository;
pub mod pg_credit_card_repository;

pub use pg_card_holder_repository::PgCardHolderRepository;
pub use pg_credit_card_repository::PgCreditCardRepository;
