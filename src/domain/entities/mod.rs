//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; the only business behavior living here
//! is the pure [`card_holder::NewCardHolder::activate`] transformation that
//! turns an unverified holder into an active one.

pub mod card_holder;
pub mod credit_card;

pub use card_holder::{ActiveCardHolder, BankAccount, CardHolder, NewCardHolder, Status};
pub use credit_card::{CreditCard, NewCreditCard};
