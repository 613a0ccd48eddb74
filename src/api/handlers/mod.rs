//! Axum request handlers for the REST API.

pub mod card_holders;
pub mod credit_cards;
pub mod health;

pub use card_holders::{
    create_card_holder_handler, get_card_holder_handler, list_card_holders_handler,
};
pub use credit_cards::{create_credit_card_handler, list_credit_cards_handler};
pub use health::health_handler;
