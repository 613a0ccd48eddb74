//! API route configuration.

use crate::api::handlers::{
    create_card_holder_handler, create_credit_card_handler, get_card_holder_handler,
    list_card_holders_handler, list_credit_cards_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All card holder API routes.
///
/// # Endpoints
///
/// - `POST /card-holders`                      - Register a card holder
/// - `GET  /card-holders[?status=...]`         - List card holders
/// - `GET  /card-holders/{id}`                 - Fetch a card holder
/// - `POST /card-holders/{id}/credit-cards`    - Issue a credit card
/// - `GET  /card-holders/{id}/credit-cards`    - List a holder's credit cards
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/card-holders",
            post(create_card_holder_handler).get(list_card_holders_handler),
        )
        .route("/card-holders/{id}", get(get_card_holder_handler))
        .route(
            "/card-holders/{id}/credit-cards",
            post(create_credit_card_handler).get(list_credit_cards_handler),
        )
}
