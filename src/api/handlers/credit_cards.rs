//! Handlers for credit card endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection, rejection::PathRejection},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::{CreditCardRequest, CreditCardResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Issues a credit card under an existing card holder.
///
/// # Endpoint
///
/// `POST /api/v1/card-holders/{id}/credit-cards`
///
/// The path id must match the body `cardHolderId`; the mismatch check runs
/// before any lookup.
///
/// # Errors
///
/// - 400 on path/body id mismatch or invalid fields
/// - 404 when the holder does not exist
/// - 422 when the requested limit exceeds the holder's credit limit
pub async fn create_credit_card_handler(
    State(state): State<AppState>,
    card_holder_id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<CreditCardRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreditCardResponse>), AppError> {
    let Path(card_holder_id) = card_holder_id?;
    let Json(payload) = payload?;
    payload.validate()?;

    let card = state
        .create_credit_card_service
        .create_credit_card(card_holder_id, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(card.into())))
}

/// Lists the credit cards of a card holder.
///
/// # Endpoint
///
/// `GET /api/v1/card-holders/{id}/credit-cards`
///
/// A holder without cards yields 404 No Credit Cards Found rather than an
/// empty list.
pub async fn list_credit_cards_handler(
    State(state): State<AppState>,
    card_holder_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Vec<CreditCardResponse>>, AppError> {
    let Path(card_holder_id) = card_holder_id?;

    let cards = state
        .search_credit_card_service
        .get_all_cards_by_card_holder_id(card_holder_id)
        .await?;

    Ok(Json(cards.into_iter().map(Into::into).collect()))
}
