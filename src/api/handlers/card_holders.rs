//! Handlers for card holder endpoints.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection, rejection::PathRejection},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::{CardHolderRequest, CardHolderResponse, ListCardHoldersQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new card holder.
///
/// # Endpoint
///
/// `POST /api/v1/card-holders`
///
/// # Errors
///
/// - 400 Invalid Fields for a malformed body or failed field validation
/// - 404 when the referenced credit analysis does not exist
/// - 400 when the analysis belongs to a different client
/// - 422 when the analysis was not approved or the holder is already registered
pub async fn create_card_holder_handler(
    State(state): State<AppState>,
    payload: Result<Json<CardHolderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CardHolderResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let created = state
        .card_holder_service
        .create_card_holder(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Lists card holders, optionally filtered by status.
///
/// # Endpoint
///
/// `GET /api/v1/card-holders[?status=active]`
///
/// The status filter is case-insensitive; an unrecognized value yields
/// 400 Invalid Card Holder Status.
pub async fn list_card_holders_handler(
    State(state): State<AppState>,
    Query(query): Query<ListCardHoldersQuery>,
) -> Result<Json<Vec<CardHolderResponse>>, AppError> {
    let holders = match query.status {
        Some(status) => {
            state
                .card_holder_service
                .get_all_card_holders_by_status(&status)
                .await?
        }
        None => state.card_holder_service.get_all_card_holders().await?,
    };

    Ok(Json(holders.into_iter().map(Into::into).collect()))
}

/// Fetches a single card holder by id.
///
/// # Endpoint
///
/// `GET /api/v1/card-holders/{id}`
///
/// An unparseable id yields 400 Invalid Fields; a missing holder 404.
pub async fn get_card_holder_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<CardHolderResponse>, AppError> {
    let Path(id) = id?;

    let holder = state.card_holder_service.get_card_holder_by_id(id).await?;

    Ok(Json(holder.into()))
}
