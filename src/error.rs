//! Application error type and problem-detail HTTP rendering.
//!
//! Every domain failure is a dedicated [`AppError`] variant carrying a human
//! readable detail message. The [`IntoResponse`] implementation renders the
//! variant as an RFC 7807 style problem body:
//!
//! ```json
//! {
//!   "status": 404,
//!   "type": "https://cardholder.api/errors/not-found",
//!   "title": "Credit Analysis Not Found",
//!   "detail": "Credit analysis not found by id ..."
//! }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Problem-detail body returned for every error response.
#[derive(Debug, Serialize)]
pub struct Problem {
    pub status: u16,
    #[serde(rename = "type")]
    pub problem_type: &'static str,
    pub title: &'static str,
    pub detail: String,
}

/// Domain and infrastructure errors surfaced to API callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    CreditAnalysisNotFound { detail: String },
    ClientDoesNotCorrespondToCreditAnalysis { detail: String },
    CreditAnalysisNotApproved { detail: String },
    CardHolderAlreadyRegistered { detail: String },
    CardHolderNotFound { detail: String },
    InvalidCardHolderStatus { detail: String },
    PathCardHolderDoesNotMatchRequestCardHolder { detail: String },
    RequestedCardLimitUnavailable { detail: String },
    NoCreditCardsFound { detail: String },
    InvalidFields { detail: String },
    Internal { detail: String },
}

impl AppError {
    pub fn credit_analysis_not_found(detail: impl Into<String>) -> Self {
        Self::CreditAnalysisNotFound {
            detail: detail.into(),
        }
    }

    pub fn client_does_not_correspond(detail: impl Into<String>) -> Self {
        Self::ClientDoesNotCorrespondToCreditAnalysis {
            detail: detail.into(),
        }
    }

    pub fn credit_analysis_not_approved(detail: impl Into<String>) -> Self {
        Self::CreditAnalysisNotApproved {
            detail: detail.into(),
        }
    }

    pub fn card_holder_already_registered(detail: impl Into<String>) -> Self {
        Self::CardHolderAlreadyRegistered {
            detail: detail.into(),
        }
    }

    pub fn card_holder_not_found(detail: impl Into<String>) -> Self {
        Self::CardHolderNotFound {
            detail: detail.into(),
        }
    }

    pub fn invalid_card_holder_status(detail: impl Into<String>) -> Self {
        Self::InvalidCardHolderStatus {
            detail: detail.into(),
        }
    }

    pub fn path_card_holder_mismatch(detail: impl Into<String>) -> Self {
        Self::PathCardHolderDoesNotMatchRequestCardHolder {
            detail: detail.into(),
        }
    }

    pub fn requested_card_limit_unavailable(detail: impl Into<String>) -> Self {
        Self::RequestedCardLimitUnavailable {
            detail: detail.into(),
        }
    }

    pub fn no_credit_cards_found(detail: impl Into<String>) -> Self {
        Self::NoCreditCardsFound {
            detail: detail.into(),
        }
    }

    pub fn invalid_fields(detail: impl Into<String>) -> Self {
        Self::InvalidFields {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Status code, problem type URI, and title for this error kind.
    ///
    /// Not-found kinds map to 404, caller input faults to 400, and
    /// business-rule rejections to 422.
    pub fn parts(&self) -> (StatusCode, &'static str, &'static str) {
        match self {
            Self::CreditAnalysisNotFound { .. } => (
                StatusCode::NOT_FOUND,
                "https://cardholder.api/errors/not-found",
                "Credit Analysis Not Found",
            ),
            Self::ClientDoesNotCorrespondToCreditAnalysis { .. } => (
                StatusCode::BAD_REQUEST,
                "https://cardholder.api/errors/client-does-not-correspond-credit-analysis",
                "Client Doesn't Correspond To Credit Analysis",
            ),
            Self::CreditAnalysisNotApproved { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "https://cardholder.api/errors/not-approved",
                "Credit Analysis Not Approved",
            ),
            Self::CardHolderAlreadyRegistered { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "https://cardholder.api/errors/already-exists",
                "Card Holder Already Exists",
            ),
            Self::CardHolderNotFound { .. } => (
                StatusCode::NOT_FOUND,
                "https://cardholder.api/errors/not-found",
                "Card Holder Not Found",
            ),
            Self::InvalidCardHolderStatus { .. } => (
                StatusCode::BAD_REQUEST,
                "https://cardholder.api/errors/invalid-argument",
                "Invalid Card Holder Status",
            ),
            Self::PathCardHolderDoesNotMatchRequestCardHolder { .. } => (
                StatusCode::BAD_REQUEST,
                "https://cardholder.api/errors/invalid-argument",
                "Path Card Holder Doesn't Match Request Card Holder",
            ),
            Self::RequestedCardLimitUnavailable { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "https://cardholder.api/errors/limit-unavailable",
                "Requested Card Limit Unavailable",
            ),
            Self::NoCreditCardsFound { .. } => (
                StatusCode::NOT_FOUND,
                "https://cardholder.api/errors/not-found",
                "No Credit Cards Found",
            ),
            Self::InvalidFields { .. } => (
                StatusCode::BAD_REQUEST,
                "https://cardholder.api/errors/invalid-argument",
                "Invalid Fields",
            ),
            Self::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "https://cardholder.api/errors/internal",
                "Internal Server Error",
            ),
        }
    }

    /// The detail message carried by this error.
    pub fn detail(&self) -> &str {
        match self {
            Self::CreditAnalysisNotFound { detail }
            | Self::ClientDoesNotCorrespondToCreditAnalysis { detail }
            | Self::CreditAnalysisNotApproved { detail }
            | Self::CardHolderAlreadyRegistered { detail }
            | Self::CardHolderNotFound { detail }
            | Self::InvalidCardHolderStatus { detail }
            | Self::PathCardHolderDoesNotMatchRequestCardHolder { detail }
            | Self::RequestedCardLimitUnavailable { detail }
            | Self::NoCreditCardsFound { detail }
            | Self::InvalidFields { detail }
            | Self::Internal { detail } => detail,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, problem_type, title) = self.parts();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(detail = %self.detail(), "internal error");
        }

        let body = Problem {
            status: status.as_u16(),
            problem_type,
            title,
            detail: self.detail().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "database error");
        Self::internal("Database error")
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        Self::invalid_fields(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        Self::invalid_fields(e.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(e: PathRejection) -> Self {
        Self::invalid_fields(e.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observed_translator_mappings() {
        let cases = [
            (
                AppError::credit_analysis_not_found("x"),
                StatusCode::NOT_FOUND,
                "Credit Analysis Not Found",
            ),
            (
                AppError::client_does_not_correspond("x"),
                StatusCode::BAD_REQUEST,
                "Client Doesn't Correspond To Credit Analysis",
            ),
            (
                AppError::card_holder_already_registered("x"),
                StatusCode::UNPROCESSABLE_ENTITY,
                "Card Holder Already Exists",
            ),
            (
                AppError::invalid_fields("x"),
                StatusCode::BAD_REQUEST,
                "Invalid Fields",
            ),
        ];

        for (error, status, title) in cases {
            let (s, _, t) = error.parts();
            assert_eq!(s, status);
            assert_eq!(t, title);
        }
    }

    #[test]
    fn test_extended_mappings() {
        let cases = [
            (AppError::card_holder_not_found("x"), StatusCode::NOT_FOUND),
            (
                AppError::credit_analysis_not_approved("x"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::invalid_card_holder_status("x"),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::path_card_holder_mismatch("x"),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::requested_card_limit_unavailable("x"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (AppError::no_credit_cards_found("x"), StatusCode::NOT_FOUND),
            (AppError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(error.parts().0, status);
        }
    }

    #[test]
    fn test_detail_is_preserved() {
        let error = AppError::card_holder_not_found("Card Holder not found by id 42");
        assert_eq!(error.detail(), "Card Holder not found by id 42");
    }

    #[test]
    fn test_problem_type_is_uri_like() {
        let (_, problem_type, _) = AppError::invalid_fields("x").parts();
        assert!(problem_type.starts_with("https://"));
    }
}
