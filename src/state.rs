//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{
    CardHolderService, CreateCreditCardService, SearchCreditCardService,
};

/// Application state shared across all request handlers.
///
/// Services carry their collaborators (repositories, the credit analysis
/// client) as trait objects, so tests can substitute in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    pub card_holder_service: Arc<CardHolderService>,
    pub create_credit_card_service: Arc<CreateCreditCardService>,
    pub search_credit_card_service: Arc<SearchCreditCardService>,
}

impl AppState {
    /// Creates the shared state from constructed services.
    pub fn new(
        card_holder_service: Arc<CardHolderService>,
        create_credit_card_service: Arc<CreateCreditCardService>,
        search_credit_card_service: Arc<SearchCreditCardService>,
    ) -> Self {
        Self {
            card_holder_service,
            create_credit_card_service,
            search_credit_card_service,
        }
    }
}
