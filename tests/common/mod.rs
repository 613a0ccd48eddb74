#![allow(dead_code)]

//! In-memory fakes and state wiring shared by handler tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use card_holder_api::application::services::{
    CardHolderService, CreateCreditCardService, SearchCreditCardService,
};
use card_holder_api::domain::entities::{
    ActiveCardHolder, CardHolder, CreditCard, NewCreditCard, Status,
};
use card_holder_api::domain::repositories::{CardHolderRepository, CreditCardRepository};
use card_holder_api::error::AppError;
use card_holder_api::infrastructure::credit_analysis::{CreditAnalysis, CreditAnalysisClient};
use card_holder_api::state::AppState;

/// In-memory card holder store enforcing the
/// (client_id, credit_analysis_id) uniqueness constraint.
#[derive(Default)]
pub struct InMemoryCardHolderRepository {
    holders: Mutex<Vec<CardHolder>>,
}

impl InMemoryCardHolderRepository {
    /// Seeds a holder directly, bypassing the service workflow.
    pub fn seed(&self, client_id: Uuid, credit_limit: Decimal) -> CardHolder {
        let holder = CardHolder {
            id: Uuid::new_v4(),
            client_id,
            credit_analysis_id: Uuid::new_v4(),
            status: Status::Active,
            credit_limit,
            bank_account: None,
            created_at: Utc::now(),
        };
        self.holders.lock().unwrap().push(holder.clone());
        holder
    }
}

#[async_trait]
impl CardHolderRepository for InMemoryCardHolderRepository {
    async fn save(&self, card_holder: ActiveCardHolder) -> Result<CardHolder, AppError> {
        let mut holders = self.holders.lock().unwrap();

        let duplicate = holders.iter().any(|h| {
            h.client_id == card_holder.client_id
                && h.credit_analysis_id == card_holder.credit_analysis_id
        });
        if duplicate {
            return Err(AppError::card_holder_already_registered(
                "Card Holder already registered, check the data sent for registration",
            ));
        }

        let holder = CardHolder {
            id: Uuid::new_v4(),
            client_id: card_holder.client_id,
            credit_analysis_id: card_holder.credit_analysis_id,
            status: card_holder.status,
            credit_limit: card_holder.credit_limit,
            bank_account: card_holder.bank_account,
            created_at: Utc::now(),
        };
        holders.push(holder.clone());
        Ok(holder)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CardHolder>, AppError> {
        Ok(self
            .holders
            .lock()
            .unwrap()
            .iter()
            .find(|h| h.id == id)
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<CardHolder>, AppError> {
        Ok(self.holders.lock().unwrap().clone())
    }

    async fn find_all_by_status(&self, status: Status) -> Result<Vec<CardHolder>, AppError> {
        Ok(self
            .holders
            .lock()
            .unwrap()
            .iter()
            .filter(|h| h.status == status)
            .cloned()
            .collect())
    }
}

/// In-memory credit card store.
#[derive(Default)]
pub struct InMemoryCreditCardRepository {
    cards: Mutex<Vec<CreditCard>>,
}

#[async_trait]
impl CreditCardRepository for InMemoryCreditCardRepository {
    async fn save(&self, new_card: NewCreditCard) -> Result<CreditCard, AppError> {
        let card = CreditCard {
            id: Uuid::new_v4(),
            card_holder_id: new_card.card_holder_id,
            limit: new_card.limit,
            created_at: Utc::now(),
        };
        self.cards.lock().unwrap().push(card.clone());
        Ok(card)
    }

    async fn find_all_by_card_holder_id(
        &self,
        card_holder_id: Uuid,
    ) -> Result<Vec<CreditCard>, AppError> {
        Ok(self
            .cards
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.card_holder_id == card_holder_id)
            .cloned()
            .collect())
    }
}

/// Stub credit analysis service answering from a fixed set of analyses.
#[derive(Default)]
pub struct StubCreditAnalysisClient {
    analyses: HashMap<Uuid, CreditAnalysis>,
}

impl StubCreditAnalysisClient {
    pub fn with_analysis(mut self, analysis: CreditAnalysis) -> Self {
        let id = analysis.id.expect("stubbed analysis needs an id");
        self.analyses.insert(id, analysis);
        self
    }
}

#[async_trait]
impl CreditAnalysisClient for StubCreditAnalysisClient {
    async fn get_credit_analysis_by_id(&self, id: Uuid) -> Result<CreditAnalysis, AppError> {
        Ok(self
            .analyses
            .get(&id)
            .cloned()
            .unwrap_or_else(CreditAnalysis::not_found))
    }
}

/// Approved analysis fixture for `client_id` with the given limit.
pub fn approved_analysis(client_id: Uuid, limit: Decimal) -> CreditAnalysis {
    CreditAnalysis {
        id: Some(Uuid::new_v4()),
        client_id: Some(client_id),
        approved: Some(true),
        approved_limit: Some(limit),
    }
}

/// Handles to the fakes behind a test [`AppState`].
pub struct TestContext {
    pub state: AppState,
    pub card_holder_repo: Arc<InMemoryCardHolderRepository>,
    pub credit_card_repo: Arc<InMemoryCreditCardRepository>,
}

/// Builds an [`AppState`] wired to in-memory fakes and the given stub client.
pub fn create_test_state(client: StubCreditAnalysisClient) -> TestContext {
    let card_holder_repo = Arc::new(InMemoryCardHolderRepository::default());
    let credit_card_repo = Arc::new(InMemoryCreditCardRepository::default());
    let client = Arc::new(client);

    let card_holder_service = Arc::new(CardHolderService::new(
        client,
        card_holder_repo.clone(),
    ));
    let create_credit_card_service = Arc::new(CreateCreditCardService::new(
        card_holder_repo.clone(),
        credit_card_repo.clone(),
    ));
    let search_credit_card_service =
        Arc::new(SearchCreditCardService::new(credit_card_repo.clone()));

    let state = AppState::new(
        card_holder_service,
        create_credit_card_service,
        search_credit_card_service,
    );

    TestContext {
        state,
        card_holder_repo,
        credit_card_repo,
    }
}
