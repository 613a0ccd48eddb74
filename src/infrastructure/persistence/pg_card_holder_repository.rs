//! PostgreSQL implementation of the card holder repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{ActiveCardHolder, BankAccount, CardHolder, Status};
use crate::domain::repositories::CardHolderRepository;
use crate::error::AppError;

/// PostgreSQL repository for card holder storage and retrieval.
pub struct PgCardHolderRepository {
    pool: Arc<PgPool>,
}

impl PgCardHolderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CardHolderRow {
    id: Uuid,
    client_id: Uuid,
    credit_analysis_id: Uuid,
    status: String,
    credit_limit: Decimal,
    bank_account_number: Option<String>,
    bank_agency: Option<String>,
    bank_code: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<CardHolderRow> for CardHolder {
    type Error = AppError;

    fn try_from(row: CardHolderRow) -> Result<Self, Self::Error> {
        let status: Status = row
            .status
            .parse()
            .map_err(|_| AppError::internal(format!("corrupt status value: {}", row.status)))?;

        let bank_account = match (row.bank_account_number, row.bank_agency, row.bank_code) {
            (Some(account), Some(agency), Some(bank_code)) => Some(BankAccount {
                account,
                agency,
                bank_code,
            }),
            _ => None,
        };

        Ok(CardHolder {
            id: row.id,
            client_id: row.client_id,
            credit_analysis_id: row.credit_analysis_id,
            status,
            credit_limit: row.credit_limit,
            bank_account,
            created_at: row.created_at,
        })
    }
}

const SELECT_COLUMNS: &str = "id, client_id, credit_analysis_id, status, credit_limit, \
     bank_account_number, bank_agency, bank_code, created_at";

/// Detects a violation of the one-holder-per-analysis unique constraint.
fn is_duplicate_registration(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

#[async_trait]
impl CardHolderRepository for PgCardHolderRepository {
    async fn save(&self, card_holder: ActiveCardHolder) -> Result<CardHolder, AppError> {
        let (account, agency, bank_code) = match &card_holder.bank_account {
            Some(b) => (
                Some(b.account.as_str()),
                Some(b.agency.as_str()),
                Some(b.bank_code.as_str()),
            ),
            None => (None, None, None),
        };

        let row = sqlx::query_as::<_, CardHolderRow>(&format!(
            r#"
            INSERT INTO card_holders
                (client_id, credit_analysis_id, status, credit_limit,
                 bank_account_number, bank_agency, bank_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {SELECT_COLUMNS}
            "#
        ))
        .bind(card_holder.client_id)
        .bind(card_holder.credit_analysis_id)
        .bind(card_holder.status.as_str())
        .bind(card_holder.credit_limit)
        .bind(account)
        .bind(agency)
        .bind(bank_code)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_duplicate_registration(&e) {
                AppError::card_holder_already_registered(
                    "Card Holder already registered, check the data sent for registration",
                )
            } else {
                AppError::from(e)
            }
        })?;

        row.try_into()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<CardHolder>, AppError> {
        let row = sqlx::query_as::<_, CardHolderRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM card_holders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(CardHolder::try_from).transpose()
    }

    async fn find_all(&self) -> Result<Vec<CardHolder>, AppError> {
        let rows = sqlx::query_as::<_, CardHolderRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM card_holders ORDER BY created_at"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(CardHolder::try_from).collect()
    }

    async fn find_all_by_status(&self, status: Status) -> Result<Vec<CardHolder>, AppError> {
        let rows = sqlx::query_as::<_, CardHolderRow>(&format!(
            "SELECT {SELECT_COLUMNS} FROM card_holders WHERE status = $1 ORDER BY created_at"
        ))
        .bind(status.as_str())
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(CardHolder::try_from).collect()
    }
}
