//! PostgreSQL implementation of the credit card repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{CreditCard, NewCreditCard};
use crate::domain::repositories::CreditCardRepository;
use crate::error::AppError;

/// PostgreSQL repository for credit card storage and retrieval.
pub struct PgCreditCardRepository {
    pool: Arc<PgPool>,
}

impl PgCreditCardRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CreditCardRow {
    id: Uuid,
    card_holder_id: Uuid,
    card_limit: Decimal,
    created_at: DateTime<Utc>,
}

impl From<CreditCardRow> for CreditCard {
    fn from(row: CreditCardRow) -> Self {
        Self {
            id: row.id,
            card_holder_id: row.card_holder_id,
            limit: row.card_limit,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl CreditCardRepository for PgCreditCardRepository {
    async fn save(&self, new_card: NewCreditCard) -> Result<CreditCard, AppError> {
        let row = sqlx::query_as::<_, CreditCardRow>(
            r#"
            INSERT INTO credit_cards (card_holder_id, card_limit)
            VALUES ($1, $2)
            RETURNING id, card_holder_id, card_limit, created_at
            "#,
        )
        .bind(new_card.card_holder_id)
        .bind(new_card.limit)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_all_by_card_holder_id(
        &self,
        card_holder_id: Uuid,
    ) -> Result<Vec<CreditCard>, AppError> {
        let rows = sqlx::query_as::<_, CreditCardRow>(
            r#"
            SELECT id, card_holder_id, card_limit, created_at
            FROM credit_cards
            WHERE card_holder_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(card_holder_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(CreditCard::from).collect())
    }
}
