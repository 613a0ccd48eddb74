//! Credit card entity issued under a card holder.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A persisted credit card.
///
/// The card limit was validated against the owning holder's credit limit at
/// creation time and is never changed afterwards.
#[derive(Debug, Clone)]
pub struct CreditCard {
    pub id: Uuid,
    pub card_holder_id: Uuid,
    pub limit: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Input data for issuing a new credit card.
#[derive(Debug, Clone)]
pub struct NewCreditCard {
    pub card_holder_id: Uuid,
    pub limit: Decimal,
}
