//! Card holder entity and its activation lifecycle.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Registration status of a card holder.
///
/// A holder becomes [`Status::Active`] only after its credit analysis was
/// verified and approved; there is no transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Inactive,
}

/// Error returned when a status string does not match any known value.
#[derive(Debug, thiserror::Error)]
#[error("unknown card holder status: {0}")]
pub struct ParseStatusError(pub String);

impl Status {
    /// Canonical wire representation (`ACTIVE` / `INACTIVE`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    /// Case-insensitive parse, so `active`, `Active` and `ACTIVE` all match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

/// Bank account embedded in a card holder record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccount {
    pub account: String,
    pub agency: String,
    pub bank_code: String,
}

/// A persisted card holder.
#[derive(Debug, Clone)]
pub struct CardHolder {
    pub id: Uuid,
    pub client_id: Uuid,
    pub credit_analysis_id: Uuid,
    pub status: Status,
    pub credit_limit: Decimal,
    pub bank_account: Option<BankAccount>,
    pub created_at: DateTime<Utc>,
}

/// Card holder built from an inbound request, before credit-analysis
/// verification. Carries no status and no limit.
#[derive(Debug, Clone)]
pub struct NewCardHolder {
    pub client_id: Uuid,
    pub credit_analysis_id: Uuid,
    pub bank_account: Option<BankAccount>,
}

impl NewCardHolder {
    /// Consumes the unverified holder and produces the activated value with
    /// the approved credit limit. The limit is set here exactly once.
    pub fn activate(self, approved_limit: Decimal) -> ActiveCardHolder {
        ActiveCardHolder {
            client_id: self.client_id,
            credit_analysis_id: self.credit_analysis_id,
            status: Status::Active,
            credit_limit: approved_limit,
            bank_account: self.bank_account,
        }
    }
}

/// An approved, activated card holder ready for persistence.
#[derive(Debug, Clone)]
pub struct ActiveCardHolder {
    pub client_id: Uuid,
    pub credit_analysis_id: Uuid,
    pub status: Status,
    pub credit_limit: Decimal,
    pub bank_account: Option<BankAccount>,
}
