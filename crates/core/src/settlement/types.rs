//! Settlement domain types.

use chrono::{DateTime, Utc};
use divvy_shared::types::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Description attached to every planned settlement transaction.
pub const SETTLEMENT_DESCRIPTION: &str = "Settlement for group expenses";

/// Lifecycle of a settlement transaction.
///
/// Plans are proposals; every transaction leaves the planner pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    /// Planned, not yet paid.
    Pending,
}

impl TransactionStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One payment from a debtor to a creditor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Who pays (a debtor).
    pub from_user_id: UserId,
    /// Who receives (a creditor).
    pub to_user_id: UserId,
    /// Amount, always positive.
    pub amount: Decimal,
    /// Human-readable purpose.
    pub description: String,
    /// Lifecycle status.
    pub status: TransactionStatus,
    /// When the plan containing this transaction was produced.
    pub issued_at: DateTime<Utc>,
}

impl Transaction {
    /// A pending settlement payment.
    #[must_use]
    pub fn pending(
        from_user_id: UserId,
        to_user_id: UserId,
        amount: Decimal,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            from_user_id,
            to_user_id,
            amount,
            description: SETTLEMENT_DESCRIPTION.to_string(),
            status: TransactionStatus::Pending,
            issued_at,
        }
    }
}
