//! Recorded expenses.
//!
//! A flat record: the split is already applied and users are referenced by id.
//! Persistence belongs to the caller; the core only reads these.

use chrono::{DateTime, Utc};
use divvy_shared::types::{ExpenseId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::split::{Delta, ExpenseInput, SplitCalculator, SplitError, SplitStrategy};

/// An expense with its computed deltas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// The expense ID.
    pub id: ExpenseId,
    /// Total amount paid.
    pub amount: Decimal,
    /// Who paid.
    pub paid_by: UserId,
    /// How it was split.
    pub strategy: SplitStrategy,
    /// Deltas produced by the split.
    pub deltas: Vec<Delta>,
    /// Whether a settlement already covered this expense.
    #[serde(default)]
    pub is_settled: bool,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Spending category.
    #[serde(default)]
    pub category: Option<String>,
    /// When the expense happened.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Expense {
    /// Split a submitted expense and record the result as unsettled.
    ///
    /// # Errors
    ///
    /// Returns `SplitError` if the split fails; nothing is recorded then.
    pub fn record(
        id: ExpenseId,
        input: &ExpenseInput,
        calculator: &SplitCalculator,
    ) -> Result<Self, SplitError> {
        let strategy = SplitStrategy::from_tag(input.split_type.as_deref())?;
        let deltas =
            calculator.compute_split(input.amount, input.paid_by, strategy, &input.user_split)?;

        Ok(Self {
            id,
            amount: input.amount,
            paid_by: input.paid_by,
            strategy,
            deltas,
            is_settled: false,
            description: input.description.clone(),
            category: input.category.clone(),
            timestamp: None,
        })
    }

    /// Sets when the expense happened.
    #[must_use]
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Marks the expense as covered by a settlement.
    #[must_use]
    pub fn settled(mut self) -> Self {
        self.is_settled = true;
        self
    }

    /// Sum of this expense's deltas; nonzero only through rounding drift
    /// or a zero-share split.
    #[must_use]
    pub fn drift(&self) -> Decimal {
        self.deltas.iter().map(|d| d.amount).sum()
    }
}
