//! Group snapshots read from disk.
//!
//! A snapshot is what the persistence layer would hand the engine: the
//! members of one group and its expenses as submitted.

use divvy_core::Expense;
use divvy_core::settle_up::{Roster, User};
use divvy_core::split::{ExpenseInput, SplitCalculator};
use divvy_shared::types::{Currency, ExpenseId, UserId};
use divvy_shared::{AppError, AppResult};
use serde::Deserialize;

/// One group's members and expenses.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupSnapshot {
    /// Group display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Currency the group keeps its books in.
    #[serde(default)]
    pub currency: Option<Currency>,
    /// Members.
    pub users: Vec<User>,
    /// Expenses, settled or not.
    #[serde(default)]
    pub expenses: Vec<SnapshotExpense>,
}

/// An expense as stored in a snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotExpense {
    /// Stable id; generated when absent.
    #[serde(default)]
    pub id: Option<ExpenseId>,
    /// Whether an earlier settlement covered it.
    #[serde(default)]
    pub settled: bool,
    /// The submitted expense.
    #[serde(flatten)]
    pub input: ExpenseInput,
}

impl GroupSnapshot {
    /// Parses a snapshot from JSON.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The group's members.
    #[must_use]
    pub fn roster(&self) -> Roster {
        Roster::new(self.users.iter().cloned())
    }

    /// Checks membership, then splits every expense.
    ///
    /// Fails on the first expense that references a non-member or that
    /// cannot be split.
    pub fn record_expenses(&self, calculator: &SplitCalculator) -> AppResult<Vec<Expense>> {
        let roster = self.roster();
        self.expenses
            .iter()
            .map(|stored| -> AppResult<Expense> {
                ensure_members(&roster, &stored.input)?;
                let id = stored.id.unwrap_or_default();
                let expense = Expense::record(id, &stored.input, calculator)?;
                Ok(if stored.settled { expense.settled() } else { expense })
            })
            .collect()
    }
}

/// Every user an expense names must belong to the group.
pub fn ensure_members(roster: &Roster, input: &ExpenseInput) -> AppResult<()> {
    let not_member =
        |id: UserId| AppError::NotFound(format!("User {id} is not a member of the group"));

    if !roster.contains(input.paid_by) {
        return Err(not_member(input.paid_by));
    }
    if let Some(split) = input.user_split.iter().find(|s| !roster.contains(s.user_id)) {
        return Err(not_member(split.user_id));
    }
    Ok(())
}
