//! Group settle-up: unsettled expenses in, balances and a payment plan out.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::balance::{Balance, BalanceAggregator};
use crate::expense::Expense;
use crate::settlement::{SettlementPlanner, Transaction};

/// Algorithm used to turn balances into transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettleUpStrategy {
    /// Greedy largest-creditor / largest-debtor matching over two heaps.
    #[default]
    HeapBased,
}

/// Totals over the expenses a settle-up covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTotals {
    /// Sum of the amounts of unsettled expenses.
    pub total_spent: Decimal,
    /// How many expenses were unsettled.
    pub unsettled_expenses: usize,
}

/// Result of settling up a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettleUpOutcome {
    /// Net balance per user, ascending by user id.
    pub balances: Vec<Balance>,
    /// Payments in the order they were planned.
    pub transactions: Vec<Transaction>,
    /// Totals over the unsettled expenses.
    pub totals: GroupTotals,
}

impl SettleUpOutcome {
    /// True when nobody needs to pay anybody.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Settle-up service.
///
/// Pure business logic: the caller loads the group's expenses and persists
/// whatever it decides to keep from the outcome.
pub struct SettleUpService;

impl SettleUpService {
    /// Settle up a group's expenses.
    ///
    /// Expenses already marked settled are ignored.
    #[must_use]
    pub fn settle_up(
        expenses: &[Expense],
        strategy: SettleUpStrategy,
        issued_at: DateTime<Utc>,
    ) -> SettleUpOutcome {
        let totals = Self::totals(expenses);
        let balances = BalanceAggregator::aggregate_unsettled(expenses);

        let transactions = match strategy {
            SettleUpStrategy::HeapBased => SettlementPlanner::new(issued_at).plan(&balances),
        };

        info!(
            unsettled_expenses = totals.unsettled_expenses,
            total_spent = %totals.total_spent,
            members = balances.len(),
            transactions = transactions.len(),
            "Settle-up planned"
        );

        SettleUpOutcome {
            balances,
            transactions,
            totals,
        }
    }

    /// Totals over the unsettled expenses.
    #[must_use]
    pub fn totals(expenses: &[Expense]) -> GroupTotals {
        expenses.iter().filter(|e| !e.is_settled).fold(
            GroupTotals {
                total_spent: Decimal::ZERO,
                unsettled_expenses: 0,
            },
            |acc, expense| GroupTotals {
                total_spent: acc.total_spent + expense.amount,
                unsettled_expenses: acc.unsettled_expenses + 1,
            },
        )
    }

    /// A group is settled when every expense in it is.
    #[must_use]
    pub fn is_group_settled(expenses: &[Expense]) -> bool {
        expenses.iter().all(|e| e.is_settled)
    }

    /// Marks every expense as settled, returning the updated records.
    #[must_use]
    pub fn mark_settled(expenses: &[Expense]) -> Vec<Expense> {
        expenses.iter().cloned().map(Expense::settled).collect()
    }
}
