//! Net balance aggregation.
//!
//! Sums deltas per user. The result is sorted by ascending user id so that
//! downstream settlement sees the same order on every run.

use std::collections::BTreeMap;

use divvy_shared::types::{UserId, is_negligible};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expense::Expense;
use crate::split::Delta;

/// A user's net signed position across a set of expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// The user.
    pub user_id: UserId,
    /// Net amount: positive is owed to the user, negative is owed by them.
    pub amount: Decimal,
}

impl Balance {
    /// Creates a new balance.
    #[must_use]
    pub const fn new(user_id: UserId, amount: Decimal) -> Self {
        Self { user_id, amount }
    }

    /// Below one cent either way.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        is_negligible(self.amount)
    }

    /// Owed money by the group.
    #[must_use]
    pub fn is_creditor(&self) -> bool {
        !self.is_settled() && self.amount > Decimal::ZERO
    }

    /// Owes money to the group.
    #[must_use]
    pub fn is_debtor(&self) -> bool {
        !self.is_settled() && self.amount < Decimal::ZERO
    }
}

/// Balance aggregator.
///
/// Pure reduction with no state; Decimal sums are exact, so summation order
/// does not change the result. Split deltas never exceed
/// [`MAX_AMOUNT`](divvy_shared::types::MAX_AMOUNT) in magnitude, which keeps
/// any realistic number of them summable.
pub struct BalanceAggregator;

impl BalanceAggregator {
    /// Sum a flat stream of deltas into one balance per user.
    pub fn aggregate<'a, I>(deltas: I) -> Vec<Balance>
    where
        I: IntoIterator<Item = &'a Delta>,
    {
        let mut net: BTreeMap<UserId, Decimal> = BTreeMap::new();
        for delta in deltas {
            *net.entry(delta.user_id).or_default() += delta.amount;
        }
        net.into_iter()
            .map(|(user_id, amount)| Balance::new(user_id, amount))
            .collect()
    }

    /// Sum each expense's delta list into one balance per user.
    ///
    /// Users whose balance is below one cent stay in the output; they report
    /// [`Balance::is_settled`] and settlement ignores them.
    #[must_use]
    pub fn aggregate_balances(expense_deltas: &[Vec<Delta>]) -> Vec<Balance> {
        Self::aggregate(expense_deltas.iter().flatten())
    }

    /// Aggregate only the expenses not yet covered by a settlement.
    #[must_use]
    pub fn aggregate_unsettled(expenses: &[Expense]) -> Vec<Balance> {
        Self::aggregate(
            expenses
                .iter()
                .filter(|expense| !expense.is_settled)
                .flat_map(|expense| &expense.deltas),
        )
    }
}

/// Sum each expense's delta list into one balance per user.
#[must_use]
pub fn aggregate_balances(expense_deltas: &[Vec<Delta>]) -> Vec<Balance> {
    BalanceAggregator::aggregate_balances(expense_deltas)
}
