//! Greedy settlement planning.
//!
//! Repeatedly pairs the largest creditor with the most-negative debtor and
//! emits one transaction for the smaller of the two magnitudes. This is a
//! heuristic: it does not search for the fewest possible transactions.
//!
//! Equal balances are popped in ascending user id order on both sides, which
//! makes the emitted order reproducible.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use divvy_shared::types::{UserId, is_negligible};
use rust_decimal::Decimal;
use tracing::debug;

use super::heap::MinHeap;
use super::types::Transaction;
use crate::balance::Balance;

/// Creditor ordering: largest balance first, then lowest user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct CreditorKey {
    balance: Reverse<Decimal>,
    user_id: UserId,
}

/// Debtor ordering: most negative balance first, then lowest user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct DebtorKey {
    balance: Decimal,
    user_id: UserId,
}

/// Settlement planner.
///
/// Holds only the timestamp stamped onto the transactions it produces.
#[derive(Debug, Clone, Copy)]
pub struct SettlementPlanner {
    issued_at: DateTime<Utc>,
}

impl SettlementPlanner {
    /// Creates a planner that stamps transactions with `issued_at`.
    #[must_use]
    pub const fn new(issued_at: DateTime<Utc>) -> Self {
        Self { issued_at }
    }

    /// Plan the payments that clear `balances`.
    ///
    /// Balances below one cent are skipped. Transactions come back in the
    /// order the greedy loop emits them.
    #[must_use]
    pub fn plan(&self, balances: &[Balance]) -> Vec<Transaction> {
        let mut creditors: MinHeap<CreditorKey> = MinHeap::new();
        let mut debtors: MinHeap<DebtorKey> = MinHeap::new();

        for balance in balances {
            if balance.is_debtor() {
                debtors.push(DebtorKey {
                    balance: balance.amount,
                    user_id: balance.user_id,
                });
            } else if balance.is_creditor() {
                creditors.push(CreditorKey {
                    balance: Reverse(balance.amount),
                    user_id: balance.user_id,
                });
            } else {
                debug!(user_id = %balance.user_id, "User is already settled up");
            }
        }

        let mut transactions = Vec::with_capacity(creditors.len() + debtors.len());

        while !creditors.is_empty() && !debtors.is_empty() {
            let (Some(creditor), Some(debtor)) = (creditors.pop(), debtors.pop()) else {
                break;
            };

            let credit = creditor.balance.0;
            let debt = debtor.balance.abs();
            let settle_amount = credit.min(debt);

            debug!(
                from = %debtor.user_id,
                to = %creditor.user_id,
                amount = %settle_amount,
                "Planned settlement transaction"
            );
            transactions.push(Transaction::pending(
                debtor.user_id,
                creditor.user_id,
                settle_amount,
                self.issued_at,
            ));

            let remaining_credit = credit - settle_amount;
            let remaining_debt = debtor.balance + settle_amount;

            if !is_negligible(remaining_credit) {
                creditors.push(CreditorKey {
                    balance: Reverse(remaining_credit),
                    user_id: creditor.user_id,
                });
            }
            if !is_negligible(remaining_debt) {
                debtors.push(DebtorKey {
                    balance: remaining_debt,
                    user_id: debtor.user_id,
                });
            }
        }

        if !creditors.is_empty() || !debtors.is_empty() {
            debug!(
                creditors_left = creditors.len(),
                debtors_left = debtors.len(),
                "Balances did not net to zero, leftover parties dropped"
            );
        }

        transactions
    }
}

/// Plan the payments that clear `balances`, stamped with the current time.
#[must_use]
pub fn plan_settlement(balances: &[Balance]) -> Vec<Transaction> {
    SettlementPlanner::new(Utc::now()).plan(balances)
}
