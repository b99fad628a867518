//! Property-based tests for settlement planning.
//!
//! Inputs are balanced: the last user absorbs whatever the others net to,
//! the way aggregated expense deltas do when no rounding drift occurs.

use std::collections::BTreeMap;

use chrono::Utc;
use divvy_shared::types::{EPSILON, UserId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::planner::SettlementPlanner;
use crate::balance::Balance;

fn balanced_balances() -> impl Strategy<Value = Vec<Balance>> {
    prop::collection::vec(-50_000i64..50_000i64, 1..12).prop_map(|cents| {
        let mut balances: Vec<Balance> = cents
            .iter()
            .enumerate()
            .map(|(i, c)| Balance::new(UserId::from_u128(i as u128 + 1), Decimal::new(*c, 2)))
            .collect();
        let total: Decimal = balances.iter().map(|b| b.amount).sum();
        balances.push(Balance::new(UserId::from_u128(1_000), -total));
        balances
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every user's net flow cancels their original balance.
    #[test]
    fn prop_settlement_clears_all_balances(balances in balanced_balances()) {
        let plan = SettlementPlanner::new(Utc::now()).plan(&balances);

        let mut flow: BTreeMap<UserId, Decimal> = BTreeMap::new();
        for tx in &plan {
            *flow.entry(tx.from_user_id).or_default() += tx.amount;
            *flow.entry(tx.to_user_id).or_default() -= tx.amount;
        }
        for balance in &balances {
            let paid_minus_received = flow.get(&balance.user_id).copied().unwrap_or_default();
            prop_assert!((paid_minus_received + balance.amount).abs() < EPSILON);
        }
    }

    /// Money moved equals money owed to creditors.
    #[test]
    fn prop_total_money_conserved(balances in balanced_balances()) {
        let plan = SettlementPlanner::new(Utc::now()).plan(&balances);
        let moved: Decimal = plan.iter().map(|t| t.amount).sum();
        let owed: Decimal = balances
            .iter()
            .filter(|b| b.is_creditor())
            .map(|b| b.amount)
            .sum();
        prop_assert!((moved - owed).abs() < EPSILON);
    }

    /// Settled users never appear; every leg is a positive debtor-to-creditor payment.
    #[test]
    fn prop_legs_are_well_formed(balances in balanced_balances()) {
        let plan = SettlementPlanner::new(Utc::now()).plan(&balances);
        let by_user: BTreeMap<UserId, &Balance> =
            balances.iter().map(|b| (b.user_id, b)).collect();

        for tx in &plan {
            prop_assert!(tx.amount > Decimal::ZERO);
            prop_assert!(by_user[&tx.from_user_id].is_debtor());
            prop_assert!(by_user[&tx.to_user_id].is_creditor());
        }
    }

    /// Each iteration retires at least one party, bounding the plan size.
    #[test]
    fn prop_plan_size_bounded(balances in balanced_balances()) {
        let plan = SettlementPlanner::new(Utc::now()).plan(&balances);
        let active = balances.iter().filter(|b| !b.is_settled()).count();
        prop_assert!(plan.len() <= active.saturating_sub(1));
    }

    /// Shuffling input order does not change the plan.
    #[test]
    fn prop_plan_is_deterministic(balances in balanced_balances()) {
        let planner = SettlementPlanner::new(Utc::now());
        let mut reversed = balances.clone();
        reversed.reverse();
        prop_assert_eq!(planner.plan(&balances), planner.plan(&reversed));
    }
}
