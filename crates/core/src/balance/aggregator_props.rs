//! Property-based tests for balance aggregation.

use divvy_shared::types::UserId;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::aggregator::aggregate_balances;
use crate::split::Delta;

/// Strategy for one delta among up to six users.
fn delta_strategy() -> impl Strategy<Value = Delta> {
    (1u128..=6, -100_000i64..100_000i64)
        .prop_map(|(user, cents)| Delta::new(UserId::from_u128(user), Decimal::new(cents, 2)))
}

fn expenses_strategy() -> impl Strategy<Value = Vec<Vec<Delta>>> {
    prop::collection::vec(prop::collection::vec(delta_strategy(), 0..8), 0..10)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Total of balances equals total of all deltas.
    #[test]
    fn prop_aggregation_preserves_total(expenses in expenses_strategy()) {
        let expected: Decimal = expenses.iter().flatten().map(|d| d.amount).sum();
        let total: Decimal = aggregate_balances(&expenses).iter().map(|b| b.amount).sum();
        prop_assert_eq!(total, expected);
    }

    /// Reversing the expense order changes nothing.
    #[test]
    fn prop_aggregation_is_order_independent(expenses in expenses_strategy()) {
        let forward = aggregate_balances(&expenses);
        let mut reversed = expenses.clone();
        reversed.reverse();
        for deltas in &mut reversed {
            deltas.reverse();
        }
        prop_assert_eq!(aggregate_balances(&reversed), forward);
    }

    /// One balance per distinct user, sorted ascending.
    #[test]
    fn prop_one_sorted_balance_per_user(expenses in expenses_strategy()) {
        let balances = aggregate_balances(&expenses);
        for pair in balances.windows(2) {
            prop_assert!(pair[0].user_id < pair[1].user_id);
        }
        let mut users: Vec<UserId> = expenses.iter().flatten().map(|d| d.user_id).collect();
        users.sort();
        users.dedup();
        prop_assert_eq!(balances.len(), users.len());
    }
}
