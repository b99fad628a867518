//! Property-based tests for the split calculator.
//!
//! - Conservation for splits without a rounding remainder
//! - Bounded drift for equal splits
//! - Shape of the delta list (one debit per participant, credit last)

use divvy_shared::types::{EPSILON, RemainderPolicy, UserId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::SplitCalculator;
use super::types::{SplitInput, SplitStrategy};

/// Strategy to generate positive amounts (0.01 to 100,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn participants(count: usize) -> Vec<UserId> {
    (1..=count as u128).map(UserId::from_u128).collect()
}

fn sum_of(deltas: &[super::types::Delta]) -> Decimal {
    deltas.iter().map(|d| d.amount).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Equal splits miss the total by at most one cent per participant.
    #[test]
    fn prop_equal_drift_is_bounded(
        amount in positive_amount(),
        count in 1usize..20,
    ) {
        let users = participants(count);
        let inputs: Vec<_> = users.iter().copied().map(SplitInput::equal).collect();
        let deltas = SplitCalculator::default()
            .compute_split(amount, users[0], SplitStrategy::Equal, &inputs)
            .unwrap();

        let bound = EPSILON * Decimal::from(count);
        prop_assert!(sum_of(&deltas).abs() <= bound);
    }

    /// Equal splits of an amount divisible into whole cents conserve exactly.
    #[test]
    fn prop_equal_divisible_conserves(
        cents_each in 1i64..1_000_000i64,
        count in 1usize..20,
    ) {
        let amount = Decimal::new(cents_each, 2) * Decimal::from(count);
        let users = participants(count);
        let inputs: Vec<_> = users.iter().copied().map(SplitInput::equal).collect();
        let deltas = SplitCalculator::default()
            .compute_split(amount, users[0], SplitStrategy::Equal, &inputs)
            .unwrap();

        prop_assert_eq!(sum_of(&deltas), Decimal::ZERO);
    }

    /// The largest remainder policy always conserves cent-precision totals.
    #[test]
    fn prop_largest_remainder_conserves(
        amount in positive_amount(),
        count in 1usize..20,
    ) {
        let users = participants(count);
        let inputs: Vec<_> = users.iter().copied().map(SplitInput::equal).collect();
        let deltas = SplitCalculator::new(RemainderPolicy::LargestRemainder)
            .compute_split(amount, users[0], SplitStrategy::Equal, &inputs)
            .unwrap();

        prop_assert_eq!(sum_of(&deltas), Decimal::ZERO);
    }

    /// Exact splits whose amounts add up to the total conserve exactly.
    #[test]
    fn prop_exact_conserves_when_amounts_match(
        owed in prop::collection::vec(1i64..1_000_000i64, 1..10),
    ) {
        let users = participants(owed.len());
        let inputs: Vec<_> = users
            .iter()
            .zip(&owed)
            .map(|(user, cents)| SplitInput::exact(*user, Decimal::new(*cents, 2)))
            .collect();
        let total: Decimal = owed.iter().map(|c| Decimal::new(*c, 2)).sum();

        let deltas = SplitCalculator::default()
            .compute_split(total, users[0], SplitStrategy::Exact, &inputs)
            .unwrap();
        prop_assert_eq!(sum_of(&deltas), Decimal::ZERO);
    }

    /// Shares splits stay within one cent per participant of the total.
    #[test]
    fn prop_shares_drift_is_bounded(
        amount in positive_amount(),
        shares in prop::collection::vec(1u32..10, 1..10),
    ) {
        let users = participants(shares.len());
        let inputs: Vec<_> = users
            .iter()
            .zip(&shares)
            .map(|(user, n)| SplitInput::shares(*user, *n))
            .collect();

        let deltas = SplitCalculator::default()
            .compute_split(amount, users[0], SplitStrategy::Shares, &inputs)
            .unwrap();
        let bound = EPSILON * Decimal::from(shares.len());
        prop_assert!(sum_of(&deltas).abs() <= bound);
    }

    /// One row per participant, in order, then the payer's credit.
    #[test]
    fn prop_delta_shape(
        amount in positive_amount(),
        count in 1usize..20,
        payer_index in 0usize..20,
    ) {
        let users = participants(count);
        let payer = users[payer_index % count];
        let inputs: Vec<_> = users.iter().copied().map(SplitInput::equal).collect();
        let deltas = SplitCalculator::default()
            .compute_split(amount, payer, SplitStrategy::Equal, &inputs)
            .unwrap();

        prop_assert_eq!(deltas.len(), count + 1);
        for (delta, user) in deltas.iter().zip(&users) {
            prop_assert_eq!(delta.user_id, *user);
            prop_assert!(delta.amount <= Decimal::ZERO);
        }
        let credit = deltas.last().unwrap();
        prop_assert_eq!(credit.user_id, payer);
        prop_assert_eq!(credit.amount, amount);
    }
}
