//! Split calculator: one expense plus a strategy into signed deltas.
//!
//! Every computed amount is rounded to cents, halves away from zero. Debits
//! are emitted in input order; the payer's credit for the full amount always
//! comes last, as its own row, even when the payer is also a participant.
//!
//! Equal splits do not redistribute rounding remainders unless the calculator
//! is built with [`RemainderPolicy::LargestRemainder`]: 100 split three ways is
//! three debits of 33.33, one cent short of the credit.

use divvy_shared::types::{MAX_AMOUNT, RemainderPolicy, UserId, round_cents};
use rust_decimal::prelude::*;
use tracing::debug;

use super::error::SplitError;
use super::types::{Delta, ExpenseInput, SplitInput, SplitStrategy};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Split calculator.
///
/// Stateless apart from the remainder policy; safe to share between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitCalculator {
    remainder: RemainderPolicy,
}

impl SplitCalculator {
    /// Creates a calculator with the given equal-split remainder policy.
    #[must_use]
    pub const fn new(remainder: RemainderPolicy) -> Self {
        Self { remainder }
    }

    /// Split a submitted expense, parsing its strategy tag.
    ///
    /// # Errors
    ///
    /// `InvalidSplitType` for an unknown tag, plus everything
    /// [`compute_split`](Self::compute_split) can return.
    pub fn split_expense(&self, expense: &ExpenseInput) -> Result<Vec<Delta>, SplitError> {
        let strategy = SplitStrategy::from_tag(expense.split_type.as_deref())?;
        self.compute_split(expense.amount, expense.paid_by, strategy, &expense.user_split)
    }

    /// Compute the deltas for one expense.
    ///
    /// Returns one debit per participant in input order followed by the
    /// payer's credit of `amount`.
    ///
    /// # Errors
    ///
    /// - `EmptySplitList` if `inputs` is empty
    /// - `NonPositiveAmount` if `amount <= 0`
    /// - `AmountOverflow` if `amount` or an exact share exceeds `MAX_AMOUNT`
    /// - `InvalidPercentage` if a percentage falls outside `0..=100`
    pub fn compute_split(
        &self,
        amount: Decimal,
        payer: UserId,
        strategy: SplitStrategy,
        inputs: &[SplitInput],
    ) -> Result<Vec<Delta>, SplitError> {
        if inputs.is_empty() {
            return Err(SplitError::EmptySplitList);
        }
        if amount <= Decimal::ZERO {
            return Err(SplitError::NonPositiveAmount(amount));
        }
        if amount > MAX_AMOUNT {
            return Err(SplitError::AmountOverflow(amount));
        }

        let owed = match strategy {
            SplitStrategy::Equal => self.equal_shares(amount, inputs.len()),
            SplitStrategy::Percentage => Self::percentage_shares(amount, inputs)?,
            SplitStrategy::Exact => Self::exact_shares(inputs)?,
            SplitStrategy::Shares => Self::proportional_shares(amount, inputs),
        };

        let mut deltas: Vec<Delta> = inputs
            .iter()
            .zip(owed)
            .map(|(input, owed)| Delta::new(input.user_id, debit(owed)))
            .collect();
        deltas.push(Delta::new(payer, amount));

        let drift: Decimal = deltas.iter().map(|d| d.amount).sum();
        debug!(
            %payer,
            %strategy,
            %amount,
            participants = inputs.len(),
            %drift,
            "Computed expense split"
        );

        Ok(deltas)
    }

    fn equal_shares(&self, amount: Decimal, count: usize) -> Vec<Decimal> {
        let count_dec = Decimal::from(count);
        match self.remainder {
            RemainderPolicy::Drift => vec![round_cents(amount / count_dec); count],
            RemainderPolicy::LargestRemainder => {
                let total = round_cents(amount);
                let unit = Decimal::new(1, 2);
                let base = (total / count_dec).round_dp_with_strategy(2, RoundingStrategy::ToZero);
                // whole cents left over, always fewer than `count`
                let extra = (total - base * count_dec) / unit;

                // first `extra` participants carry one more cent
                (0..count)
                    .map(|i| {
                        if Decimal::from(i) < extra {
                            base + unit
                        } else {
                            base
                        }
                    })
                    .collect()
            }
        }
    }

    fn percentage_shares(
        amount: Decimal,
        inputs: &[SplitInput],
    ) -> Result<Vec<Decimal>, SplitError> {
        inputs
            .iter()
            .map(|input| {
                let percentage = input.percentage.unwrap_or_default();
                if percentage < Decimal::ZERO || percentage > HUNDRED {
                    return Err(SplitError::InvalidPercentage {
                        user_id: input.user_id,
                        percentage,
                    });
                }
                Ok(round_cents(amount * percentage / HUNDRED))
            })
            .collect()
    }

    fn exact_shares(inputs: &[SplitInput]) -> Result<Vec<Decimal>, SplitError> {
        inputs
            .iter()
            .map(|input| {
                let owed = input.amount.unwrap_or_default();
                if owed.abs() > MAX_AMOUNT {
                    return Err(SplitError::AmountOverflow(owed));
                }
                Ok(owed)
            })
            .collect()
    }

    fn proportional_shares(amount: Decimal, inputs: &[SplitInput]) -> Vec<Decimal> {
        let total_shares: u64 = inputs
            .iter()
            .map(|input| u64::from(input.shares.unwrap_or(0)))
            .sum();

        if total_shares == 0 {
            debug!(%amount, "Total shares is zero, every participant owes nothing");
            return vec![Decimal::ZERO; inputs.len()];
        }

        let total = Decimal::from(total_shares);
        inputs
            .iter()
            .map(|input| {
                let shares = Decimal::from(input.shares.unwrap_or(0));
                round_cents(amount * shares / total)
            })
            .collect()
    }
}

/// Negates an owed amount, keeping zero unsigned.
fn debit(owed: Decimal) -> Decimal {
    if owed.is_zero() { Decimal::ZERO } else { -owed }
}

/// Compute the deltas for one expense with the default (drift) policy.
///
/// # Errors
///
/// See [`SplitCalculator::compute_split`].
pub fn compute_split(
    amount: Decimal,
    payer: UserId,
    strategy: SplitStrategy,
    inputs: &[SplitInput],
) -> Result<Vec<Delta>, SplitError> {
    SplitCalculator::default().compute_split(amount, payer, strategy, inputs)
}
