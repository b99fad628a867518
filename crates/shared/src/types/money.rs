//! Money helpers with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` and every computed amount is rounded
//! to cents with round-half-away-from-zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// One cent. Amounts with a smaller magnitude count as zero.
pub const EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Number of decimal places every computed amount is rounded to.
pub const CENT_PLACES: u32 = 2;

/// Largest amount a single expense or exact share may carry (10^15).
///
/// Keeps `amount * shares` and sums over deltas well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Rounds to cents, halves away from zero (`round(x * 100) / 100`).
///
/// ```
/// use rust_decimal_macros::dec;
/// use divvy_shared::types::round_cents;
///
/// assert_eq!(round_cents(dec!(33.335)), dec!(33.34));
/// assert_eq!(round_cents(dec!(-33.335)), dec!(-33.34));
/// ```
#[must_use]
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns true if the magnitude is below one cent.
#[must_use]
pub fn is_negligible(value: Decimal) -> bool {
    value.abs() < EPSILON
}

/// What to do with the cents an equal split cannot divide evenly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    /// Leave the rounding gap in place; debits may miss the total by up to
    /// one cent per participant.
    #[default]
    Drift,
    /// Hand leftover cents, one each, to the first participants so the debits
    /// sum exactly to the total.
    LargestRemainder,
}

/// Represents a monetary amount with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in major units (e.g. rupees, dollars).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: Currency,
}

/// ISO 4217 currency codes a group can keep its books in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian Rupee
    #[default]
    Inr,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// British Pound
    Gbp,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut amount = round_cents(self.amount);
        amount.rescale(CENT_PLACES);
        write!(f, "{amount} {}", self.currency)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inr => write!(f, "INR"),
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Gbp => write!(f, "GBP"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INR" => Ok(Self::Inr),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "money_tests.rs"]
mod tests;
