//! Net balances across a group's expenses.

pub mod aggregator;

#[cfg(test)]
mod aggregator_props;

pub use aggregator::{Balance, BalanceAggregator, aggregate_balances};
