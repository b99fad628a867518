//! Expense splitting.
//!
//! Turns one expense and a split strategy into signed per-user deltas:
//! - Split strategies and per-participant inputs
//! - The split calculator and its rounding policy
//! - Error types for split validation

pub mod calculator;
pub mod error;
pub mod types;

#[cfg(test)]
mod calculator_props;

pub use calculator::{SplitCalculator, compute_split};
pub use error::SplitError;
pub use types::{Delta, ExpenseInput, SplitInput, SplitStrategy};
