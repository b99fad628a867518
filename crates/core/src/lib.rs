//! Core business logic for Divvy.
//!
//! This crate contains the expense-splitting and settlement engine with ZERO
//! I/O: it consumes plain data and returns plain data.
//!
//! # Modules
//!
//! - `split` - One expense plus a strategy into signed per-user deltas
//! - `expense` - Recorded expenses with their deltas
//! - `balance` - Net balances across a group's unsettled expenses
//! - `settlement` - Greedy heap-based payment planning
//! - `settle_up` - The whole pipeline for one group
//!
//! ```
//! use divvy_core::{aggregate_balances, compute_split, plan_settlement};
//! use divvy_core::split::{SplitInput, SplitStrategy};
//! use divvy_shared::types::UserId;
//! use rust_decimal_macros::dec;
//!
//! let (a, b) = (UserId::from_u128(1), UserId::from_u128(2));
//! let deltas = compute_split(
//!     dec!(90),
//!     a,
//!     SplitStrategy::Shares,
//!     &[SplitInput::shares(a, 1), SplitInput::shares(b, 2)],
//! )
//! .unwrap();
//!
//! let balances = aggregate_balances(&[deltas]);
//! let plan = plan_settlement(&balances);
//! assert_eq!(plan.len(), 1);
//! assert_eq!(plan[0].from_user_id, b);
//! assert_eq!(plan[0].amount, dec!(60));
//! ```

pub mod balance;
pub mod expense;
pub mod settle_up;
pub mod settlement;
pub mod split;

pub use balance::{Balance, aggregate_balances};
pub use expense::Expense;
pub use settlement::{Transaction, plan_settlement};
pub use split::{Delta, SplitError, compute_split};
