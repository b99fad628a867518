//! Settlement planning.
//!
//! This module turns net balances into payer→payee transactions:
//! - An array-backed priority queue with deterministic keys
//! - Transaction and status types
//! - The greedy heap-matching planner

pub mod heap;
pub mod planner;
pub mod types;

#[cfg(test)]
mod planner_props;

pub use heap::MinHeap;
pub use planner::{SettlementPlanner, plan_settlement};
pub use types::{SETTLEMENT_DESCRIPTION, Transaction, TransactionStatus};
