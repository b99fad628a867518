//! Group settle-up.
//!
//! Ties the pipeline together for one group: filter unsettled expenses,
//! aggregate balances, plan settlement, and present the result by name.

pub mod roster;
pub mod service;

pub use roster::{Roster, User};
pub use service::{GroupTotals, SettleUpOutcome, SettleUpService, SettleUpStrategy};
