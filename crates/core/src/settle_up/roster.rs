//! Group members as reference data, for presenting plans by name.

use std::collections::BTreeMap;

use divvy_shared::types::{Currency, Money, UserId};
use serde::{Deserialize, Serialize};

use crate::settlement::Transaction;

/// A group member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
}

/// Members of one group, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    names: BTreeMap<UserId, String>,
}

impl Roster {
    /// Builds a roster; a repeated id keeps the last name seen.
    pub fn new<I>(users: I) -> Self
    where
        I: IntoIterator<Item = User>,
    {
        Self {
            names: users.into_iter().map(|u| (u.id, u.name)).collect(),
        }
    }

    /// True when the user belongs to the group.
    #[must_use]
    pub fn contains(&self, user_id: UserId) -> bool {
        self.names.contains_key(&user_id)
    }

    /// Display name of a member.
    #[must_use]
    pub fn name_of(&self, user_id: UserId) -> Option<&str> {
        self.names.get(&user_id).map(String::as_str)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// One line per transaction, e.g. `Bob owes Alice: 60.00 INR`.
    ///
    /// Unknown users fall back to their id.
    #[must_use]
    pub fn describe(&self, transaction: &Transaction, currency: Currency) -> String {
        let label = |id: UserId| {
            self.name_of(id)
                .map_or_else(|| id.to_string(), str::to_string)
        };
        format!(
            "{} owes {}: {}",
            label(transaction.from_user_id),
            label(transaction.to_user_id),
            Money::new(transaction.amount, currency)
        )
    }
}
