//! Split domain types.

use divvy_shared::types::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::SplitError;

/// How an expense is divided between its participants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SplitStrategy {
    /// Everyone listed owes the same rounded share.
    #[default]
    Equal,
    /// Each participant owes a percentage of the total.
    Percentage,
    /// Each participant owes a literal amount.
    Exact,
    /// Each participant owes in proportion to a share count.
    Shares,
}

impl SplitStrategy {
    /// Returns the tag used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "EQUAL",
            Self::Percentage => "PERCENTAGE",
            Self::Exact => "EXACT",
            Self::Shares => "SHARES",
        }
    }

    /// Parses an optional tag; a missing tag means an equal split.
    pub fn from_tag(tag: Option<&str>) -> Result<Self, SplitError> {
        tag.map_or(Ok(Self::Equal), str::parse)
    }
}

impl FromStr for SplitStrategy {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EQUAL" => Ok(Self::Equal),
            "PERCENTAGE" => Ok(Self::Percentage),
            "EXACT" => Ok(Self::Exact),
            "SHARES" => Ok(Self::Shares),
            _ => Err(SplitError::InvalidSplitType(s.to_string())),
        }
    }
}

impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One participant's input to a split.
///
/// Only the field matching the strategy is read. A missing value counts as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitInput {
    /// The participant.
    pub user_id: UserId,
    /// Literal amount owed, for `EXACT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Percentage of the total owed (0-100), for `PERCENTAGE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Decimal>,
    /// Share count, for `SHARES`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shares: Option<u32>,
}

impl SplitInput {
    /// A participant in an equal split.
    #[must_use]
    pub const fn equal(user_id: UserId) -> Self {
        Self {
            user_id,
            amount: None,
            percentage: None,
            shares: None,
        }
    }

    /// A participant owing `percentage` of the total.
    #[must_use]
    pub const fn percentage(user_id: UserId, percentage: Decimal) -> Self {
        Self {
            percentage: Some(percentage),
            ..Self::equal(user_id)
        }
    }

    /// A participant owing a literal amount.
    #[must_use]
    pub const fn exact(user_id: UserId, amount: Decimal) -> Self {
        Self {
            amount: Some(amount),
            ..Self::equal(user_id)
        }
    }

    /// A participant holding `shares` shares.
    #[must_use]
    pub const fn shares(user_id: UserId, shares: u32) -> Self {
        Self {
            shares: Some(shares),
            ..Self::equal(user_id)
        }
    }
}

/// A signed contribution of one user to one expense.
///
/// Positive: owed to this user. Negative: this user owes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    /// The user the amount belongs to.
    pub user_id: UserId,
    /// Signed amount.
    pub amount: Decimal,
}

impl Delta {
    /// Creates a new delta.
    #[must_use]
    pub const fn new(user_id: UserId, amount: Decimal) -> Self {
        Self { user_id, amount }
    }

    /// Returns true for the payer's credit row.
    #[must_use]
    pub fn is_credit(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

/// An expense as submitted by a caller, before it is split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseInput {
    /// Total amount paid, must be positive.
    pub amount: Decimal,
    /// Who paid.
    pub paid_by: UserId,
    /// Strategy tag; `None` means `EQUAL`.
    #[serde(default)]
    pub split_type: Option<String>,
    /// Participants.
    pub user_split: Vec<SplitInput>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Spending category (food, travel, ...).
    #[serde(default)]
    pub category: Option<String>,
}
