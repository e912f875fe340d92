//! Ledger domain types.
//!
//! Accounts hold balances, payments debit them, and favorites are named
//! templates for re-issuing a payment.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use wallet_shared::types::{AccountId, FavoriteId, Money, PaymentCategory, PaymentId, Phone};

/// A phone-identified balance holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Sequential account ID.
    pub id: AccountId,
    /// Phone number, unique across all accounts.
    pub phone: Phone,
    /// Current balance; never negative.
    pub balance: Money,
}

/// Payment lifecycle status.
///
/// Payments are created `InProgress` and move to `Fail` when rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    /// Payment has been debited and is being processed.
    InProgress,
    /// Payment completed.
    Done,
    /// Payment was rejected and refunded.
    Fail,
}

impl PaymentStatus {
    /// Returns the dump wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Fail => "fail",
        }
    }

    /// Returns true if the payment was rejected.
    #[must_use]
    pub fn is_failed(self) -> bool {
        matches!(self, Self::Fail)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown payment status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for PaymentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            "fail" => Ok(Self::Fail),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

/// A debit transaction against an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    /// Globally unique payment ID.
    pub id: PaymentId,
    /// The debited account.
    pub account_id: AccountId,
    /// Debited amount; always positive.
    pub amount: Money,
    /// Spending category.
    pub category: PaymentCategory,
    /// Lifecycle status.
    pub status: PaymentStatus,
}

/// A named template for re-issuing a payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    /// Globally unique favorite ID.
    pub id: FavoriteId,
    /// The account future payments debit.
    pub account_id: AccountId,
    /// Amount of future payments.
    pub amount: Money,
    /// Display name chosen by the account holder.
    pub name: String,
    /// Category of future payments.
    pub category: PaymentCategory,
}

/// Records read from a dump, appended to a store in one step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    /// Accounts in dump order.
    pub accounts: Vec<Account>,
    /// Payments in dump order.
    pub payments: Vec<Payment>,
    /// Favorites in dump order.
    pub favorites: Vec<Favorite>,
}
