//! In-memory ledger of accounts, payments and favorites.
//!
//! This module implements the mutation side of the wallet:
//! - Account registration and deposits
//! - Payments debited from balances, rejection with refund, repetition
//! - Favorite templates for repeat payments
//! - Error types for ledger operations

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::LedgerError;
pub use service::LedgerStore;
pub use types::{Account, Favorite, LedgerSnapshot, Payment, PaymentStatus, UnknownStatus};
