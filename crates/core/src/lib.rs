//! Core ledger engine for the wallet.
//!
//! This crate contains the in-memory ledger and its persistence with ZERO
//! network dependencies.
//!
//! # Modules
//!
//! - `ledger` - Accounts, payments, favorites and their invariants
//! - `aggregate` - Payment volume totals, optionally parallel
//! - `dump` - Directory and single-file delimited text formats

pub mod aggregate;
pub mod dump;
pub mod ledger;

pub use ledger::{LedgerError, LedgerStore};
