//! Delimited text persistence for the ledger.
//!
//! Two independent formats are supported:
//! - [`directory`]: one `;`-separated, newline-terminated file per collection
//!   (`accounts.dump`, `payments.dump`, `favorites.dump`), plus paged payment
//!   history files.
//! - [`snapshot`]: a single file of accounts, records separated by `|`.
//!
//! Imports append to the store. Field values must not contain `;`, `|` or a
//! newline; such values are written as-is and will not read back correctly.

pub mod directory;
pub mod error;
mod record;
pub mod snapshot;

pub use error::DumpError;
