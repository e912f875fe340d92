//! Shared types, errors, and configuration for the wallet ledger.
//!
//! This crate provides common types used across all other crates:
//! - Money in integer minor units
//! - Typed IDs for accounts, payments and favorites
//! - Partition planning for chunked aggregation and export
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
