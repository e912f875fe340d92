//! Ledger error types for validation and state errors.
//!
//! Every ledger operation either succeeds or returns one of these errors with
//! the store left untouched.

use thiserror::Error;
use wallet_shared::AppError;
use wallet_shared::types::{AccountId, FavoriteId, Money, PaymentId, Phone};

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Amount must be greater than zero.
    #[error("Amount must be greater than zero, got {0}")]
    InvalidAmount(Money),

    // ========== Account Errors ==========
    /// Phone number is already registered.
    #[error("Phone already registered: {0}")]
    DuplicatePhone(Phone),

    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Account IDs start at 1.
    #[error("Invalid account ID: {0}")]
    InvalidAccountId(AccountId),

    /// Account ID is already taken.
    #[error("Account ID already in use: {0}")]
    DuplicateAccountId(AccountId),

    /// Balance does not cover the requested amount.
    #[error("Insufficient balance on account {account_id}: balance {balance}, requested {requested}")]
    InsufficientBalance {
        /// The debited account.
        account_id: AccountId,
        /// Balance at the time of the request.
        balance: Money,
        /// Requested amount.
        requested: Money,
    },

    /// Crediting the account would overflow its balance.
    #[error("Balance overflow on account {0}")]
    BalanceOverflow(AccountId),

    /// No account ID is left after the largest one in use.
    #[error("Account IDs exhausted")]
    AccountIdsExhausted,

    // ========== Payment Errors ==========
    /// Payment not found.
    #[error("Payment not found: {0}")]
    PaymentNotFound(PaymentId),

    /// Payment ID is already taken.
    #[error("Payment ID already in use: {0}")]
    DuplicatePaymentId(PaymentId),

    /// Payment has already been rejected and refunded.
    #[error("Payment already rejected: {0}")]
    AlreadyRejected(PaymentId),

    // ========== Favorite Errors ==========
    /// Favorite not found.
    #[error("Favorite not found: {0}")]
    FavoriteNotFound(FavoriteId),

    /// Favorite ID is already taken.
    #[error("Favorite ID already in use: {0}")]
    DuplicateFavoriteId(FavoriteId),

    // ========== Aggregation Errors ==========
    /// The payment total does not fit in a `Money` amount.
    #[error("Payment total overflow")]
    TotalOverflow,
}

impl LedgerError {
    /// Returns the stable error code for diagnostics.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::DuplicatePhone(_) => "DUPLICATE_PHONE",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::InvalidAccountId(_) => "INVALID_ACCOUNT_ID",
            Self::DuplicateAccountId(_) => "DUPLICATE_ACCOUNT_ID",
            Self::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            Self::BalanceOverflow(_) => "BALANCE_OVERFLOW",
            Self::AccountIdsExhausted => "ACCOUNT_IDS_EXHAUSTED",
            Self::PaymentNotFound(_) => "PAYMENT_NOT_FOUND",
            Self::DuplicatePaymentId(_) => "DUPLICATE_PAYMENT_ID",
            Self::AlreadyRejected(_) => "ALREADY_REJECTED",
            Self::FavoriteNotFound(_) => "FAVORITE_NOT_FOUND",
            Self::DuplicateFavoriteId(_) => "DUPLICATE_FAVORITE_ID",
            Self::TotalOverflow => "TOTAL_OVERFLOW",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        let message = err.to_string();
        match err {
            LedgerError::InvalidAmount(_) | LedgerError::InvalidAccountId(_) => {
                Self::Validation(message)
            }
            LedgerError::AccountNotFound(_)
            | LedgerError::PaymentNotFound(_)
            | LedgerError::FavoriteNotFound(_) => Self::NotFound(message),
            LedgerError::DuplicatePhone(_)
            | LedgerError::DuplicateAccountId(_)
            | LedgerError::DuplicatePaymentId(_)
            | LedgerError::DuplicateFavoriteId(_)
            | LedgerError::AlreadyRejected(_) => Self::Conflict(message),
            LedgerError::InsufficientBalance { .. } => Self::BusinessRule(message),
            LedgerError::BalanceOverflow(_)
            | LedgerError::AccountIdsExhausted
            | LedgerError::TotalOverflow => Self::Internal(message),
        }
    }
}
