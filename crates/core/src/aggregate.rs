//! Payment volume aggregation.
//!
//! Totals are taken over every payment regardless of status, so rejected
//! payments still count toward the volume.

use std::sync::{Mutex, PoisonError};

use tracing::debug;
use wallet_shared::types::{Money, chunk_len, partitions};

use crate::ledger::{LedgerError, LedgerStore, Payment};

/// Sums the amounts of `payments`.
///
/// With `parallelism <= 1` the sum is sequential. Otherwise the payments are
/// split into at most `parallelism` contiguous chunks of `ceil(len / parallelism)`
/// records, each chunk is summed on its own worker, and every worker adds its
/// partial sum into a shared total exactly once. The call returns after all
/// workers have finished. The result does not depend on `parallelism`.
///
/// Every addition is checked. The total is reported only when it fits in a
/// `Money` amount, and no partial sum or merge order can wrap it.
///
/// # Errors
///
/// Returns `TotalOverflow` if the total exceeds the `Money` range.
pub fn sum_payments(payments: &[Payment], parallelism: usize) -> Result<Money, LedgerError> {
    if parallelism <= 1 || payments.len() <= 1 {
        return sum_sequential(payments).ok_or(LedgerError::TotalOverflow);
    }

    let ranges = partitions(payments.len(), chunk_len(payments.len(), parallelism));
    debug!(
        payments = payments.len(),
        parallelism,
        workers = ranges.len(),
        "summing payments in parallel"
    );

    // `None` once any partial sum or merge has overflowed.
    let total = Mutex::new(Some(Money::ZERO));
    rayon::scope(|scope| {
        for range in ranges {
            let chunk = &payments[range];
            let total = &total;
            scope.spawn(move |_| {
                let partial = sum_sequential(chunk);
                let mut total = total.lock().unwrap_or_else(PoisonError::into_inner);
                *total = total
                    .zip(partial)
                    .and_then(|(sum, partial)| sum.checked_add(partial));
            });
        }
    });

    total
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
        .ok_or(LedgerError::TotalOverflow)
}

fn sum_sequential(payments: &[Payment]) -> Option<Money> {
    Money::checked_sum(payments.iter().map(|payment| payment.amount))
}

impl LedgerStore {
    /// Sums every payment amount in the store; see [`sum_payments`].
    ///
    /// # Errors
    ///
    /// Returns `TotalOverflow` if the total exceeds the `Money` range.
    pub fn sum_payments(&self, parallelism: usize) -> Result<Money, LedgerError> {
        sum_payments(self.payments(), parallelism)
    }
}
