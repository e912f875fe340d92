//! Property-based tests for LedgerStore.
//!
//! - Pay debits exactly the amount and appends one fresh payment
//! - Failed pays leave balance and payments untouched
//! - Reject refunds exactly the payment amount
//! - Balance conservation: deposits - non-failed payments = balance

use std::collections::HashSet;

use proptest::prelude::*;
use wallet_shared::types::{AccountId, Money, PaymentCategory, Phone};

use super::error::LedgerError;
use super::service::LedgerStore;

/// Strategy to generate positive amounts (1 to 1,000,000 minor units).
fn positive_amount() -> impl Strategy<Value = i64> {
    1i64..1_000_000i64
}

/// Strategy to generate category names.
fn category() -> impl Strategy<Value = PaymentCategory> {
    prop_oneof![
        Just(PaymentCategory::from("auto")),
        Just(PaymentCategory::from("food")),
        Just(PaymentCategory::from("rent")),
    ]
}

/// Helper to create a store with one funded account.
fn funded_store(balance: i64) -> (LedgerStore, AccountId) {
    let mut store = LedgerStore::new();
    let account = store.register_account(Phone::from("+992000000001")).unwrap();
    store.deposit(account.id, Money::new(balance)).unwrap();
    (store, account.id)
}

proptest! {
    /// For any valid pay, balance drops by the amount and one new payment is appended.
    #[test]
    fn prop_pay_debits_exact_amount(
        balance in positive_amount(),
        amounts in prop::collection::vec(positive_amount(), 1..20),
        category in category(),
    ) {
        let (mut store, account_id) = funded_store(balance);
        let mut seen = HashSet::new();

        for amount in amounts {
            let before = store.find_account(account_id).unwrap().balance;
            let count = store.payments().len();
            let amount = Money::new(amount);

            match store.pay(account_id, amount, category.clone()) {
                Ok(payment) => {
                    prop_assert!(amount <= before);
                    prop_assert_eq!(
                        store.find_account(account_id).unwrap().balance,
                        before.checked_sub(amount).unwrap()
                    );
                    prop_assert_eq!(store.payments().len(), count + 1);
                    prop_assert!(seen.insert(payment.id));
                }
                Err(LedgerError::InsufficientBalance { .. }) => {
                    prop_assert!(amount > before);
                    prop_assert_eq!(store.find_account(account_id).unwrap().balance, before);
                    prop_assert_eq!(store.payments().len(), count);
                }
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }
    }

    /// Non-positive amounts are always rejected without mutation.
    #[test]
    fn prop_non_positive_amount_rejected(balance in positive_amount(), amount in -1_000i64..=0) {
        let (mut store, account_id) = funded_store(balance);

        let result = store.pay(account_id, Money::new(amount), PaymentCategory::from("auto"));

        prop_assert_eq!(result, Err(LedgerError::InvalidAmount(Money::new(amount))));
        prop_assert_eq!(store.find_account(account_id).unwrap().balance, Money::new(balance));
        prop_assert!(store.payments().is_empty());
    }

    /// Deposits minus non-failed payments always equal the current balance.
    #[test]
    fn prop_balance_conservation(
        deposit in positive_amount(),
        amounts in prop::collection::vec(positive_amount(), 1..20),
        reject_mask in prop::collection::vec(any::<bool>(), 20),
    ) {
        let (mut store, account_id) = funded_store(deposit);
        for amount in amounts {
            let _ = store.pay(account_id, Money::new(amount), PaymentCategory::from("auto"));
        }
        let ids: Vec<_> = store.payments().iter().map(|p| p.id.clone()).collect();
        for (id, reject) in ids.iter().zip(reject_mask) {
            if reject {
                let before = store.find_account(account_id).unwrap().balance;
                let amount = store.find_payment(id).unwrap().amount;
                store.reject(id).unwrap();
                prop_assert_eq!(
                    store.find_account(account_id).unwrap().balance,
                    before.checked_add(amount).unwrap()
                );
            }
        }

        let spent = Money::checked_sum(
            store
                .payments()
                .iter()
                .filter(|p| !p.status.is_failed())
                .map(|p| p.amount),
        )
        .unwrap();
        let balance = store.find_account(account_id).unwrap().balance;
        prop_assert!(!balance.is_negative());
        prop_assert_eq!(balance.checked_add(spent).unwrap(), Money::new(deposit));
    }
}
