//! Ledger store owning accounts, payments and favorites.
//!
//! The store is the single owner of ledger state. Its operations are logically
//! sequential: callers that share a store between threads must serialize access
//! themselves, e.g. behind a `Mutex`.
//!
//! Every operation validates first and mutates last, so a failed call leaves
//! the store exactly as it was.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};
use wallet_shared::types::{AccountId, FavoriteId, Money, PaymentCategory, PaymentId, Phone};

use super::error::LedgerError;
use super::types::{Account, Favorite, LedgerSnapshot, Payment, PaymentStatus};

/// In-memory ledger with ordered collections and lookup indexes.
#[derive(Debug, Default)]
pub struct LedgerStore {
    last_account_id: AccountId,
    accounts: Vec<Account>,
    payments: Vec<Payment>,
    favorites: Vec<Favorite>,
    account_index: HashMap<AccountId, usize>,
    phone_index: HashMap<Phone, usize>,
    payment_index: HashMap<PaymentId, usize>,
    favorite_index: HashMap<FavoriteId, usize>,
}

impl LedgerStore {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts in registration order.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Payments in creation order.
    #[must_use]
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Favorites in creation order.
    #[must_use]
    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    /// Registers a new account with a zero balance.
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePhone` if the phone is already registered, or
    /// `AccountIdsExhausted` once the largest account ID has been used.
    pub fn register_account(&mut self, phone: Phone) -> Result<Account, LedgerError> {
        if self.phone_index.contains_key(&phone) {
            return Err(LedgerError::DuplicatePhone(phone));
        }

        let id = self
            .last_account_id
            .checked_next()
            .ok_or(LedgerError::AccountIdsExhausted)?;
        let account = Account {
            id,
            phone,
            balance: Money::ZERO,
        };
        self.last_account_id = id;
        self.push_account(account.clone());

        debug!(account_id = %id, "account registered");
        Ok(account)
    }

    /// Looks up an account by ID.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has this ID.
    pub fn find_account(&self, id: AccountId) -> Result<&Account, LedgerError> {
        self.account_position(id).map(|idx| &self.accounts[idx])
    }

    /// Credits an account. Deposits are not recorded as payments.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` for non-positive amounts and `AccountNotFound`
    /// for unknown accounts.
    pub fn deposit(&mut self, account_id: AccountId, amount: Money) -> Result<(), LedgerError> {
        ensure_positive(amount)?;
        let idx = self.account_position(account_id)?;

        let account = &mut self.accounts[idx];
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow(account_id))?;

        debug!(account_id = %account_id, amount = %amount, "deposit applied");
        Ok(())
    }

    /// Debits an account and records an in-progress payment.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount`, `AccountNotFound` or `InsufficientBalance`.
    pub fn pay(
        &mut self,
        account_id: AccountId,
        amount: Money,
        category: PaymentCategory,
    ) -> Result<Payment, LedgerError> {
        ensure_positive(amount)?;
        let idx = self.account_position(account_id)?;

        let balance = self.accounts[idx].balance;
        let remaining = balance
            .checked_sub(amount)
            .filter(|remaining| !remaining.is_negative())
            .ok_or(LedgerError::InsufficientBalance {
                account_id,
                balance,
                requested: amount,
            })?;

        let payment = Payment {
            id: self.fresh_payment_id(),
            account_id,
            amount,
            category,
            status: PaymentStatus::InProgress,
        };
        self.accounts[idx].balance = remaining;
        self.push_payment(payment.clone());

        debug!(
            payment_id = %payment.id,
            account_id = %account_id,
            amount = %amount,
            "payment created"
        );
        Ok(payment)
    }

    /// Looks up a payment by ID.
    ///
    /// # Errors
    ///
    /// Returns `PaymentNotFound` if no payment has this ID.
    pub fn find_payment(&self, id: &PaymentId) -> Result<&Payment, LedgerError> {
        self.payment_position(id).map(|idx| &self.payments[idx])
    }

    /// Marks a payment as failed and refunds its amount to the account.
    ///
    /// Rejecting is not idempotent: a second call fails with `AlreadyRejected`
    /// instead of refunding twice.
    ///
    /// # Errors
    ///
    /// Returns `PaymentNotFound`, `AlreadyRejected` or `AccountNotFound`.
    pub fn reject(&mut self, payment_id: &PaymentId) -> Result<(), LedgerError> {
        let payment_idx = self.payment_position(payment_id)?;
        let payment = &self.payments[payment_idx];
        if payment.status.is_failed() {
            return Err(LedgerError::AlreadyRejected(payment_id.clone()));
        }

        let account_id = payment.account_id;
        let amount = payment.amount;
        let account_idx = self.account_position(account_id)?;
        let refunded = self.accounts[account_idx]
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow(account_id))?;

        self.payments[payment_idx].status = PaymentStatus::Fail;
        self.accounts[account_idx].balance = refunded;

        debug!(
            payment_id = %payment_id,
            account_id = %account_id,
            amount = %amount,
            "payment rejected"
        );
        Ok(())
    }

    /// Issues a new payment with the same account, amount and category.
    ///
    /// # Errors
    ///
    /// Returns `PaymentNotFound` or any error of [`LedgerStore::pay`].
    pub fn repeat(&mut self, payment_id: &PaymentId) -> Result<Payment, LedgerError> {
        let original = self.find_payment(payment_id)?;
        let (account_id, amount, category) =
            (original.account_id, original.amount, original.category.clone());

        self.pay(account_id, amount, category)
    }

    /// Saves a payment as a named favorite template.
    ///
    /// # Errors
    ///
    /// Returns `PaymentNotFound` if no payment has this ID.
    pub fn favorite_payment(
        &mut self,
        payment_id: &PaymentId,
        name: impl Into<String>,
    ) -> Result<Favorite, LedgerError> {
        let payment = self.find_payment(payment_id)?;
        let favorite = Favorite {
            id: self.fresh_favorite_id(),
            account_id: payment.account_id,
            amount: payment.amount,
            name: name.into(),
            category: payment.category.clone(),
        };
        self.push_favorite(favorite.clone());

        debug!(favorite_id = %favorite.id, payment_id = %payment_id, "favorite created");
        Ok(favorite)
    }

    /// Looks up a favorite by ID.
    ///
    /// # Errors
    ///
    /// Returns `FavoriteNotFound` if no favorite has this ID.
    pub fn find_favorite(&self, id: &FavoriteId) -> Result<&Favorite, LedgerError> {
        self.favorite_index
            .get(id)
            .map(|&idx| &self.favorites[idx])
            .ok_or_else(|| LedgerError::FavoriteNotFound(id.clone()))
    }

    /// Issues a new payment from a favorite template.
    ///
    /// # Errors
    ///
    /// Returns `FavoriteNotFound` or any error of [`LedgerStore::pay`].
    pub fn pay_from_favorite(&mut self, favorite_id: &FavoriteId) -> Result<Payment, LedgerError> {
        let favorite = self.find_favorite(favorite_id)?;
        let (account_id, amount, category) =
            (favorite.account_id, favorite.amount, favorite.category.clone());

        self.pay(account_id, amount, category)
    }

    /// Returns a copy of every payment debited from an account, in creation order.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has this ID.
    pub fn export_account_history(
        &self,
        account_id: AccountId,
    ) -> Result<Vec<Payment>, LedgerError> {
        self.account_position(account_id)?;
        Ok(self
            .payments
            .iter()
            .filter(|payment| payment.account_id == account_id)
            .cloned()
            .collect())
    }

    /// Appends previously dumped records to the ledger.
    ///
    /// The whole snapshot is validated before anything is appended: IDs and
    /// phones must not collide with existing or sibling records, and every
    /// payment and favorite must reference a known account. Registration
    /// continues after the largest imported account ID.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAccountId` for an account ID below 1, or a duplicate-ID,
    /// `DuplicatePhone` or `AccountNotFound` error.
    pub fn import(&mut self, snapshot: LedgerSnapshot) -> Result<(), LedgerError> {
        self.validate_snapshot(&snapshot)?;

        let LedgerSnapshot {
            accounts,
            payments,
            favorites,
        } = snapshot;
        let counts = (accounts.len(), payments.len(), favorites.len());

        for account in accounts {
            self.last_account_id = self.last_account_id.max(account.id);
            self.push_account(account);
        }
        for payment in payments {
            self.push_payment(payment);
        }
        for favorite in favorites {
            self.push_favorite(favorite);
        }

        info!(
            accounts = counts.0,
            payments = counts.1,
            favorites = counts.2,
            "snapshot imported"
        );
        Ok(())
    }

    fn validate_snapshot(&self, snapshot: &LedgerSnapshot) -> Result<(), LedgerError> {
        let mut account_ids = HashSet::new();
        let mut phones = HashSet::new();
        for account in &snapshot.accounts {
            if !account.id.is_valid() {
                return Err(LedgerError::InvalidAccountId(account.id));
            }
            if self.account_index.contains_key(&account.id) || !account_ids.insert(account.id) {
                return Err(LedgerError::DuplicateAccountId(account.id));
            }
            if self.phone_index.contains_key(&account.phone) || !phones.insert(&account.phone) {
                return Err(LedgerError::DuplicatePhone(account.phone.clone()));
            }
        }

        let known_account =
            |id: AccountId| self.account_index.contains_key(&id) || account_ids.contains(&id);

        let mut payment_ids = HashSet::new();
        for payment in &snapshot.payments {
            if self.payment_index.contains_key(&payment.id) || !payment_ids.insert(&payment.id) {
                return Err(LedgerError::DuplicatePaymentId(payment.id.clone()));
            }
            if !known_account(payment.account_id) {
                return Err(LedgerError::AccountNotFound(payment.account_id));
            }
        }

        let mut favorite_ids = HashSet::new();
        for favorite in &snapshot.favorites {
            if self.favorite_index.contains_key(&favorite.id) || !favorite_ids.insert(&favorite.id)
            {
                return Err(LedgerError::DuplicateFavoriteId(favorite.id.clone()));
            }
            if !known_account(favorite.account_id) {
                return Err(LedgerError::AccountNotFound(favorite.account_id));
            }
        }

        Ok(())
    }

    fn account_position(&self, id: AccountId) -> Result<usize, LedgerError> {
        self.account_index
            .get(&id)
            .copied()
            .ok_or(LedgerError::AccountNotFound(id))
    }

    fn payment_position(&self, id: &PaymentId) -> Result<usize, LedgerError> {
        self.payment_index
            .get(id)
            .copied()
            .ok_or_else(|| LedgerError::PaymentNotFound(id.clone()))
    }

    fn push_account(&mut self, account: Account) {
        let idx = self.accounts.len();
        self.account_index.insert(account.id, idx);
        self.phone_index.insert(account.phone.clone(), idx);
        self.accounts.push(account);
    }

    fn push_payment(&mut self, payment: Payment) {
        self.payment_index.insert(payment.id.clone(), self.payments.len());
        self.payments.push(payment);
    }

    fn push_favorite(&mut self, favorite: Favorite) {
        self.favorite_index
            .insert(favorite.id.clone(), self.favorites.len());
        self.favorites.push(favorite);
    }

    // Imported IDs are arbitrary text, so a generated one is checked too.
    fn fresh_payment_id(&self) -> PaymentId {
        loop {
            let id = PaymentId::new();
            if !self.payment_index.contains_key(&id) {
                return id;
            }
        }
    }

    fn fresh_favorite_id(&self) -> FavoriteId {
        loop {
            let id = FavoriteId::new();
            if !self.favorite_index.contains_key(&id) {
                return id;
            }
        }
    }
}

fn ensure_positive(amount: Money) -> Result<(), LedgerError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: &str = "+992000000001";

    /// Registers an account, funds it and makes the given payments.
    fn seeded_store(
        balance: i64,
        payments: &[(i64, &str)],
    ) -> (LedgerStore, Account, Vec<Payment>) {
        let mut store = LedgerStore::new();
        let account = store.register_account(Phone::from(PHONE)).unwrap();
        store.deposit(account.id, Money::new(balance)).unwrap();
        let payments = payments
            .iter()
            .map(|&(amount, category)| {
                store
                    .pay(account.id, Money::new(amount), PaymentCategory::from(category))
                    .unwrap()
            })
            .collect();
        (store, account, payments)
    }

    fn balance_of(store: &LedgerStore, id: AccountId) -> Money {
        store.find_account(id).unwrap().balance
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let mut store = LedgerStore::new();
        let first = store.register_account(Phone::from("1")).unwrap();
        let second = store.register_account(Phone::from("2")).unwrap();

        assert_eq!(first.id, AccountId::new(1));
        assert_eq!(second.id, AccountId::new(2));
        assert_eq!(first.balance, Money::ZERO);
        assert_eq!(store.accounts().len(), 2);
    }

    #[test]
    fn test_register_duplicate_phone() {
        let mut store = LedgerStore::new();
        store.register_account(Phone::from(PHONE)).unwrap();

        let err = store.register_account(Phone::from(PHONE)).unwrap_err();
        assert_eq!(err, LedgerError::DuplicatePhone(Phone::from(PHONE)));
        assert_eq!(store.accounts().len(), 1);
    }

    #[test]
    fn test_find_account() {
        let (store, account, _) = seeded_store(100, &[]);
        assert_eq!(store.find_account(account.id).unwrap().phone, Phone::from(PHONE));
        assert_eq!(
            store.find_account(AccountId::new(99)).unwrap_err(),
            LedgerError::AccountNotFound(AccountId::new(99))
        );
    }

    #[test]
    fn test_deposit() {
        let (mut store, account, _) = seeded_store(1_000_000, &[]);
        store.deposit(account.id, Money::new(500)).unwrap();

        assert_eq!(balance_of(&store, account.id), Money::new(1_000_500));
        assert!(store.payments().is_empty());
    }

    #[test]
    fn test_deposit_rejects_bad_input() {
        let (mut store, account, _) = seeded_store(100, &[]);

        assert_eq!(
            store.deposit(account.id, Money::ZERO),
            Err(LedgerError::InvalidAmount(Money::ZERO))
        );
        assert_eq!(
            store.deposit(account.id, Money::new(-5)),
            Err(LedgerError::InvalidAmount(Money::new(-5)))
        );
        assert_eq!(
            store.deposit(AccountId::new(2), Money::new(5)),
            Err(LedgerError::AccountNotFound(AccountId::new(2)))
        );
        assert_eq!(balance_of(&store, account.id), Money::new(100));
    }

    #[test]
    fn test_deposit_overflow_leaves_balance() {
        let (mut store, account, _) = seeded_store(i64::MAX, &[]);
        assert_eq!(
            store.deposit(account.id, Money::new(1)),
            Err(LedgerError::BalanceOverflow(account.id))
        );
        assert_eq!(balance_of(&store, account.id), Money::new(i64::MAX));
    }

    #[test]
    fn test_pay_debits_and_records() {
        let (mut store, account, _) = seeded_store(1_000_000, &[]);
        let payment = store
            .pay(account.id, Money::new(100_000), PaymentCategory::from("auto"))
            .unwrap();

        assert_eq!(balance_of(&store, account.id), Money::new(900_000));
        assert_eq!(payment.status, PaymentStatus::InProgress);
        assert_eq!(payment.account_id, account.id);
        assert_eq!(store.payments(), std::slice::from_ref(&payment));
        assert_eq!(store.find_payment(&payment.id).unwrap(), &payment);
    }

    #[test]
    fn test_pay_exact_balance() {
        let (mut store, account, _) = seeded_store(500, &[]);
        store
            .pay(account.id, Money::new(500), PaymentCategory::from("food"))
            .unwrap();
        assert_eq!(balance_of(&store, account.id), Money::ZERO);
    }

    #[test]
    fn test_pay_insufficient_balance() {
        let (mut store, account, _) = seeded_store(500, &[]);
        let err = store
            .pay(account.id, Money::new(501), PaymentCategory::from("auto"))
            .unwrap_err();

        assert_eq!(
            err,
            LedgerError::InsufficientBalance {
                account_id: account.id,
                balance: Money::new(500),
                requested: Money::new(501),
            }
        );
        assert_eq!(balance_of(&store, account.id), Money::new(500));
        assert!(store.payments().is_empty());
    }

    #[test]
    fn test_pay_invalid_amount() {
        let (mut store, account, _) = seeded_store(500, &[]);
        for amount in [0, -1] {
            assert_eq!(
                store.pay(account.id, Money::new(amount), PaymentCategory::from("auto")),
                Err(LedgerError::InvalidAmount(Money::new(amount)))
            );
        }
        assert_eq!(balance_of(&store, account.id), Money::new(500));
        assert!(store.payments().is_empty());
    }

    #[test]
    fn test_pay_unknown_account() {
        let mut store = LedgerStore::new();
        assert_eq!(
            store.pay(AccountId::FIRST, Money::new(1), PaymentCategory::from("auto")),
            Err(LedgerError::AccountNotFound(AccountId::FIRST))
        );
    }

    #[test]
    fn test_find_payment_not_found() {
        let (store, _, _) = seeded_store(100, &[]);
        let id = PaymentId::from("missing");
        assert_eq!(
            store.find_payment(&id),
            Err(LedgerError::PaymentNotFound(id.clone()))
        );
    }

    #[test]
    fn test_reject_refunds() {
        let (mut store, account, payments) = seeded_store(1_000_000, &[(100_000, "auto")]);
        let payment = &payments[0];

        store.reject(&payment.id).unwrap();

        assert_eq!(balance_of(&store, account.id), Money::new(1_000_000));
        assert_eq!(
            store.find_payment(&payment.id).unwrap().status,
            PaymentStatus::Fail
        );
    }

    #[test]
    fn test_reject_twice_does_not_double_refund() {
        let (mut store, account, payments) = seeded_store(1_000_000, &[(100_000, "auto")]);
        let payment = &payments[0];

        store.reject(&payment.id).unwrap();
        assert_eq!(
            store.reject(&payment.id),
            Err(LedgerError::AlreadyRejected(payment.id.clone()))
        );
        assert_eq!(balance_of(&store, account.id), Money::new(1_000_000));
    }

    #[test]
    fn test_reject_unknown_payment() {
        let (mut store, _, _) = seeded_store(100, &[]);
        let id = PaymentId::from("missing");
        assert_eq!(store.reject(&id), Err(LedgerError::PaymentNotFound(id.clone())));
    }

    #[test]
    fn test_repeat_creates_new_payment() {
        let (mut store, account, payments) = seeded_store(1_000_000, &[(100_000, "auto")]);
        let original = &payments[0];

        let repeated = store.repeat(&original.id).unwrap();

        assert_ne!(repeated.id, original.id);
        assert_eq!(repeated.account_id, original.account_id);
        assert_eq!(repeated.amount, original.amount);
        assert_eq!(repeated.category, original.category);
        assert_eq!(repeated.status, PaymentStatus::InProgress);
        assert_eq!(balance_of(&store, account.id), Money::new(800_000));
        assert_eq!(store.payments().len(), 2);
    }

    #[test]
    fn test_repeat_insufficient_balance() {
        let (mut store, account, payments) = seeded_store(1_000, &[(600, "auto")]);

        let err = store.repeat(&payments[0].id).unwrap_err();

        assert!(matches!(err, LedgerError::InsufficientBalance { .. }));
        assert_eq!(balance_of(&store, account.id), Money::new(400));
        assert_eq!(store.payments().len(), 1);
    }

    #[test]
    fn test_repeat_of_rejected_payment_is_independent() {
        let (mut store, _, payments) = seeded_store(1_000, &[(600, "auto")]);
        store.reject(&payments[0].id).unwrap();

        let repeated = store.repeat(&payments[0].id).unwrap();
        assert_eq!(repeated.status, PaymentStatus::InProgress);
        assert_eq!(
            store.find_payment(&payments[0].id).unwrap().status,
            PaymentStatus::Fail
        );
    }

    #[test]
    fn test_favorite_then_pay_from_favorite() {
        let (mut store, account, payments) = seeded_store(1_000_000, &[(100_000, "auto")]);
        let original = &payments[0];

        let favorite = store.favorite_payment(&original.id, "car wash").unwrap();
        assert_eq!(favorite.name, "car wash");
        assert_eq!(favorite.account_id, original.account_id);
        assert_eq!(favorite.amount, original.amount);
        assert_eq!(favorite.category, original.category);
        assert_eq!(store.find_favorite(&favorite.id).unwrap(), &favorite);

        let payment = store.pay_from_favorite(&favorite.id).unwrap();
        assert_ne!(payment.id, original.id);
        assert_eq!(payment.account_id, original.account_id);
        assert_eq!(payment.amount, original.amount);
        assert_eq!(payment.category, original.category);
        assert_eq!(balance_of(&store, account.id), Money::new(800_000));
        assert_eq!(store.find_favorite(&favorite.id).unwrap(), &favorite);
    }

    #[test]
    fn test_favorite_unknown_payment() {
        let (mut store, _, _) = seeded_store(100, &[]);
        let id = PaymentId::from("missing");
        assert_eq!(
            store.favorite_payment(&id, "x"),
            Err(LedgerError::PaymentNotFound(id.clone()))
        );
        assert!(store.favorites().is_empty());
    }

    #[test]
    fn test_pay_from_unknown_favorite() {
        let (mut store, _, _) = seeded_store(100, &[]);
        let id = FavoriteId::from("missing");
        assert_eq!(
            store.pay_from_favorite(&id),
            Err(LedgerError::FavoriteNotFound(id.clone()))
        );
    }

    #[test]
    fn test_pay_from_favorite_insufficient_balance() {
        let (mut store, _, payments) = seeded_store(1_000, &[(600, "auto")]);
        let favorite = store.favorite_payment(&payments[0].id, "rent").unwrap();

        assert!(matches!(
            store.pay_from_favorite(&favorite.id),
            Err(LedgerError::InsufficientBalance { .. })
        ));
        assert_eq!(store.payments().len(), 1);
    }

    #[test]
    fn test_export_account_history() {
        let (mut store, account, payments) =
            seeded_store(1_000_000, &[(100, "auto"), (200, "food")]);
        let other = store.register_account(Phone::from("+992000000002")).unwrap();
        store.deposit(other.id, Money::new(1_000)).unwrap();
        store
            .pay(other.id, Money::new(300), PaymentCategory::from("auto"))
            .unwrap();

        assert_eq!(store.export_account_history(account.id).unwrap(), payments);
        assert_eq!(store.export_account_history(other.id).unwrap().len(), 1);
        assert_eq!(
            store.export_account_history(AccountId::new(9)),
            Err(LedgerError::AccountNotFound(AccountId::new(9)))
        );
    }

    fn sample_snapshot() -> LedgerSnapshot {
        LedgerSnapshot {
            accounts: vec![Account {
                id: AccountId::new(5),
                phone: Phone::from("+992000000005"),
                balance: Money::new(100_000),
            }],
            payments: vec![Payment {
                id: PaymentId::from("p1"),
                account_id: AccountId::new(5),
                amount: Money::new(10_000),
                category: PaymentCategory::from("auto"),
                status: PaymentStatus::InProgress,
            }],
            favorites: vec![Favorite {
                id: FavoriteId::from("f1"),
                account_id: AccountId::new(5),
                amount: Money::new(10_000),
                name: "fuel".to_string(),
                category: PaymentCategory::from("auto"),
            }],
        }
    }

    #[test]
    fn test_import_appends_and_indexes() {
        let mut store = LedgerStore::new();
        store.register_account(Phone::from(PHONE)).unwrap();

        store.import(sample_snapshot()).unwrap();

        assert_eq!(store.accounts().len(), 2);
        assert_eq!(store.accounts()[0].phone, Phone::from(PHONE));
        assert_eq!(
            store.find_payment(&PaymentId::from("p1")).unwrap().amount,
            Money::new(10_000)
        );
        assert_eq!(
            store.find_favorite(&FavoriteId::from("f1")).unwrap().name,
            "fuel"
        );

        let next = store.register_account(Phone::from("+992000000006")).unwrap();
        assert_eq!(next.id, AccountId::new(6));
    }

    #[test]
    fn test_import_rejects_duplicate_phone_without_mutation() {
        let mut store = LedgerStore::new();
        store.register_account(Phone::from("+992000000005")).unwrap();

        assert_eq!(
            store.import(sample_snapshot()),
            Err(LedgerError::DuplicatePhone(Phone::from("+992000000005")))
        );
        assert_eq!(store.accounts().len(), 1);
        assert!(store.payments().is_empty());
    }

    #[test]
    fn test_import_rejects_dangling_payment() {
        let mut snapshot = sample_snapshot();
        snapshot.accounts.clear();

        let mut store = LedgerStore::new();
        assert_eq!(
            store.import(snapshot),
            Err(LedgerError::AccountNotFound(AccountId::new(5)))
        );
        assert!(store.payments().is_empty());
    }

    #[test]
    fn test_import_rejects_duplicate_payment_id() {
        let mut snapshot = sample_snapshot();
        snapshot.payments.push(snapshot.payments[0].clone());

        let mut store = LedgerStore::new();
        assert_eq!(
            store.import(snapshot),
            Err(LedgerError::DuplicatePaymentId(PaymentId::from("p1")))
        );
        assert!(store.accounts().is_empty());
    }

    fn account(id: i64, phone: &str) -> Account {
        Account {
            id: AccountId::new(id),
            phone: Phone::from(phone),
            balance: Money::ZERO,
        }
    }

    #[test]
    fn test_register_after_importing_max_id() {
        let mut store = LedgerStore::new();
        store
            .import(LedgerSnapshot {
                accounts: vec![account(i64::MAX, PHONE)],
                ..LedgerSnapshot::default()
            })
            .unwrap();

        assert_eq!(
            store.register_account(Phone::from("+992000000002")),
            Err(LedgerError::AccountIdsExhausted)
        );
        assert_eq!(store.accounts().len(), 1);
    }

    #[test]
    fn test_import_rejects_non_positive_account_id() {
        let mut store = LedgerStore::new();
        for id in [0, -1, i64::MIN] {
            assert_eq!(
                store.import(LedgerSnapshot {
                    accounts: vec![account(id, PHONE)],
                    ..LedgerSnapshot::default()
                }),
                Err(LedgerError::InvalidAccountId(AccountId::new(id)))
            );
        }
        assert!(store.accounts().is_empty());

        let first = store.register_account(Phone::from(PHONE)).unwrap();
        assert_eq!(first.id, AccountId::FIRST);
    }
}
