//! Field-level encoding shared by both dump formats.
//!
//! A record is a fixed sequence of fields joined with `;`:
//! - account: `id;phone;balance`
//! - payment: `id;account_id;amount;category;status`
//! - favorite: `id;account_id;amount;name;category`

use std::fmt::Display;
use std::str::FromStr;

use wallet_shared::types::{AccountId, Money, PaymentCategory, Phone};

use crate::ledger::{Account, Favorite, Payment};

/// Separator between the fields of one record.
pub(crate) const FIELD_SEPARATOR: char = ';';

/// A ledger entity with a fixed `;`-separated text form.
pub(crate) trait Record: Sized {
    /// Number of fields in the text form.
    const FIELDS: usize;

    /// Encodes the record without any terminator.
    fn encode(&self) -> String;

    /// Decodes a record from exactly [`Record::FIELDS`] fields.
    fn decode(fields: &[&str]) -> Result<Self, String>;
}

/// Parses one record, checking the field count first.
pub(crate) fn parse_record<R: Record>(text: &str) -> Result<R, String> {
    let fields: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
    if fields.len() != R::FIELDS {
        return Err(format!(
            "expected {} fields, found {}",
            R::FIELDS,
            fields.len()
        ));
    }
    R::decode(&fields)
}

fn parse_field<T>(raw: &str, name: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse()
        .map_err(|err| format!("invalid {name} `{raw}`: {err}"))
}

fn positive_amount(raw: &str) -> Result<Money, String> {
    let amount: Money = parse_field(raw, "amount")?;
    if amount.is_positive() {
        Ok(amount)
    } else {
        Err(format!("amount must be positive, got {amount}"))
    }
}

impl Record for Account {
    const FIELDS: usize = 3;

    fn encode(&self) -> String {
        format!("{};{};{}", self.id, self.phone, self.balance)
    }

    fn decode(fields: &[&str]) -> Result<Self, String> {
        let &[id, phone, balance] = fields else {
            return Err(format!("expected {} fields", Self::FIELDS));
        };
        if phone.is_empty() {
            return Err("phone cannot be empty".to_string());
        }
        let id: AccountId = parse_field(id, "account id")?;
        if !id.is_valid() {
            return Err(format!("account id must be at least 1, got {id}"));
        }
        let balance: Money = parse_field(balance, "balance")?;
        if balance.is_negative() {
            return Err(format!("balance cannot be negative, got {balance}"));
        }

        Ok(Self {
            id,
            phone: Phone::from(phone),
            balance,
        })
    }
}

impl Record for Payment {
    const FIELDS: usize = 5;

    fn encode(&self) -> String {
        format!(
            "{};{};{};{};{}",
            self.id, self.account_id, self.amount, self.category, self.status
        )
    }

    fn decode(fields: &[&str]) -> Result<Self, String> {
        let &[id, account_id, amount, category, status] = fields else {
            return Err(format!("expected {} fields", Self::FIELDS));
        };

        Ok(Self {
            id: parse_field(id, "payment id")?,
            account_id: parse_field(account_id, "account id")?,
            amount: positive_amount(amount)?,
            category: PaymentCategory::from(category),
            status: parse_field(status, "status")?,
        })
    }
}

impl Record for Favorite {
    const FIELDS: usize = 5;

    fn encode(&self) -> String {
        format!(
            "{};{};{};{};{}",
            self.id, self.account_id, self.amount, self.name, self.category
        )
    }

    fn decode(fields: &[&str]) -> Result<Self, String> {
        let &[id, account_id, amount, name, category] = fields else {
            return Err(format!("expected {} fields", Self::FIELDS));
        };

        Ok(Self {
            id: parse_field(id, "favorite id")?,
            account_id: parse_field(account_id, "account id")?,
            amount: positive_amount(amount)?,
            name: name.to_string(),
            category: PaymentCategory::from(category),
        })
    }
}
