//! Single-file account snapshot.
//!
//! Accounts are encoded as `id;phone;balance` and joined with `|`. No newline
//! is written; on import, empty segments (e.g. from a trailing `|` or a
//! trailing newline) are skipped.

use std::fs;
use std::path::Path;

use tracing::info;

use super::error::DumpError;
use super::record::{Record, parse_record};
use crate::ledger::{Account, LedgerSnapshot, LedgerStore};

/// Separator between account records.
pub const RECORD_SEPARATOR: char = '|';

/// Writes all accounts of `store` to `path`, replacing any existing file.
pub fn export(store: &LedgerStore, path: &Path) -> Result<(), DumpError> {
    fs::write(path, encode(store.accounts())).map_err(DumpError::io(path))?;

    info!(
        path = %path.display(),
        accounts = store.accounts().len(),
        "account snapshot exported"
    );
    Ok(())
}

/// Reads an account snapshot and appends its accounts to `store`.
pub fn import(store: &mut LedgerStore, path: &Path) -> Result<(), DumpError> {
    let content = fs::read_to_string(path).map_err(DumpError::io(path))?;
    let accounts = decode(path, &content)?;

    store.import(LedgerSnapshot {
        accounts,
        ..LedgerSnapshot::default()
    })?;
    Ok(())
}

fn encode(accounts: &[Account]) -> String {
    accounts
        .iter()
        .map(Record::encode)
        .collect::<Vec<_>>()
        .join(&RECORD_SEPARATOR.to_string())
}

fn decode(path: &Path, content: &str) -> Result<Vec<Account>, DumpError> {
    content
        .split(RECORD_SEPARATOR)
        .enumerate()
        .map(|(idx, segment)| (idx, segment.trim_matches(['\r', '\n'])))
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(idx, segment)| {
            parse_record(segment).map_err(|reason| DumpError::MalformedRecord {
                path: path.to_path_buf(),
                record: idx + 1,
                reason,
            })
        })
        .collect()
}
