//! Directory dump: one newline-terminated file per collection.
//!
//! `accounts.dump` and `payments.dump` are required on import; a missing
//! `favorites.dump` means there are no favorites. Export skips the file of an
//! empty collection and stops at the first failing file without removing the
//! ones already written.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use wallet_shared::types::partitions;

use super::error::DumpError;
use super::record::{Record, parse_record};
use crate::ledger::{LedgerSnapshot, LedgerStore, Payment};

/// Account records file name.
pub const ACCOUNTS_FILE: &str = "accounts.dump";
/// Payment records file name; also the first page of a paged export.
pub const PAYMENTS_FILE: &str = "payments.dump";
/// Favorite records file name.
pub const FAVORITES_FILE: &str = "favorites.dump";

/// Writes every non-empty collection of `store` into `dir`.
pub fn export(store: &LedgerStore, dir: &Path) -> Result<(), DumpError> {
    write_if_any(&dir.join(ACCOUNTS_FILE), store.accounts())?;
    write_if_any(&dir.join(PAYMENTS_FILE), store.payments())?;
    write_if_any(&dir.join(FAVORITES_FILE), store.favorites())?;

    info!(
        dir = %dir.display(),
        accounts = store.accounts().len(),
        payments = store.payments().len(),
        favorites = store.favorites().len(),
        "directory dump exported"
    );
    Ok(())
}

/// Reads a directory dump and appends its records to `store`.
///
/// Nothing is appended unless all files parse and the records pass the
/// store's import checks.
pub fn import(store: &mut LedgerStore, dir: &Path) -> Result<(), DumpError> {
    let accounts = read_records(&dir.join(ACCOUNTS_FILE))?;
    let payments = read_records(&dir.join(PAYMENTS_FILE))?;

    let favorites_path = dir.join(FAVORITES_FILE);
    let favorites = match read_records(&favorites_path) {
        Err(err) if err.is_not_found() => {
            warn!(path = %favorites_path.display(), "favorites dump absent, importing none");
            Vec::new()
        }
        other => other?,
    };

    store.import(LedgerSnapshot {
        accounts,
        payments,
        favorites,
    })?;
    Ok(())
}

/// Writes `payments` into `dir` split into files of at most `records_per_file`
/// records: `payments.dump`, then `payments2.dump`, `payments3.dump`, ...
///
/// Returns the written paths in order; an empty slice writes nothing.
pub fn export_payment_pages(
    payments: &[Payment],
    dir: &Path,
    records_per_file: usize,
) -> Result<Vec<PathBuf>, DumpError> {
    if records_per_file == 0 {
        return Err(DumpError::InvalidRecordsPerFile);
    }

    let mut written = Vec::new();
    for (page, range) in partitions(payments.len(), records_per_file)
        .into_iter()
        .enumerate()
    {
        let path = dir.join(page_file_name(page));
        write_records(&path, &payments[range])?;
        written.push(path);
    }

    info!(
        dir = %dir.display(),
        payments = payments.len(),
        files = written.len(),
        "payment pages exported"
    );
    Ok(written)
}

/// File name of the zero-based `page` of a paged payment export.
#[must_use]
pub fn page_file_name(page: usize) -> String {
    match page {
        0 => PAYMENTS_FILE.to_string(),
        n => format!("payments{}.dump", n + 1),
    }
}

fn write_if_any<R: Record>(path: &Path, records: &[R]) -> Result<(), DumpError> {
    if records.is_empty() {
        return Ok(());
    }
    write_records(path, records)
}

fn write_records<R: Record>(path: &Path, records: &[R]) -> Result<(), DumpError> {
    let file = File::create(path).map_err(DumpError::io(path))?;
    let mut writer = BufWriter::new(file);
    for record in records {
        writeln!(writer, "{}", record.encode()).map_err(DumpError::io(path))?;
    }
    writer.flush().map_err(DumpError::io(path))
}

fn read_records<R: Record>(path: &Path) -> Result<Vec<R>, DumpError> {
    let file = File::open(path).map_err(DumpError::io(path))?;
    parse_lines(path, BufReader::new(file))
}

fn parse_lines<R: Record>(path: &Path, reader: impl BufRead) -> Result<Vec<R>, DumpError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line: String = line.map_err(DumpError::io(path))?;
        if line.is_empty() {
            continue;
        }
        let record = parse_record(&line).map_err(|reason| DumpError::MalformedRecord {
            path: path.to_path_buf(),
            record: idx + 1,
            reason,
        })?;
        records.push(record);
    }
    Ok(records)
}
