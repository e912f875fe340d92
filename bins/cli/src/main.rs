//! Wallet ledger CLI
//!
//! Loads the directory dump named by the configuration, reports the payment
//! volume, and writes the account snapshot (plus paged payment history when a
//! history directory is configured). Failures exit with the status of the
//! underlying `AppError`.

use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wallet_core::LedgerStore;
use wallet_core::dump::{directory, snapshot};
use wallet_shared::{AppConfig, AppError};

/// Exit status for failures that carry no `AppError`.
const FALLBACK_EXIT_CODE: u8 = 1;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wallet=info,wallet_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let app_error = err.downcast_ref::<AppError>();
            error!(
                code = app_error.map_or("UNKNOWN", AppError::error_code),
                "{err:#}"
            );
            eprintln!("wallet: {err:#}");
            ExitCode::from(app_error.map_or(FALLBACK_EXIT_CODE, AppError::exit_code))
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = AppConfig::load()
        .map_err(AppError::from)
        .context("loading configuration")?;
    let storage = &config.storage;

    let mut store = LedgerStore::new();
    directory::import(&mut store, &storage.data_dir)
        .map_err(AppError::from)
        .with_context(|| format!("importing {}", storage.data_dir.display()))?;

    let total = store
        .sum_payments(config.aggregation.parallelism)
        .map_err(AppError::from)
        .context("summing payments")?;
    info!(
        accounts = store.accounts().len(),
        payments = store.payments().len(),
        favorites = store.favorites().len(),
        total = %total.as_major_units(),
        "ledger loaded"
    );

    snapshot::export(&store, &storage.snapshot_file)
        .map_err(AppError::from)
        .with_context(|| format!("writing {}", storage.snapshot_file.display()))?;

    if let Some(history_dir) = &storage.history_dir {
        directory::export_payment_pages(store.payments(), history_dir, storage.payments_per_file)
            .map_err(AppError::from)
            .with_context(|| format!("writing history to {}", history_dir.display()))?;
    }

    Ok(())
}
