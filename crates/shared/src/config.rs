//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dump storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Payment aggregation configuration.
    #[serde(default)]
    pub aggregation: AggregationConfig,
}

/// Dump storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `accounts.dump`, `payments.dump` and `favorites.dump`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Single-file account snapshot path.
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: PathBuf,
    /// Directory for paged payment history; paged export is skipped when unset.
    #[serde(default)]
    pub history_dir: Option<PathBuf>,
    /// Maximum payment records per history file.
    #[serde(default = "default_payments_per_file")]
    pub payments_per_file: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_snapshot_file() -> PathBuf {
    PathBuf::from("data/accounts.snapshot")
}

fn default_payments_per_file() -> usize {
    100
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            snapshot_file: default_snapshot_file(),
            history_dir: None,
            payments_per_file: default_payments_per_file(),
        }
    }
}

/// Payment aggregation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AggregationConfig {
    /// Number of workers used to sum payments; 1 or less sums sequentially.
    #[serde(default = "default_parallelism")]
    pub parallelism: usize,
}

fn default_parallelism() -> usize {
    4
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            parallelism: default_parallelism(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones overriding earlier ones: `config/default`,
    /// `config/{RUN_MODE}`, then `WALLET__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("WALLET")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
