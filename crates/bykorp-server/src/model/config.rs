//! Configuration management for the Bykorp server
//!
//! Values are layered, later sources winning:
//! 1. `conf/application.yml` (optional, path overridable with `--config`)
//! 2. `BYKORP_<SECTION>__<KEY>` environment variables
//! 3. command line flags

use std::path::PathBuf;
use std::time::Duration;

use bykorp_common::{BykorpError, split_list};
use bykorp_persistence::StorageMode;
use clap::Parser;
use config::{Config, Environment, File};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use super::constants::*;
use crate::startup::LoggingConfig;

/// Command line arguments for the server
#[derive(Debug, Default, Parser)]
#[command(name = "bykorp-server", about = "Bykorp agency website API server")]
pub struct Cli {
    /// Configuration file
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
    #[arg(short = 'p', long = "port", env = "PORT")]
    pub port: Option<u16>,
    /// mysql, sqlite or embedded
    #[arg(short = 's', long = "storage", env = "BYKORP_STORAGE")]
    pub storage: Option<String>,
    #[arg(long = "db-url", env = "DATABASE_URL")]
    pub database_url: Option<String>,
    /// Data directory of the embedded store
    #[arg(long = "data-dir")]
    pub data_dir: Option<PathBuf>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> anyhow::Result<Self> {
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(args: Cli) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(File::from(args.config.as_path()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(port) = args.port {
            builder = builder.set_override(SERVER_PORT_PROPERTY, i64::from(port))?;
        }
        if let Some(storage) = args.storage {
            builder = builder.set_override(PERSISTENCE_MODE_PROPERTY, storage)?;
        }
        if let Some(url) = args.database_url {
            builder = builder.set_override(DB_URL_PROPERTY, url)?;
        }
        if let Some(dir) = args.data_dir {
            builder = builder
                .set_override(EMBEDDED_DATA_DIR_PROPERTY, dir.to_string_lossy().to_string())?;
        }

        let config = builder.build().map_err(|e| {
            BykorpError::ConfigError(format!(
                "failed to load {}: {}",
                args.config.display(),
                e
            ))
        })?;

        Ok(Self::from_config(config))
    }

    pub fn from_config(config: Config) -> Self {
        Configuration { config }
    }

    // ========================================================================
    // Server Configuration
    // ========================================================================

    pub fn server_address(&self) -> String {
        self.config
            .get_string(SERVER_ADDRESS_PROPERTY)
            .unwrap_or(DEFAULT_SERVER_ADDRESS.to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int(SERVER_PORT_PROPERTY)
            .ok()
            .and_then(|p| u16::try_from(p).ok())
            .unwrap_or(DEFAULT_SERVER_PORT)
    }

    // ========================================================================
    // Storage Configuration
    // ========================================================================

    pub fn persistence_mode(&self) -> Result<StorageMode, BykorpError> {
        self.config
            .get_string(PERSISTENCE_MODE_PROPERTY)
            .unwrap_or(DEFAULT_PERSISTENCE_MODE.to_string())
            .parse::<StorageMode>()
            .map_err(BykorpError::ConfigError)
    }

    /// Configured database URL, or the default for `mode`
    pub fn db_url(&self, mode: StorageMode) -> Option<String> {
        self.config
            .get_string(DB_URL_PROPERTY)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| mode.default_url().map(str::to_string))
    }

    pub async fn database_connection(&self, url: &str) -> anyhow::Result<DatabaseConnection> {
        let max_connections = self.int_or(DB_MAX_CONNECTIONS_PROPERTY, 10u32);
        let min_connections = self.int_or(DB_MIN_CONNECTIONS_PROPERTY, 1u32);
        let connect_timeout = self.int_or(DB_CONNECT_TIMEOUT_PROPERTY, 30u64);
        let acquire_timeout = self.int_or(DB_ACQUIRE_TIMEOUT_PROPERTY, 8u64);
        let sqlx_logging = self
            .config
            .get_bool(DB_SQLX_LOGGING_PROPERTY)
            .unwrap_or(false);

        let mut opt = ConnectOptions::new(url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .acquire_timeout(Duration::from_secs(acquire_timeout))
            .sqlx_logging(sqlx_logging);

        tracing::info!(
            max_connections = max_connections,
            min_connections = min_connections,
            connect_timeout = connect_timeout,
            sqlx_logging = sqlx_logging,
            "Database connection pool configured"
        );

        Ok(Database::connect(opt).await?)
    }

    /// Integer setting, or `default` when unset or out of range for `T` (e.g. negative)
    fn int_or<T: TryFrom<i64>>(&self, key: &str, default: T) -> T {
        self.config
            .get_int(key)
            .ok()
            .and_then(|v| T::try_from(v).ok())
            .unwrap_or(default)
    }

    pub fn embedded_data_dir(&self) -> PathBuf {
        self.config
            .get_string(EMBEDDED_DATA_DIR_PROPERTY)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_EMBEDDED_DATA_DIR))
    }

    pub fn seed_enabled(&self) -> bool {
        self.config.get_bool(SEED_ENABLED_PROPERTY).unwrap_or(true)
    }

    // ========================================================================
    // Access Control
    // ========================================================================

    /// Bearer token guarding the reservation listing; `None` leaves it open
    pub fn admin_token(&self) -> Option<String> {
        self.config
            .get_string(ADMIN_TOKEN_PROPERTY)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// Allowed CORS origins; empty means any origin.
    ///
    /// Accepts a YAML list or a comma-separated string (environment).
    pub fn cors_allowed_origins(&self) -> Vec<String> {
        if let Ok(values) = self.config.get_array(CORS_ALLOWED_ORIGINS_PROPERTY) {
            return values
                .into_iter()
                .filter_map(|v| v.into_string().ok())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        self.config
            .get_string(CORS_ALLOWED_ORIGINS_PROPERTY)
            .map(|s| split_list(&s))
            .unwrap_or_default()
    }

    // ========================================================================
    // Logging
    // ========================================================================

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::from_config(
            self.config.get_string(LOGS_PATH_PROPERTY).ok(),
            self.config.get_bool(LOGS_CONSOLE_PROPERTY).unwrap_or(true),
            self.config.get_bool(LOGS_FILE_PROPERTY).unwrap_or(false),
            self.config
                .get_string(LOGS_LEVEL_PROPERTY)
                .unwrap_or("info".to_string()),
        )
    }
}
