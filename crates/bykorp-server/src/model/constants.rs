//! Configuration keys and defaults for the Bykorp server

pub const DEFAULT_CONFIG_FILE: &str = "conf/application.yml";
pub const ENV_PREFIX: &str = "BYKORP";

// Server
pub const SERVER_ADDRESS_PROPERTY: &str = "server.address";
pub const SERVER_PORT_PROPERTY: &str = "server.port";
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3001;

// Storage
pub const PERSISTENCE_MODE_PROPERTY: &str = "persistence.mode";
pub const DEFAULT_PERSISTENCE_MODE: &str = "sqlite";
pub const DB_URL_PROPERTY: &str = "db.url";
pub const DB_MAX_CONNECTIONS_PROPERTY: &str = "db.pool.max_connections";
pub const DB_MIN_CONNECTIONS_PROPERTY: &str = "db.pool.min_connections";
pub const DB_CONNECT_TIMEOUT_PROPERTY: &str = "db.pool.connect_timeout";
pub const DB_ACQUIRE_TIMEOUT_PROPERTY: &str = "db.pool.acquire_timeout";
pub const DB_SQLX_LOGGING_PROPERTY: &str = "db.pool.sqlx_logging";
pub const EMBEDDED_DATA_DIR_PROPERTY: &str = "embedded.data_dir";
pub const DEFAULT_EMBEDDED_DATA_DIR: &str = "data/bykorp";
pub const SEED_ENABLED_PROPERTY: &str = "seed.enabled";

// Access control
pub const ADMIN_TOKEN_PROPERTY: &str = "admin.token";
pub const CORS_ALLOWED_ORIGINS_PROPERTY: &str = "cors.allowed_origins";

// Logging
pub const LOGS_PATH_PROPERTY: &str = "logs.path";
pub const LOGS_LEVEL_PROPERTY: &str = "logs.level";
pub const LOGS_CONSOLE_PROPERTY: &str = "logs.console";
pub const LOGS_FILE_PROPERTY: &str = "logs.file";

// Health
pub const HEALTH_STATUS_UP: &str = "OK";
pub const HEALTH_STATUS_DOWN: &str = "DOWN";
