//! Domain model types for the persistence abstraction layer

use serde::{Deserialize, Serialize};

/// Storage backend selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageMode {
    /// MySQL via SeaORM
    Mysql,
    /// SQLite file via SeaORM
    Sqlite,
    /// Embedded RocksDB document store (no external database)
    Embedded,
}

impl StorageMode {
    /// Connection URL used when none is configured
    pub fn default_url(&self) -> Option<&'static str> {
        match self {
            StorageMode::Mysql => Some("mysql://root:@localhost:3306/bykorp_agency"),
            StorageMode::Sqlite => Some("sqlite://bykorp_agency.db?mode=rwc"),
            StorageMode::Embedded => None,
        }
    }

    /// Human-readable backend name used in health messages
    pub fn display_name(&self) -> &'static str {
        match self {
            StorageMode::Mysql => "MySQL",
            StorageMode::Sqlite => "SQLite",
            StorageMode::Embedded => "embedded RocksDB",
        }
    }
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageMode::Mysql => write!(f, "mysql"),
            StorageMode::Sqlite => write!(f, "sqlite"),
            StorageMode::Embedded => write!(f, "embedded"),
        }
    }
}

impl std::str::FromStr for StorageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(StorageMode::Mysql),
            "sqlite" => Ok(StorageMode::Sqlite),
            "embedded" => Ok(StorageMode::Embedded),
            _ => Err(format!("Invalid storage mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_mode_display() {
        assert_eq!(StorageMode::Mysql.to_string(), "mysql");
        assert_eq!(StorageMode::Sqlite.to_string(), "sqlite");
        assert_eq!(StorageMode::Embedded.to_string(), "embedded");
    }

    #[test]
    fn test_storage_mode_from_str() {
        assert_eq!("mysql".parse::<StorageMode>().unwrap(), StorageMode::Mysql);
        assert_eq!("SQLite".parse::<StorageMode>().unwrap(), StorageMode::Sqlite);
        assert_eq!(
            "embedded".parse::<StorageMode>().unwrap(),
            StorageMode::Embedded
        );
        assert!("mongodb".parse::<StorageMode>().is_err());
    }

    #[test]
    fn test_storage_mode_default_url() {
        assert!(StorageMode::Mysql.default_url().unwrap().starts_with("mysql://"));
        assert!(StorageMode::Sqlite.default_url().unwrap().starts_with("sqlite://"));
        assert_eq!(StorageMode::Embedded.default_url(), None);
    }
}
