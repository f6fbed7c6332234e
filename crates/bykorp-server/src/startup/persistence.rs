//! Storage backend selection

use std::sync::Arc;

use anyhow::Context;
use bykorp_persistence::{
    EmbeddedPersistService, PersistenceService, SqlPersistService, StorageMode,
    seed_sample_data, sql::ensure_mysql_database,
};
use tracing::info;

use crate::model::Configuration;

/// Open the configured backend, create missing tables and seed sample data.
pub async fn init_persistence(
    configuration: &Configuration,
) -> anyhow::Result<Arc<dyn PersistenceService>> {
    let mode = configuration.persistence_mode()?;

    let persistence: Arc<dyn PersistenceService> = match mode {
        StorageMode::Mysql | StorageMode::Sqlite => {
            let url = configuration
                .db_url(mode)
                .with_context(|| format!("no database URL configured for {}", mode))?;

            if mode == StorageMode::Mysql {
                ensure_mysql_database(&url).await?;
            }

            let connection = configuration
                .database_connection(&url)
                .await
                .with_context(|| format!("failed to connect to {}", mode.display_name()))?;
            let service = SqlPersistService::new(connection)?;
            service.ensure_schema().await?;
            Arc::new(service)
        }
        StorageMode::Embedded => {
            let data_dir = configuration.embedded_data_dir();
            std::fs::create_dir_all(&data_dir).with_context(|| {
                format!("failed to create data directory {}", data_dir.display())
            })?;
            Arc::new(EmbeddedPersistService::open(&data_dir)?)
        }
    };

    info!(storage = %mode, "Connected to {} storage", mode.display_name());

    if configuration.seed_enabled() {
        seed_sample_data(persistence.as_ref()).await?;
    }

    Ok(persistence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Config;

    fn configuration(overrides: &[(&str, String)]) -> Configuration {
        let mut builder = Config::builder();
        for (key, value) in overrides {
            builder = builder.set_override(*key, value.clone()).unwrap();
        }
        Configuration::from_config(builder.build().unwrap())
    }

    #[tokio::test]
    async fn test_init_sqlite_seeds_once() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("agency.db").display());
        let configuration = configuration(&[
            ("persistence.mode", "sqlite".to_string()),
            ("db.url", url),
        ]);

        let persistence = init_persistence(&configuration).await.unwrap();
        assert_eq!(persistence.storage_mode(), StorageMode::Sqlite);
        assert_eq!(persistence.service_count().await.unwrap(), 4);
        persistence.shutdown().await.unwrap();

        let persistence = init_persistence(&configuration).await.unwrap();
        assert_eq!(persistence.service_count().await.unwrap(), 4);
        persistence.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_init_embedded_without_seed() {
        let dir = tempfile::tempdir().unwrap();
        let configuration = configuration(&[
            ("persistence.mode", "embedded".to_string()),
            (
                "embedded.data_dir",
                dir.path().join("store").display().to_string(),
            ),
            ("seed.enabled", "false".to_string()),
        ]);

        let persistence = init_persistence(&configuration).await.unwrap();
        assert_eq!(persistence.storage_mode(), StorageMode::Embedded);
        assert_eq!(persistence.service_count().await.unwrap(), 0);
        persistence.health_check().await.unwrap();
    }

    #[tokio::test]
    async fn test_init_rejects_unknown_mode() {
        let configuration = configuration(&[("persistence.mode", "mongodb".to_string())]);
        assert!(init_persistence(&configuration).await.is_err());
    }
}
