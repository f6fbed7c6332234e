//! Persistence traits for the unified storage abstraction layer
//!
//! This module defines the core persistence traits that abstract over the
//! storage backends: SQL (MySQL/SQLite via SeaORM) and embedded (RocksDB).

pub mod portfolio;
pub mod reservation;
pub mod review;
pub mod service;

pub use portfolio::PortfolioPersistence;
pub use reservation::ReservationPersistence;
pub use review::ReviewPersistence;
pub use service::ServicePersistence;

use async_trait::async_trait;

use crate::model::StorageMode;

/// Unified persistence service trait
///
/// This is the main interface for all storage operations. The server holds it
/// as `Arc<dyn PersistenceService>` and never knows which backend is behind it.
#[async_trait]
pub trait PersistenceService:
    ServicePersistence
    + PortfolioPersistence
    + ReviewPersistence
    + ReservationPersistence
    + Send
    + Sync
{
    /// Get the current storage mode
    fn storage_mode(&self) -> StorageMode;

    /// Health check for the storage backend
    async fn health_check(&self) -> anyhow::Result<()>;

    /// Release connections and flush pending writes
    async fn shutdown(&self) -> anyhow::Result<()>;
}
