//! Common test utilities for integration testing
//!
//! - TestContext: application state over a temporary storage backend
//! - FailingPersistence: a backend whose every call fails
//! - init_app!: build the actix test service for a state

use std::sync::Arc;

use async_trait::async_trait;
use bykorp_common::{
    NewPortfolioItem, NewReservation, NewReview, NewService, PortfolioItem, RecordId,
    Reservation, Review, ServiceInfo,
};
use bykorp_persistence::{
    PersistenceService, PortfolioPersistence, ReservationPersistence, ReviewPersistence,
    ServicePersistence, StorageMode,
};
use bykorp_server::{
    model::{AppState, Configuration},
    startup,
};
use config::Config;
use tempfile::TempDir;

pub const ADMIN_TOKEN: &str = "test-admin-token";

/// Build an initialised actix test service for an [`AppState`].
///
/// The app is wrapped in the same CORS policy as the server.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(bykorp_server::startup::cors(&[]))
                .app_data(actix_web::web::Data::new($state))
                .configure(bykorp_server::api::route::configure),
        )
        .await
    };
}

/// Application state over a temporary backend; the directory lives as long as the context.
pub struct TestContext {
    pub state: AppState,
    _dir: TempDir,
}

impl TestContext {
    pub async fn new(mode: StorageMode, overrides: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut builder = Config::builder()
            .set_override("persistence.mode", mode.to_string())
            .unwrap();

        builder = match mode {
            StorageMode::Embedded => builder
                .set_override(
                    "embedded.data_dir",
                    dir.path().join("store").display().to_string(),
                )
                .unwrap(),
            _ => builder
                .set_override(
                    "db.url",
                    format!("sqlite://{}?mode=rwc", dir.path().join("agency.db").display()),
                )
                .unwrap(),
        };
        for (key, value) in overrides {
            builder = builder.set_override(*key, *value).unwrap();
        }

        let configuration = Configuration::from_config(builder.build().unwrap());
        let persistence = startup::init_persistence(&configuration).await.unwrap();

        TestContext {
            state: AppState::new(configuration, persistence),
            _dir: dir,
        }
    }

    /// Seeded SQLite store
    pub async fn sqlite() -> Self {
        Self::new(StorageMode::Sqlite, &[]).await
    }

    /// Seeded embedded store
    pub async fn embedded() -> Self {
        Self::new(StorageMode::Embedded, &[]).await
    }

    /// Seeded SQLite store whose reservation listing requires [`ADMIN_TOKEN`]
    pub async fn sqlite_with_admin_token() -> Self {
        Self::new(StorageMode::Sqlite, &[("admin.token", ADMIN_TOKEN)]).await
    }
}

/// State whose storage rejects every call
pub fn failing_state() -> AppState {
    AppState::new(Configuration::default(), Arc::new(FailingPersistence))
}

pub struct FailingPersistence;

fn unavailable<T>() -> anyhow::Result<T> {
    Err(anyhow::anyhow!("connection refused (os error 111)"))
}

#[async_trait]
impl ServicePersistence for FailingPersistence {
    async fn service_find_active(&self) -> anyhow::Result<Vec<ServiceInfo>> {
        unavailable()
    }
    async fn service_count(&self) -> anyhow::Result<u64> {
        unavailable()
    }
    async fn service_create(&self, _service: &NewService) -> anyhow::Result<RecordId> {
        unavailable()
    }
}

#[async_trait]
impl PortfolioPersistence for FailingPersistence {
    async fn portfolio_find_all(&self) -> anyhow::Result<Vec<PortfolioItem>> {
        unavailable()
    }
    async fn portfolio_find_featured(&self) -> anyhow::Result<Vec<PortfolioItem>> {
        unavailable()
    }
    async fn portfolio_create(&self, _item: &NewPortfolioItem) -> anyhow::Result<RecordId> {
        unavailable()
    }
}

#[async_trait]
impl ReviewPersistence for FailingPersistence {
    async fn review_find_all(&self) -> anyhow::Result<Vec<Review>> {
        unavailable()
    }
    async fn review_find_featured(&self) -> anyhow::Result<Vec<Review>> {
        unavailable()
    }
    async fn review_create(&self, _review: &NewReview) -> anyhow::Result<RecordId> {
        unavailable()
    }
}

#[async_trait]
impl ReservationPersistence for FailingPersistence {
    async fn reservation_create(&self, _reservation: &NewReservation) -> anyhow::Result<RecordId> {
        unavailable()
    }
    async fn reservation_find_all(&self) -> anyhow::Result<Vec<Reservation>> {
        unavailable()
    }
}

#[async_trait]
impl PersistenceService for FailingPersistence {
    fn storage_mode(&self) -> StorageMode {
        StorageMode::Mysql
    }
    async fn health_check(&self) -> anyhow::Result<()> {
        unavailable()
    }
    async fn shutdown(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
