//! Service catalogue persistence trait

use async_trait::async_trait;

use bykorp_common::{NewService, RecordId, ServiceInfo};

/// Service catalogue operations
#[async_trait]
pub trait ServicePersistence: Send + Sync {
    /// Find all active services in insertion order
    async fn service_find_active(&self) -> anyhow::Result<Vec<ServiceInfo>>;

    /// Count all services, active or not
    async fn service_count(&self) -> anyhow::Result<u64>;

    /// Create a new service
    async fn service_create(&self, service: &NewService) -> anyhow::Result<RecordId>;
}
