//! Portfolio persistence trait

use async_trait::async_trait;

use bykorp_common::{NewPortfolioItem, PortfolioItem, RecordId};

/// Portfolio operations
#[async_trait]
pub trait PortfolioPersistence: Send + Sync {
    /// Find all items, featured first, then by completion date descending
    async fn portfolio_find_all(&self) -> anyhow::Result<Vec<PortfolioItem>>;

    /// Find featured items by completion date descending
    async fn portfolio_find_featured(&self) -> anyhow::Result<Vec<PortfolioItem>>;

    /// Create a new portfolio item
    async fn portfolio_create(&self, item: &NewPortfolioItem) -> anyhow::Result<RecordId>;
}
