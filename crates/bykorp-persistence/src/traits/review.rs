//! Review persistence trait

use async_trait::async_trait;

use bykorp_common::{NewReview, RecordId, Review};

/// Review operations
#[async_trait]
pub trait ReviewPersistence: Send + Sync {
    /// Find all reviews, featured first, then newest first
    async fn review_find_all(&self) -> anyhow::Result<Vec<Review>>;

    /// Find featured reviews, newest first
    async fn review_find_featured(&self) -> anyhow::Result<Vec<Review>>;

    /// Create a new review
    async fn review_create(&self, review: &NewReview) -> anyhow::Result<RecordId>;
}
