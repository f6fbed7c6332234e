// Embedded persistence backend using RocksDB
// Stores each collection as JSON documents in its own column family, so the
// site runs without any external database server.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, IteratorMode, Options};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::info;

use bykorp_common::{
    NewPortfolioItem, NewReservation, NewReview, NewService, PortfolioItem, RecordId, Reservation,
    Review, ServiceInfo, format_date, format_timestamp, join_list,
};

use crate::model::StorageMode;
use crate::traits::*;

pub const CF_SERVICES: &str = "services";
pub const CF_PORTFOLIO_ITEMS: &str = "portfolio_items";
pub const CF_REVIEWS: &str = "reviews";
pub const CF_RESERVATIONS: &str = "reservations";

const COLUMN_FAMILIES: &[&str] = &[CF_SERVICES, CF_PORTFOLIO_ITEMS, CF_REVIEWS, CF_RESERVATIONS];

/// Separator used when rendering stored lists for the API
const LIST_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ServiceDocument {
    id: String,
    name: String,
    description: String,
    price_starting: Option<String>,
    features: Vec<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ServiceDocument> for ServiceInfo {
    fn from(doc: ServiceDocument) -> Self {
        ServiceInfo {
            id: RecordId::Text(doc.id),
            name: doc.name,
            description: doc.description,
            price_starting: doc.price_starting,
            features: join_list(&doc.features, LIST_SEPARATOR),
            is_active: doc.is_active,
            created_at: format_timestamp(doc.created_at),
            updated_at: format_timestamp(doc.updated_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PortfolioDocument {
    id: String,
    title: String,
    description: Option<String>,
    category: String,
    image_url: Option<String>,
    client_name: Option<String>,
    completion_date: Option<NaiveDate>,
    technologies: Vec<String>,
    is_featured: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PortfolioDocument> for PortfolioItem {
    fn from(doc: PortfolioDocument) -> Self {
        PortfolioItem {
            id: RecordId::Text(doc.id),
            title: doc.title,
            description: doc.description,
            category: doc.category,
            image_url: doc.image_url,
            client_name: doc.client_name,
            completion_date: doc.completion_date.map(format_date),
            technologies: join_list(&doc.technologies, LIST_SEPARATOR),
            is_featured: doc.is_featured,
            created_at: format_timestamp(doc.created_at),
            updated_at: format_timestamp(doc.updated_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReviewDocument {
    id: String,
    name: String,
    company: String,
    role: String,
    review: String,
    rating: i32,
    photo_url: Option<String>,
    is_featured: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ReviewDocument> for Review {
    fn from(doc: ReviewDocument) -> Self {
        Review {
            id: RecordId::Text(doc.id),
            name: doc.name,
            company: doc.company,
            role: doc.role,
            review: doc.review,
            rating: doc.rating,
            photo_url: doc.photo_url,
            is_featured: doc.is_featured,
            created_at: format_timestamp(doc.created_at),
            updated_at: format_timestamp(doc.updated_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReservationDocument {
    id: String,
    name: String,
    email: String,
    phone: Option<String>,
    company: Option<String>,
    service_type: String,
    message: Option<String>,
    preferred_date: Option<NaiveDate>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ReservationDocument> for Reservation {
    fn from(doc: ReservationDocument) -> Self {
        Reservation {
            id: RecordId::Text(doc.id),
            name: doc.name,
            email: doc.email,
            phone: doc.phone,
            company: doc.company,
            service_type: doc.service_type,
            message: doc.message,
            preferred_date: doc.preferred_date.map(format_date),
            status: doc.status,
            created_at: format_timestamp(doc.created_at),
            updated_at: format_timestamp(doc.updated_at),
        }
    }
}

/// Standalone embedded persistence using RocksDB
///
/// Keys are zero-padded sequence numbers shared across all column families,
/// so iterating a column family yields documents in insertion order.
/// Document ids are random UUIDs.
pub struct EmbeddedPersistService {
    db: Arc<DB>,
    next_seq: AtomicU64,
}

impl EmbeddedPersistService {
    /// Open (or create) the store at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let mut db_opts = Options::default();
        db_opts.create_if_missing(true);
        db_opts.create_missing_column_families(true);

        let cfs = COLUMN_FAMILIES
            .iter()
            .map(|name| ColumnFamilyDescriptor::new(*name, Options::default()));
        let db = DB::open_cf_descriptors(&db_opts, path.as_ref(), cfs)
            .map_err(|e| anyhow::anyhow!("RocksDB open error: {}", e))?;

        let last_seq = Self::last_sequence(&db)?;
        info!(
            "Embedded store opened at {} (last sequence {})",
            path.as_ref().display(),
            last_seq
        );

        Ok(Self {
            db: Arc::new(db),
            next_seq: AtomicU64::new(last_seq + 1),
        })
    }

    /// Highest sequence number stored in any column family
    fn last_sequence(db: &DB) -> anyhow::Result<u64> {
        let mut last = 0;
        for name in COLUMN_FAMILIES {
            let cf = db
                .cf_handle(name)
                .ok_or_else(|| anyhow::anyhow!("Column family '{}' not found", name))?;
            if let Some(entry) = db.iterator_cf(cf, IteratorMode::End).next() {
                let (key, _) = entry?;
                let seq = std::str::from_utf8(&key)?.parse::<u64>()?;
                last = last.max(seq);
            }
        }
        Ok(last)
    }

    /// Get a column family handle
    fn cf(&self, name: &str) -> anyhow::Result<&ColumnFamily> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| anyhow::anyhow!("Column family '{}' not found", name))
    }

    fn next_key(&self) -> String {
        format!("{:020}", self.next_seq.fetch_add(1, Ordering::SeqCst))
    }

    fn new_id() -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    /// Append a document to a column family
    fn put_document<T: Serialize>(&self, cf_name: &str, doc: &T) -> anyhow::Result<()> {
        let cf = self.cf(cf_name)?;
        let value = serde_json::to_vec(doc)?;
        self.db
            .put_cf(cf, self.next_key().as_bytes(), value)
            .map_err(|e| anyhow::anyhow!("RocksDB put error: {}", e))
    }

    /// Read every document of a column family in insertion order
    fn scan<T: DeserializeOwned>(&self, cf_name: &str) -> anyhow::Result<Vec<T>> {
        let cf = self.cf(cf_name)?;
        let mut docs = Vec::new();
        for entry in self.db.iterator_cf(cf, IteratorMode::Start) {
            let (_, value) = entry?;
            docs.push(serde_json::from_slice(&value)?);
        }
        Ok(docs)
    }

    /// Read every document newest first
    fn scan_newest_first<T: DeserializeOwned>(&self, cf_name: &str) -> anyhow::Result<Vec<T>> {
        let mut docs = self.scan(cf_name)?;
        docs.reverse();
        Ok(docs)
    }
}

#[async_trait]
impl PersistenceService for EmbeddedPersistService {
    fn storage_mode(&self) -> StorageMode {
        StorageMode::Embedded
    }

    async fn health_check(&self) -> anyhow::Result<()> {
        for name in COLUMN_FAMILIES {
            let cf = self.cf(name)?;
            self.db.get_cf(cf, b"health")?;
        }
        Ok(())
    }

    async fn shutdown(&self) -> anyhow::Result<()> {
        for name in COLUMN_FAMILIES {
            let cf = self.cf(name)?;
            self.db.flush_cf(cf)?;
        }
        Ok(())
    }
}

#[async_trait]
impl ServicePersistence for EmbeddedPersistService {
    async fn service_find_active(&self) -> anyhow::Result<Vec<ServiceInfo>> {
        let docs: Vec<ServiceDocument> = self.scan(CF_SERVICES)?;
        Ok(docs
            .into_iter()
            .filter(|d| d.is_active)
            .map(ServiceInfo::from)
            .collect())
    }

    async fn service_count(&self) -> anyhow::Result<u64> {
        let cf = self.cf(CF_SERVICES)?;
        let mut count = 0;
        for entry in self.db.iterator_cf(cf, IteratorMode::Start) {
            entry?;
            count += 1;
        }
        Ok(count)
    }

    async fn service_create(&self, service: &NewService) -> anyhow::Result<RecordId> {
        let now = Utc::now();
        let doc = ServiceDocument {
            id: Self::new_id(),
            name: service.name.clone(),
            description: service.description.clone(),
            price_starting: service.price_starting.clone(),
            features: service.features.clone(),
            is_active: service.is_active,
            created_at: now,
            updated_at: now,
        };
        self.put_document(CF_SERVICES, &doc)?;
        Ok(RecordId::Text(doc.id))
    }
}

#[async_trait]
impl PortfolioPersistence for EmbeddedPersistService {
    async fn portfolio_find_all(&self) -> anyhow::Result<Vec<PortfolioItem>> {
        let mut docs: Vec<PortfolioDocument> = self.scan(CF_PORTFOLIO_ITEMS)?;
        docs.sort_by(|a, b| {
            b.is_featured
                .cmp(&a.is_featured)
                .then_with(|| b.completion_date.cmp(&a.completion_date))
        });
        Ok(docs.into_iter().map(PortfolioItem::from).collect())
    }

    async fn portfolio_find_featured(&self) -> anyhow::Result<Vec<PortfolioItem>> {
        let mut docs: Vec<PortfolioDocument> = self
            .scan::<PortfolioDocument>(CF_PORTFOLIO_ITEMS)?
            .into_iter()
            .filter(|d| d.is_featured)
            .collect();
        docs.sort_by(|a, b| b.completion_date.cmp(&a.completion_date));
        Ok(docs.into_iter().map(PortfolioItem::from).collect())
    }

    async fn portfolio_create(&self, item: &NewPortfolioItem) -> anyhow::Result<RecordId> {
        let now = Utc::now();
        let doc = PortfolioDocument {
            id: Self::new_id(),
            title: item.title.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            image_url: item.image_url.clone(),
            client_name: item.client_name.clone(),
            completion_date: item.completion_date,
            technologies: item.technologies.clone(),
            is_featured: item.is_featured,
            created_at: now,
            updated_at: now,
        };
        self.put_document(CF_PORTFOLIO_ITEMS, &doc)?;
        Ok(RecordId::Text(doc.id))
    }
}

#[async_trait]
impl ReviewPersistence for EmbeddedPersistService {
    async fn review_find_all(&self) -> anyhow::Result<Vec<Review>> {
        let mut docs: Vec<ReviewDocument> = self.scan_newest_first(CF_REVIEWS)?;
        docs.sort_by(|a, b| {
            b.is_featured
                .cmp(&a.is_featured)
                .then_with(|| b.created_at.cmp(&a.created_at))
        });
        Ok(docs.into_iter().map(Review::from).collect())
    }

    async fn review_find_featured(&self) -> anyhow::Result<Vec<Review>> {
        let mut docs: Vec<ReviewDocument> = self
            .scan_newest_first::<ReviewDocument>(CF_REVIEWS)?
            .into_iter()
            .filter(|d| d.is_featured)
            .collect();
        docs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(docs.into_iter().map(Review::from).collect())
    }

    async fn review_create(&self, review: &NewReview) -> anyhow::Result<RecordId> {
        let now = Utc::now();
        let doc = ReviewDocument {
            id: Self::new_id(),
            name: review.name.clone(),
            company: review.company.clone(),
            role: review.role.clone(),
            review: review.review.clone(),
            rating: review.rating,
            photo_url: review.photo_url.clone(),
            is_featured: review.is_featured,
            created_at: now,
            updated_at: now,
        };
        self.put_document(CF_REVIEWS, &doc)?;
        Ok(RecordId::Text(doc.id))
    }
}

#[async_trait]
impl ReservationPersistence for EmbeddedPersistService {
    async fn reservation_create(&self, reservation: &NewReservation) -> anyhow::Result<RecordId> {
        let now = Utc::now();
        let doc = ReservationDocument {
            id: Self::new_id(),
            name: reservation.name.clone(),
            email: reservation.email.clone(),
            phone: reservation.phone.clone(),
            company: reservation.company.clone(),
            service_type: reservation.service_type.clone(),
            message: reservation.message.clone(),
            preferred_date: reservation.preferred_date,
            status: bykorp_common::RESERVATION_STATUS_PENDING.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.put_document(CF_RESERVATIONS, &doc)?;
        Ok(RecordId::Text(doc.id))
    }

    async fn reservation_find_all(&self) -> anyhow::Result<Vec<Reservation>> {
        let mut docs: Vec<ReservationDocument> = self.scan_newest_first(CF_RESERVATIONS)?;
        docs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(docs.into_iter().map(Reservation::from).collect())
    }
}
