//! SQL-based persistence backend (MySQL/SQLite via SeaORM)
//!
//! One implementation serves both databases. The backend is detected from the
//! connection, tables are created from the entity definitions, and list fields
//! are stored comma-joined.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use tracing::info;
use url::Url;

use bykorp_common::{
    NewPortfolioItem, NewReservation, NewReview, NewService, PortfolioItem, RecordId, Reservation,
    Review, ServiceInfo, format_date, format_timestamp, join_list,
};

use crate::entity::{portfolio_item, reservation, review, service};
use crate::model::StorageMode;
use crate::traits::*;

/// Separator used when storing list fields in a text column
const LIST_SEPARATOR: &str = ",";

/// SQL database persistence service
///
/// Wraps a SeaORM `DatabaseConnection` and implements all persistence traits
/// with direct entity queries.
pub struct SqlPersistService {
    db: DatabaseConnection,
    mode: StorageMode,
}

impl SqlPersistService {
    /// Create a new SqlPersistService with the given database connection
    pub fn new(db: DatabaseConnection) -> anyhow::Result<Self> {
        let mode = match db.get_database_backend() {
            DbBackend::MySql => StorageMode::Mysql,
            DbBackend::Sqlite => StorageMode::Sqlite,
            other => anyhow::bail!("Unsupported database backend: {:?}", other),
        };
        Ok(Self { db, mode })
    }

    /// Get a reference to the underlying database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Create any missing tables from the entity definitions
    pub async fn ensure_schema(&self) -> anyhow::Result<()> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);
        let mut statements = vec![
            schema.create_table_from_entity(service::Entity),
            schema.create_table_from_entity(portfolio_item::Entity),
            schema.create_table_from_entity(review::Entity),
            schema.create_table_from_entity(reservation::Entity),
        ];

        for statement in statements.iter_mut() {
            statement.if_not_exists();
            self.db.execute(backend.build(&*statement)).await?;
        }

        info!("Database tables ready ({})", self.mode);
        Ok(())
    }
}

/// Create the MySQL database named in `url` if it does not exist yet.
///
/// Connects to the server without selecting a database, so the credentials in
/// `url` need `CREATE` privilege.
pub async fn ensure_mysql_database(url: &str) -> anyhow::Result<()> {
    let mut server_url = Url::parse(url)?;
    let database = server_url.path().trim_start_matches('/').to_string();
    if database.is_empty() {
        return Ok(());
    }
    if !database
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
    {
        anyhow::bail!("Invalid MySQL database name: {}", database);
    }

    server_url.set_path("");
    let server = Database::connect(server_url.as_str()).await?;
    server
        .execute_unprepared(&format!("CREATE DATABASE IF NOT EXISTS `{}`", database))
        .await?;
    server.close().await?;

    info!("MySQL database '{}' is available", database);
    Ok(())
}

fn service_model_to_info(model: service::Model) -> ServiceInfo {
    ServiceInfo {
        id: model.id.into(),
        name: model.name,
        description: model.description,
        price_starting: model.price_starting,
        features: model.features,
        is_active: model.is_active,
        created_at: format_timestamp(model.created_at),
        updated_at: format_timestamp(model.updated_at),
    }
}

fn portfolio_model_to_item(model: portfolio_item::Model) -> PortfolioItem {
    PortfolioItem {
        id: model.id.into(),
        title: model.title,
        description: model.description,
        category: model.category,
        image_url: model.image_url,
        client_name: model.client_name,
        completion_date: model.completion_date.map(format_date),
        technologies: model.technologies,
        is_featured: model.is_featured,
        created_at: format_timestamp(model.created_at),
        updated_at: format_timestamp(model.updated_at),
    }
}

fn review_model_to_review(model: review::Model) -> Review {
    Review {
        id: model.id.into(),
        name: model.name,
        company: model.company,
        role: model.role,
        review: model.review,
        rating: model.rating,
        photo_url: model.photo_url,
        is_featured: model.is_featured,
        created_at: format_timestamp(model.created_at),
        updated_at: format_timestamp(model.updated_at),
    }
}

fn reservation_model_to_reservation(model: reservation::Model) -> Reservation {
    Reservation {
        id: model.id.into(),
        name: model.name,
        email: model.email,
        phone: model.phone,
        company: model.company,
        service_type: model.service_type,
        message: model.message,
        preferred_date: model.preferred_date.map(format_date),
        status: model.status,
        created_at: format_timestamp(model.created_at),
        updated_at: format_timestamp(model.updated_at),
    }
}

// ============================================================================
// PersistenceService implementation
// ============================================================================

#[async_trait]
impl PersistenceService for SqlPersistService {
    fn storage_mode(&self) -> StorageMode {
        self.mode
    }

    async fn health_check(&self) -> anyhow::Result<()> {
        self.db.ping().await?;
        Ok(())
    }

    async fn shutdown(&self) -> anyhow::Result<()> {
        // Clones share the pool, so closing one closes it for all holders.
        self.db.clone().close().await?;
        Ok(())
    }
}

// ============================================================================
// ServicePersistence implementation
// ============================================================================

#[async_trait]
impl ServicePersistence for SqlPersistService {
    async fn service_find_active(&self) -> anyhow::Result<Vec<ServiceInfo>> {
        let models = service::Entity::find()
            .filter(service::Column::IsActive.eq(true))
            .order_by_asc(service::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(service_model_to_info).collect())
    }

    async fn service_count(&self) -> anyhow::Result<u64> {
        Ok(service::Entity::find().count(&self.db).await?)
    }

    async fn service_create(&self, service: &NewService) -> anyhow::Result<RecordId> {
        let now = Utc::now();
        let model = service::ActiveModel {
            name: Set(service.name.clone()),
            description: Set(service.description.clone()),
            price_starting: Set(service.price_starting.clone()),
            features: Set(join_list(&service.features, LIST_SEPARATOR)),
            is_active: Set(service.is_active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let result = service::Entity::insert(model).exec(&self.db).await?;
        Ok(result.last_insert_id.into())
    }
}

// ============================================================================
// PortfolioPersistence implementation
// ============================================================================

#[async_trait]
impl PortfolioPersistence for SqlPersistService {
    async fn portfolio_find_all(&self) -> anyhow::Result<Vec<PortfolioItem>> {
        let models = portfolio_item::Entity::find()
            .order_by_desc(portfolio_item::Column::IsFeatured)
            .order_by_desc(portfolio_item::Column::CompletionDate)
            .order_by_asc(portfolio_item::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(portfolio_model_to_item).collect())
    }

    async fn portfolio_find_featured(&self) -> anyhow::Result<Vec<PortfolioItem>> {
        let models = portfolio_item::Entity::find()
            .filter(portfolio_item::Column::IsFeatured.eq(true))
            .order_by_desc(portfolio_item::Column::CompletionDate)
            .order_by_asc(portfolio_item::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(portfolio_model_to_item).collect())
    }

    async fn portfolio_create(&self, item: &NewPortfolioItem) -> anyhow::Result<RecordId> {
        let now = Utc::now();
        let model = portfolio_item::ActiveModel {
            title: Set(item.title.clone()),
            description: Set(item.description.clone()),
            category: Set(item.category.clone()),
            image_url: Set(item.image_url.clone()),
            client_name: Set(item.client_name.clone()),
            completion_date: Set(item.completion_date),
            technologies: Set(join_list(&item.technologies, LIST_SEPARATOR)),
            is_featured: Set(item.is_featured),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let result = portfolio_item::Entity::insert(model)
            .exec(&self.db)
            .await?;
        Ok(result.last_insert_id.into())
    }
}

// ============================================================================
// ReviewPersistence implementation
// ============================================================================

#[async_trait]
impl ReviewPersistence for SqlPersistService {
    async fn review_find_all(&self) -> anyhow::Result<Vec<Review>> {
        let models = review::Entity::find()
            .order_by_desc(review::Column::IsFeatured)
            .order_by_desc(review::Column::CreatedAt)
            .order_by_desc(review::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(review_model_to_review).collect())
    }

    async fn review_find_featured(&self) -> anyhow::Result<Vec<Review>> {
        let models = review::Entity::find()
            .filter(review::Column::IsFeatured.eq(true))
            .order_by_desc(review::Column::CreatedAt)
            .order_by_desc(review::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(review_model_to_review).collect())
    }

    async fn review_create(&self, review: &NewReview) -> anyhow::Result<RecordId> {
        let now = Utc::now();
        let model = review::ActiveModel {
            name: Set(review.name.clone()),
            company: Set(review.company.clone()),
            role: Set(review.role.clone()),
            review: Set(review.review.clone()),
            rating: Set(review.rating),
            photo_url: Set(review.photo_url.clone()),
            is_featured: Set(review.is_featured),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let result = review::Entity::insert(model).exec(&self.db).await?;
        Ok(result.last_insert_id.into())
    }
}

// ============================================================================
// ReservationPersistence implementation
// ============================================================================

#[async_trait]
impl ReservationPersistence for SqlPersistService {
    async fn reservation_create(&self, reservation: &NewReservation) -> anyhow::Result<RecordId> {
        let now = Utc::now();
        let model = reservation::ActiveModel {
            name: Set(reservation.name.clone()),
            email: Set(reservation.email.clone()),
            phone: Set(reservation.phone.clone()),
            company: Set(reservation.company.clone()),
            service_type: Set(reservation.service_type.clone()),
            message: Set(reservation.message.clone()),
            preferred_date: Set(reservation.preferred_date),
            status: Set(bykorp_common::RESERVATION_STATUS_PENDING.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        let result = reservation::Entity::insert(model).exec(&self.db).await?;
        Ok(result.last_insert_id.into())
    }

    async fn reservation_find_all(&self) -> anyhow::Result<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .order_by_desc(reservation::Column::CreatedAt)
            .order_by_desc(reservation::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models
            .into_iter()
            .map(reservation_model_to_reservation)
            .collect())
    }
}
