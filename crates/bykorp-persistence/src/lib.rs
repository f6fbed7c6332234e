//! Bykorp Persistence - Database entities and persistence layer
//!
//! This crate provides:
//! - SeaORM entity definitions for the agency tables
//! - Persistence trait abstractions for unified storage
//! - A SQL backend (MySQL or SQLite via SeaORM)
//! - An embedded document backend (RocksDB)
//! - Sample-data seeding shared by every backend

pub mod embedded;
pub mod entity;
pub mod model;
pub mod seed;
pub mod sql;
pub mod traits;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export persistence traits
pub use traits::{
    PersistenceService, PortfolioPersistence, ReservationPersistence, ReviewPersistence,
    ServicePersistence,
};

// Re-export SQL backend
pub use sql::SqlPersistService;

// Re-export embedded backend
pub use embedded::EmbeddedPersistService;

// Re-export model types
pub use model::StorageMode;

pub use seed::seed_sample_data;
