//! Bykorp Common - Shared types, errors, and utilities
//!
//! This crate provides the foundational types used across all Bykorp components:
//! - API model types shared by the server, the persistence layer, and the client
//! - The domain error enum
//! - Reservation validation
//! - List and timestamp helpers

pub mod error;
pub mod model;
pub mod utils;

// Re-exports for convenience
pub use error::BykorpError;
pub use model::{
    CreateReservation, NewPortfolioItem, NewReservation, NewReview, NewService, PortfolioItem,
    RecordId, Reservation, ReservationCreated, Review, ServiceInfo,
};
pub use utils::{format_date, format_timestamp, join_list, split_list};

/// Status assigned to every reservation on creation
pub const RESERVATION_STATUS_PENDING: &str = "pending";

/// Message returned after a reservation is stored
pub const RESERVATION_CREATED_MESSAGE: &str = "Reservation created successfully";

/// Pseudo-category that matches every portfolio item
pub const CATEGORY_ALL: &str = "All";
