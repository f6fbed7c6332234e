//! Bykorp Client - Rust client for the Bykorp agency API
//!
//! This crate provides:
//! - `AgencyClient`, a typed client for the `/api` endpoints
//! - Built-in sample content served when the API cannot be reached
//! - The page-level helpers the site uses (category filter, list splitting,
//!   contact-form service options)
//!
//! # Example
//!
//! ```no_run
//! use bykorp_client::{AgencyClient, HttpClientConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = AgencyClient::new(HttpClientConfig::default())?;
//! let home = client.home_content().await;
//! println!("{} services", home.services.len());
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod error;
pub mod fallback;
pub mod http;

pub use content::{
    HomeContent, SERVICE_TYPES, filter_by_category, portfolio_categories, service_features,
    technologies,
};
pub use error::{ClientError, Result};
pub use http::{AgencyClient, DEFAULT_BASE_URL, HttpClientConfig};

pub use bykorp_common::{
    CreateReservation, PortfolioItem, RecordId, Reservation, ReservationCreated, Review,
    ServiceInfo, split_list,
};
