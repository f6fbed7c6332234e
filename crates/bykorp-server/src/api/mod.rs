//! HTTP API handlers
//!
//! - `service` - GET /api/services
//! - `portfolio` - GET /api/portfolio, GET /api/portfolio/featured
//! - `review` - GET /api/reviews, GET /api/reviews/featured
//! - `reservation` - POST /api/reservations, GET /api/reservations
//! - `health` - GET /health
//! - `route` - Route table wiring the handlers together

pub mod health;
pub mod portfolio;
pub mod reservation;
pub mod review;
pub mod route;
pub mod service;

use bykorp_common::BykorpError;

/// Log a storage failure and replace it with the fixed client-facing message.
///
/// Driver errors never reach the response body.
pub(crate) fn storage_failure(message: &'static str) -> impl FnOnce(anyhow::Error) -> BykorpError {
    move |e| {
        tracing::error!(error = %format!("{:#}", e), "{}", message);
        BykorpError::database(message)
    }
}
