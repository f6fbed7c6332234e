//! HTTP client for the Bykorp agency API
//!
//! Every endpoint has a strict variant returning [`Result`] and, for the
//! public catalogue, an `*_or_fallback` variant that never fails and serves
//! the built-in sample content instead. The site uses the latter so that pages
//! still render while the API is down.

use std::time::Duration;

use reqwest::{Client, Response, header};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use bykorp_common::{
    CreateReservation, PortfolioItem, Reservation, ReservationCreated, Review, ServiceInfo,
};

use crate::content::HomeContent;
use crate::error::{ClientError, Result};
use crate::fallback;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

const API_UNAVAILABLE_MESSAGE: &str = "API not available";
const RESERVATION_FAILED_MESSAGE: &str = "Failed to create reservation";

/// Configuration for the HTTP client
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    /// API root including the `/api` prefix
    pub base_url: String,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Read timeout in milliseconds
    pub read_timeout_ms: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
        }
    }
}

impl HttpClientConfig {
    /// Create a config for an API root such as `https://bykorp.com/api`
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    /// Set timeouts
    pub fn with_timeouts(mut self, connect_ms: u64, read_ms: u64) -> Self {
        self.connect_timeout_ms = connect_ms;
        self.read_timeout_ms = read_ms;
        self
    }
}

/// Typed client for the agency API
#[derive(Clone, Debug)]
pub struct AgencyClient {
    client: Client,
    config: HttpClientConfig,
}

impl AgencyClient {
    pub fn new(config: HttpClientConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Turn a non-2xx response into [`ClientError::Api`].
    ///
    /// The server's `{"error": ...}` message is used when present.
    async fn check(response: Response, fallback_message: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body.get("error")?.as_str().map(str::to_string))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback_message.to_string());

        debug!(status = status.as_u16(), message = %message, "API request failed");

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.client.get(self.build_url(path)).send().await?;
        let response = Self::check(response, API_UNAVAILABLE_MESSAGE).await?;
        Ok(response.json().await?)
    }

    // ========================================================================
    // Catalogue
    // ========================================================================

    /// GET /services
    pub async fn services(&self) -> Result<Vec<ServiceInfo>> {
        self.get_json("/services").await
    }

    /// GET /portfolio
    pub async fn portfolio(&self) -> Result<Vec<PortfolioItem>> {
        self.get_json("/portfolio").await
    }

    /// GET /portfolio/featured
    pub async fn featured_portfolio(&self) -> Result<Vec<PortfolioItem>> {
        self.get_json("/portfolio/featured").await
    }

    /// GET /reviews
    pub async fn reviews(&self) -> Result<Vec<Review>> {
        self.get_json("/reviews").await
    }

    /// GET /reviews/featured
    pub async fn featured_reviews(&self) -> Result<Vec<Review>> {
        self.get_json("/reviews/featured").await
    }

    // ========================================================================
    // Reservations
    // ========================================================================

    /// POST /reservations
    pub async fn create_reservation(
        &self,
        reservation: &CreateReservation,
    ) -> Result<ReservationCreated> {
        let response = self
            .client
            .post(self.build_url("/reservations"))
            .json(reservation)
            .send()
            .await?;
        let response = Self::check(response, RESERVATION_FAILED_MESSAGE).await?;
        Ok(response.json().await?)
    }

    /// GET /reservations, sending `token` as a bearer token when given
    pub async fn reservations(&self, token: Option<&str>) -> Result<Vec<Reservation>> {
        let mut request = self.client.get(self.build_url("/reservations"));
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let response = Self::check(request.send().await?, API_UNAVAILABLE_MESSAGE).await?;
        Ok(response.json().await?)
    }

    // ========================================================================
    // Fallback variants
    // ========================================================================

    pub async fn services_or_fallback(&self) -> Vec<ServiceInfo> {
        or_fallback("services", self.services().await, fallback::services)
    }

    pub async fn portfolio_or_fallback(&self) -> Vec<PortfolioItem> {
        or_fallback("portfolio", self.portfolio().await, fallback::portfolio)
    }

    pub async fn featured_portfolio_or_fallback(&self) -> Vec<PortfolioItem> {
        or_fallback(
            "featured portfolio",
            self.featured_portfolio().await,
            fallback::featured_portfolio,
        )
    }

    pub async fn reviews_or_fallback(&self) -> Vec<Review> {
        or_fallback("reviews", self.reviews().await, fallback::reviews)
    }

    pub async fn featured_reviews_or_fallback(&self) -> Vec<Review> {
        or_fallback(
            "featured reviews",
            self.featured_reviews().await,
            fallback::featured_reviews,
        )
    }

    /// Content of the home page, fetched concurrently
    pub async fn home_content(&self) -> HomeContent {
        let (services, featured_portfolio, featured_reviews) = futures::join!(
            self.services_or_fallback(),
            self.featured_portfolio_or_fallback(),
            self.featured_reviews_or_fallback(),
        );

        HomeContent::new(services, featured_portfolio, featured_reviews)
    }
}

fn or_fallback<T>(what: &str, result: Result<Vec<T>>, fallback: fn() -> Vec<T>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            warn!("Failed to fetch {}, using sample content: {}", what, e);
            fallback()
        }
    }
}
