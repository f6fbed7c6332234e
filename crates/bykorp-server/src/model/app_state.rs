//! State shared across request handlers

use std::sync::Arc;

use bykorp_persistence::PersistenceService;

use super::config::Configuration;

/// Application state handed to every handler through `web::Data`
#[derive(Clone)]
pub struct AppState {
    pub configuration: Configuration,
    pub persistence: Arc<dyn PersistenceService>,
    /// Cached `admin.token`, read once at startup
    pub admin_token: Option<String>,
}

impl AppState {
    pub fn new(configuration: Configuration, persistence: Arc<dyn PersistenceService>) -> Self {
        let admin_token = configuration.admin_token();
        AppState {
            configuration,
            persistence,
            admin_token,
        }
    }

    pub fn persistence(&self) -> &dyn PersistenceService {
        self.persistence.as_ref()
    }
}
