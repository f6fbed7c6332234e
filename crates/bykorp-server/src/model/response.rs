//! HTTP response bodies owned by the server
//!
//! The catalogue and reservation payloads live in `bykorp_common::model`;
//! this module only holds the error envelope and the health report.

use bykorp_persistence::StorageMode;
use serde::{Deserialize, Serialize};

use super::constants::{HEALTH_STATUS_DOWN, HEALTH_STATUS_UP};

/// Error body returned by every failing endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    pub error: String,
}

impl ErrorResult {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResult {
            error: error.into(),
        }
    }
}

/// Body of `GET /health`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn up(mode: StorageMode) -> Self {
        HealthResponse {
            status: HEALTH_STATUS_UP.to_string(),
            message: format!("Bykorp API Server with {} is running", mode.display_name()),
        }
    }

    pub fn down(mode: StorageMode) -> Self {
        HealthResponse {
            status: HEALTH_STATUS_DOWN.to_string(),
            message: format!("{} storage is unavailable", mode.display_name()),
        }
    }
}
