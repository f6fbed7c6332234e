//! Data models module
//!
//! - `constants` - Configuration keys and defaults
//! - `config` - Layered configuration (file, environment, command line)
//! - `app_state` - State shared across handlers
//! - `response` - HTTP response bodies that are not part of the public API model

pub mod app_state;
pub mod config;
pub mod constants;
pub mod response;

pub use app_state::AppState;
pub use self::config::{Cli, Configuration};
pub use constants::*;
pub use response::{ErrorResult, HealthResponse};
