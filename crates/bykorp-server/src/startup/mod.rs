//! Application startup utilities module.
//!
//! Logging, storage initialisation, the HTTP server and signal handling used
//! by the `bykorp-server` binary.

mod http;
mod logging;
mod persistence;
mod shutdown;

pub use http::{cors, main_server};
pub use logging::{LogRotation, LoggingConfig, LoggingGuard, init_logging};
pub use persistence::init_persistence;
pub use shutdown::{spawn_shutdown_listener, wait_for_shutdown_signal};
