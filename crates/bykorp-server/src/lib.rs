// Main library module for the Bykorp agency API server
// Exposes the HTTP layer so integration tests can mount it without binding a port

// Module declarations
pub mod api; // API handlers and routes
pub mod error; // Error handling and types
pub mod model; // Configuration, application state, and response types
pub mod startup; // Logging, HTTP server, and shutdown utilities

// Re-export common types from bykorp-common
pub use bykorp_common::BykorpError;
