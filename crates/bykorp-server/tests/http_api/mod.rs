//! HTTP API integration tests

mod catalog_api_test;
mod health_api_test;
mod reservation_api_test;
