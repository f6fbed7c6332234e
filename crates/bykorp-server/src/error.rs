// Error handling for the HTTP layer
// Maps domain errors onto HTTP status codes and the `{"error": ...}` body the site expects

use std::fmt::{Display, Formatter};

use actix_web::{HttpResponse, http::StatusCode};
use bykorp_common::BykorpError;

use crate::model::response::ErrorResult;

// Wrapper for application errors to implement actix-web error handling
#[derive(Debug)]
pub struct AppError {
    inner: anyhow::Error, // Wrapped anyhow error
}

impl AppError {
    pub fn inner(&self) -> &anyhow::Error {
        &self.inner
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        AppError { inner: value }
    }
}

impl From<BykorpError> for AppError {
    fn from(value: BykorpError) -> Self {
        AppError {
            inner: anyhow::Error::new(value),
        }
    }
}

impl actix_web::error::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self.inner.downcast_ref::<BykorpError>() {
            Some(BykorpError::IllegalArgument(_)) => StatusCode::BAD_REQUEST,
            Some(BykorpError::Unauthorized(_)) => StatusCode::UNAUTHORIZED,
            Some(BykorpError::DatabaseError(_))
            | Some(BykorpError::ConfigError(_))
            | Some(BykorpError::InternalError(_))
            | None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self.inner.downcast_ref::<BykorpError>() {
            Some(e) => e.to_string(),
            // Unclassified errors may carry driver detail; keep it out of responses.
            None => "Internal server error".to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorResult::new(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_status_mapping() {
        let err = AppError::from(BykorpError::illegal_argument("bad"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = AppError::from(BykorpError::Unauthorized("no".to_string()));
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let err = AppError::from(BykorpError::database("Failed to fetch services"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = AppError::from(anyhow::anyhow!("connection refused"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_passthrough() {
        let err = AppError::from(BykorpError::illegal_argument("Valid email is required"));
        assert_eq!(err.to_string(), "Valid email is required");
    }
}
