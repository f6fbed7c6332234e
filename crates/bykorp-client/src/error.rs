//! Client error types

/// Error type for Bykorp API calls
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Non-2xx answer; `message` is the server's `error` field when present
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// Message suitable for showing next to a form.
    ///
    /// Server-provided messages are kept; transport failures become `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Http(_) => fallback.to_string(),
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Api {
            status: 400,
            message: "Valid email is required".to_string(),
        };
        assert_eq!(err.to_string(), "Valid email is required");
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.message_or("Failed to create reservation"),
            "Valid email is required"
        );
    }
}
