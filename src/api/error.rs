//! Error handling for the dashboard API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status and no error envelope.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body carried an `error` field.
    #[error("Backend error (status {status}): {message}")]
    Backend { status: u16, message: String },

    /// The body was not the JSON shape the endpoint promises.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status associated with the failure, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } | ApiError::Backend { status, .. } => Some(*status),
            ApiError::Reqwest(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    /// Message suitable for a user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Backend { message, .. } => message.clone(),
            ApiError::Http { status, .. } => format!("Server responded with status {}", status),
            ApiError::Reqwest(_) => "Network error".to_string(),
            ApiError::Decode(_) => "Unexpected response from server".to_string(),
        }
    }
}
