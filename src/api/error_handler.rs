//! Centralized error classification for API calls

use crate::api::error::ApiError;
use crate::logging::LogLevel;

/// Maps API failures to the level they are logged at
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &ApiError) -> LogLevel {
        match (error, error.status()) {
            // Authentication errors - critical
            (_, Some(401 | 403)) => LogLevel::Error,

            // Malformed responses point at a contract mismatch
            (ApiError::Decode(_), _) => LogLevel::Error,

            // Server errors - temporary issues
            (_, Some(500..=599)) => LogLevel::Warn,

            // Backend reported its own failure (usually a database problem)
            (ApiError::Backend { .. }, _) => LogLevel::Warn,

            // Network issues and other errors
            _ => LogLevel::Warn,
        }
    }
}
