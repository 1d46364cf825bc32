//! Application-level errors

use crate::api::error::ApiError;
use crate::session::commands::CommandError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid command: {0}")]
    Command(#[from] CommandError),
}
