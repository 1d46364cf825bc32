//! Session setup and initialization

use crate::api::ApiClient;
use crate::config::Config;
use crate::dashboard::{ControllerSettings, DashboardController};
use crate::error::DashboardError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Session data shared by every subcommand
#[derive(Clone)]
pub struct SessionData {
    /// Controller driving the page
    pub controller: DashboardController,
    /// Where the page document is written
    pub snapshot_path: PathBuf,
    /// API base URL, for display purposes
    pub api_url: String,
}

/// Build the API client and the controller from configuration.
pub fn setup_session(config: &Config) -> Result<SessionData, DashboardError> {
    let timeout = Duration::from_secs(config.request_timeout_secs.max(1));
    let client = ApiClient::new(config.api_url.clone(), timeout)?;
    log::debug!(
        "Using API at {} with a {:?} timeout",
        client.base_url(),
        timeout
    );

    let controller = DashboardController::new(Arc::new(client), ControllerSettings::from(config));
    Ok(SessionData {
        controller,
        snapshot_path: config.snapshot_path.clone(),
        api_url: config.api_url.clone(),
    })
}

/// Render the page and write it to `path`, creating parent directories.
pub async fn write_snapshot(
    controller: &DashboardController,
    path: &Path,
) -> Result<(), DashboardError> {
    let document = controller.render_document().await?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, document).await?;
    log::trace!("Snapshot written to {}", path.display());
    Ok(())
}

/// Settle running animations, write the last document, then release the controller.
///
/// The controller is disposed even if the write fails.
pub async fn finish_session(
    controller: &DashboardController,
    path: &Path,
) -> Result<(), DashboardError> {
    controller.settle().await;
    let written = write_snapshot(controller, path).await;
    controller.dispose().await;
    written
}
