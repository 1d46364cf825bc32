//! Export of the latest payloads as pretty JSON

use super::DashboardController;
use crate::actions::ExportTarget;
use crate::api::types::{StatsSnapshot, UserRecord, VideoRecord};
use crate::error::DashboardError;
use chrono::Local;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
struct DashboardExport<'a> {
    exported_at: String,
    stats: Option<StatsSnapshot>,
    videos: &'a [VideoRecord],
    users: &'a [UserRecord],
}

impl ExportTarget {
    fn success_message(&self) -> &'static str {
        match self {
            ExportTarget::Dashboard => "Dashboard data exported",
            ExportTarget::Videos => "Videos exported",
            ExportTarget::Users => "Users exported",
        }
    }
}

impl DashboardController {
    /// Write the latest payload for `target` into the export directory.
    ///
    /// Payloads that never loaded are written as `null` (stats) or `[]` (lists).
    pub async fn export(&self, target: ExportTarget) -> Result<PathBuf, DashboardError> {
        let exported_at = Local::now();
        let body = {
            let page = self.inner.page.lock().await;
            let latest = page.latest();
            let videos = latest.videos.as_deref().unwrap_or_default();
            let users = latest.users.as_deref().unwrap_or_default();
            match target {
                ExportTarget::Dashboard => serde_json::to_string_pretty(&DashboardExport {
                    exported_at: exported_at.to_rfc3339(),
                    stats: latest.stats,
                    videos,
                    users,
                })?,
                ExportTarget::Videos => serde_json::to_string_pretty(videos)?,
                ExportTarget::Users => serde_json::to_string_pretty(users)?,
            }
        };

        let dir = &self.inner.settings.export_dir;
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(format!(
            "{}_{}.json",
            target,
            exported_at.format("%Y%m%d_%H%M%S")
        ));
        tokio::fs::write(&path, body).await?;

        log::info!("Exported {} to {}", target, path.display());
        Ok(path)
    }

    /// Export and report the result as a notification.
    pub(crate) async fn handle_export(&self, target: ExportTarget) {
        match self.export(target).await {
            Ok(path) => {
                self.show_success(&format!(
                    "{} to {}",
                    target.success_message(),
                    path.display()
                ))
                .await;
            }
            Err(e) => {
                log::error!("Export of {} failed: {}", target, e);
                self.show_error(&format!("Export failed: {}", e)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::actions::{Action, ExportTarget};
    use crate::api::MockDashboardApi;
    use crate::config::PageLayout;
    use crate::dashboard::test_support::{stats, user, video};
    use crate::dashboard::{ControllerSettings, DashboardController};
    use crate::page::notifications::NotificationKind;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::tempdir;

    fn controller(export_dir: PathBuf) -> DashboardController {
        let mut api = MockDashboardApi::new();
        api.expect_fetch_stats().returning(|| Ok(stats(8)));
        api.expect_fetch_videos()
            .returning(|| Ok(vec![video(1), video(2)]));
        api.expect_fetch_users().returning(|| Ok(vec![user(5, "anna", 2)]));
        DashboardController::new(
            Arc::new(api),
            ControllerSettings {
                poll_interval: Duration::from_secs(30),
                export_dir,
                layout: PageLayout::default(),
            },
        )
    }

    #[tokio::test]
    async fn test_export_dashboard_writes_all_payloads() {
        let dir = tempdir().unwrap();
        let controller = controller(dir.path().join("exports"));
        controller.bootstrap().await;

        let path = controller.export(ExportTarget::Dashboard).await.unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("dashboard_") && name.ends_with(".json"));

        let body = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["stats"]["total_videos"], 8);
        assert_eq!(value["videos"].as_array().unwrap().len(), 2);
        assert_eq!(value["users"][0]["user_id"], 5);
        // Pretty printed
        assert!(body.contains("\n  "));
    }

    #[tokio::test]
    async fn test_export_before_load_writes_empty_list() {
        let dir = tempdir().unwrap();
        let controller = controller(dir.path().to_path_buf());

        let path = controller.export(ExportTarget::Users).await.unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_export_action_reports_success() {
        let dir = tempdir().unwrap();
        let controller = controller(dir.path().to_path_buf());
        controller.bootstrap().await;

        controller
            .dispatch(Action::Export(ExportTarget::Videos))
            .await
            .unwrap();
        let page = controller.page().await;
        assert_eq!(page.notifications().count(NotificationKind::Success), 1);
        let message = &page.notifications().iter().next().unwrap().message;
        assert!(message.starts_with("Videos exported to"));
    }

    #[tokio::test]
    async fn test_export_into_unwritable_path_reports_error() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let controller = controller(blocker);

        controller
            .dispatch(Action::Export(ExportTarget::Dashboard))
            .await
            .unwrap();
        let page = controller.page().await;
        assert_eq!(page.notifications().count(NotificationKind::Error), 1);
        assert_eq!(page.notifications().count(NotificationKind::Success), 0);
    }
}
