//! One-shot subcommands: bootstrap, act once, exit

use super::SessionData;
use super::messages::print_written;
use super::setup::finish_session;
use crate::actions::ExportTarget;
use crate::dashboard::{LoadOutcome, SubLoad};
use crate::error::DashboardError;
use crate::pretty::print_cmd_warn;
use std::path::PathBuf;

fn warn_on_failed_loads(outcome: LoadOutcome) {
    let failed: Vec<&str> = match outcome {
        LoadOutcome::Completed(report) => [
            ("stats", report.stats),
            ("videos", report.videos),
            ("users", report.users),
        ]
        .into_iter()
        .filter(|(_, status)| *status != SubLoad::Loaded)
        .map(|(name, _)| name)
        .collect(),
        LoadOutcome::Aborted => vec!["stats", "videos", "users"],
    };
    if !failed.is_empty() {
        print_cmd_warn!(
            "Partial data",
            "Could not load {}; see the log for details",
            failed.join(", ")
        );
    }
}

/// Load once, settle the counters and write the page document.
pub async fn run_snapshot(session: SessionData) -> Result<PathBuf, DashboardError> {
    let outcome = session.controller.bootstrap().await;
    warn_on_failed_loads(outcome);
    {
        let page = session.controller.page().await;
        log::info!(
            "Rendered {} video cards and {} user rows",
            page.video_card_count().unwrap_or_default(),
            page.user_row_count().unwrap_or_default()
        );
    }

    finish_session(&session.controller, &session.snapshot_path).await?;
    print_written("Snapshot", &session.snapshot_path);
    Ok(session.snapshot_path)
}

/// Load once and export the chosen payload.
pub async fn run_export(
    session: SessionData,
    target: ExportTarget,
) -> Result<PathBuf, DashboardError> {
    let outcome = session.controller.bootstrap().await;
    warn_on_failed_loads(outcome);

    let path = session.controller.export(target).await?;
    session.controller.dispose().await;
    print_written("Export", &path);
    Ok(path)
}
