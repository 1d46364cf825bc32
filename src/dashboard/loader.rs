//! Data loading pipeline
//!
//! Stats, then videos, then users. A failing sub-load is logged and the next one
//! still runs. Only the load holding the current token writes to the page.

use super::{DashboardController, now};
use crate::api::error::ApiError;
use crate::consts::dashboard_consts::LOAD_FAILED_MESSAGE;
use crate::page::Page;
use crate::render::RenderError;
use std::future::Future;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubLoad {
    Loaded,
    Failed,
    /// A newer load took over before this one could write.
    Superseded,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub stats: SubLoad,
    pub videos: SubLoad,
    pub users: SubLoad,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Completed(LoadReport),
    /// The pipeline itself failed and the generic error was shown.
    Aborted,
}

impl DashboardController {
    /// Reload everything. Used by the poll timer, the visibility listener and
    /// the refresh action.
    pub async fn refresh_data(&self) -> LoadOutcome {
        log::debug!("Refreshing dashboard data");
        self.load_initial_data().await
    }

    /// Run the load pipeline, superseding any load still in flight.
    pub async fn load_initial_data(&self) -> LoadOutcome {
        let token = self.begin_load().await;
        let this = self.clone();
        let pipeline_token = token.clone();
        let handle = tokio::spawn(async move { this.run_pipeline(pipeline_token).await });

        match handle.await {
            Ok(report) => LoadOutcome::Completed(report),
            Err(e) => {
                log::error!("Data load failed: {}", e);
                if !token.is_cancelled() {
                    self.inner.page.lock().await.set_loading(false);
                }
                self.show_error(LOAD_FAILED_MESSAGE).await;
                LoadOutcome::Aborted
            }
        }
    }

    async fn begin_load(&self) -> CancellationToken {
        let token = self.inner.shutdown.child_token();
        let previous = self.inner.current_load.lock().await.replace(token.clone());
        if let Some(previous) = previous {
            log::debug!("Superseding load in flight");
            previous.cancel();
        }
        token
    }

    async fn run_pipeline(&self, token: CancellationToken) -> LoadReport {
        if !token.is_cancelled() {
            self.inner.page.lock().await.set_loading(true);
        }

        let stats = self.load_stats(&token).await;
        let videos = self.load_videos(&token).await;
        let users = self.load_users(&token).await;

        if !token.is_cancelled() {
            self.inner.page.lock().await.set_loading(false);
        }
        LoadReport {
            stats,
            videos,
            users,
        }
    }

    async fn load_stats(&self, token: &CancellationToken) -> SubLoad {
        self.sub_load(token, "stats", self.inner.api.fetch_stats(), |page, stats| {
            page.update_stats_display(&stats, now());
            page.update_charts(&stats);
            Ok(())
        })
        .await
    }

    async fn load_videos(&self, token: &CancellationToken) -> SubLoad {
        self.sub_load(token, "videos", self.inner.api.fetch_videos(), |page, videos| {
            page.update_videos_display(&videos)
        })
        .await
    }

    async fn load_users(&self, token: &CancellationToken) -> SubLoad {
        self.sub_load(token, "users", self.inner.api.fetch_users(), |page, users| {
            page.update_users_display(&users)
        })
        .await
    }

    async fn sub_load<T, F, A>(
        &self,
        token: &CancellationToken,
        resource: &str,
        fetch: F,
        apply: A,
    ) -> SubLoad
    where
        F: Future<Output = Result<T, ApiError>>,
        A: FnOnce(&mut Page, T) -> Result<(), RenderError>,
    {
        if token.is_cancelled() {
            return SubLoad::Superseded;
        }

        let result = tokio::select! {
            _ = token.cancelled() => return SubLoad::Superseded,
            result = fetch => result,
        };

        match result {
            Ok(payload) => {
                let mut page = self.inner.page.lock().await;
                if token.is_cancelled() {
                    return SubLoad::Superseded;
                }
                match apply(&mut page, payload) {
                    Ok(()) => {
                        log::debug!("Loaded {}", resource);
                        SubLoad::Loaded
                    }
                    Err(e) => {
                        log::error!("Failed to render {}: {}", resource, e);
                        SubLoad::Failed
                    }
                }
            }
            Err(e) => {
                let level: log::Level = self.inner.error_handler.classify_error(&e).into();
                log::log!(level, "Failed to load {}: {}", resource, e);
                SubLoad::Failed
            }
        }
    }
}
