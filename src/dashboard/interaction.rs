//! UI event handling
//!
//! Clicks arrive as typed [`Action`]s, never as free text.

use super::{DashboardController, now};
use crate::actions::Action;
use crate::error::DashboardError;
use crate::page::notifications::NotificationKind;
use crate::render;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click(Action),
    /// Raw search box input. Applied after the debounce wait.
    SearchInput { query: String },
    FilterChanged { name: String, value: String },
    VisibilityChanged { hidden: bool },
    BackdropClick,
}

impl DashboardController {
    pub async fn handle_event(&self, event: UiEvent) -> Result<(), DashboardError> {
        match event {
            UiEvent::Click(action) => self.dispatch(action).await,
            UiEvent::SearchInput { query } => {
                self.search_input(&query).await;
                Ok(())
            }
            UiEvent::FilterChanged { name, value } => {
                log::info!("Filter changed: {} = {}", name, value);
                Ok(())
            }
            UiEvent::VisibilityChanged { hidden } => {
                self.visibility_changed(hidden).await;
                Ok(())
            }
            UiEvent::BackdropClick => {
                self.inner.page.lock().await.close_modal();
                Ok(())
            }
        }
    }

    /// Feed the search box. The table is filtered once input pauses.
    pub async fn search_input(&self, query: &str) {
        let at = now();
        self.inner.page.lock().await.set_search_input(query);
        self.inner.search.lock().await.call(at, query.to_string());
    }

    /// Forward a visibility change to the installed listener, if any.
    pub async fn visibility_changed(&self, hidden: bool) {
        let sender = self.inner.visibility.lock().await.clone();
        match sender {
            Some(sender) => {
                if sender.send(hidden).await.is_err() {
                    log::debug!("Visibility listener is gone");
                }
            }
            None => log::debug!("Visibility change ignored, no listener installed"),
        }
    }

    pub async fn dispatch(&self, action: Action) -> Result<(), DashboardError> {
        log::debug!("Dispatching {:?}", action);
        match action {
            Action::Refresh => {
                self.refresh_data().await;
            }
            Action::Export(target) => self.handle_export(target).await,
            Action::ViewVideo(video_id) | Action::ShowVideoInfo(video_id) => {
                self.view_video_details(video_id).await?;
            }
            Action::DownloadVideo(video_id) => {
                log::info!("Download requested for video {}", video_id);
            }
            Action::ViewUserVideos(user_id) => {
                log::info!("Video list requested for user {}", user_id);
            }
            Action::ViewUserInfo(user_id) => self.view_user_details(user_id).await?,
            Action::EditUserPrefs(user_id) => {
                log::info!("Preference editing requested for user {}", user_id);
            }
            Action::DismissNotification(id) => {
                self.inner.page.lock().await.dismiss_notification(id, now());
            }
            Action::CloseModal => {
                self.inner.page.lock().await.close_modal();
            }
        }
        Ok(())
    }

    async fn view_video_details(&self, video_id: i64) -> Result<(), DashboardError> {
        match self.inner.api.fetch_video(video_id).await {
            Ok(video) => {
                let html = render::video_modal(&video)?;
                self.inner.page.lock().await.open_modal(html);
            }
            Err(e) => {
                let level: log::Level = self.inner.error_handler.classify_error(&e).into();
                log::log!(level, "Failed to load video {}: {}", video_id, e);
                self.show_error(&format!("Failed to load video: {}", e.user_message()))
                    .await;
            }
        }
        Ok(())
    }

    async fn view_user_details(&self, user_id: i64) -> Result<(), DashboardError> {
        let mut page = self.inner.page.lock().await;
        match page.find_user(user_id) {
            Some(user) => {
                let html = render::user_modal(user)?;
                page.open_modal(html);
            }
            None => {
                log::warn!("User {} is not in the latest payload", user_id);
                page.notify(NotificationKind::Error, "User not found", now());
            }
        }
        Ok(())
    }
}
