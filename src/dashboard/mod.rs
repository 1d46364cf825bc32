//! Dashboard controller
//!
//! Owns the page, the API client, the poll timer task, the chart instances
//! and the current-load slot. Everything it starts is released by
//! [`DashboardController::dispose`].

mod export;
mod interaction;
mod loader;
mod refresh;

pub use interaction::UiEvent;
pub use loader::{LoadOutcome, SubLoad};

use crate::api::DashboardApi;
use crate::api::error_handler::ErrorHandler;
use crate::config::{Config, PageLayout};
use crate::consts::dashboard_consts::interaction::search_debounce;
use crate::page::Page;
use crate::page::notifications::NotificationKind;
use crate::render::RenderError;
use crate::timing::Debounce;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard, mpsc};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Current instant on tokio's clock, so paused-time tests drive animations too.
pub(crate) fn now() -> std::time::Instant {
    tokio::time::Instant::now().into_std()
}

#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub poll_interval: Duration,
    pub export_dir: PathBuf,
    pub layout: PageLayout,
}

impl From<&Config> for ControllerSettings {
    fn from(config: &Config) -> Self {
        Self {
            poll_interval: Duration::from_secs(config.poll_interval_secs.max(1)),
            export_dir: config.export_dir.clone(),
            layout: config.layout,
        }
    }
}

struct Inner {
    api: Arc<dyn DashboardApi>,
    settings: ControllerSettings,
    error_handler: ErrorHandler,
    page: Mutex<Page>,
    search: Mutex<Debounce<String>>,
    /// Token of the load allowed to write to the page.
    current_load: Mutex<Option<CancellationToken>>,
    /// Parent of every load token and of the refresh task.
    shutdown: CancellationToken,
    refresh_task: Mutex<Option<JoinHandle<()>>>,
    visibility: Mutex<Option<mpsc::Sender<bool>>>,
}

#[derive(Clone)]
pub struct DashboardController {
    inner: Arc<Inner>,
}

impl DashboardController {
    /// Create the controller and initialize the widgets the layout declares.
    pub fn new(api: Arc<dyn DashboardApi>, settings: ControllerSettings) -> Self {
        let page = Page::new(settings.layout);
        Self {
            inner: Arc::new(Inner {
                api,
                settings,
                error_handler: ErrorHandler::new(),
                page: Mutex::new(page),
                search: Mutex::new(Debounce::new(search_debounce())),
                current_load: Mutex::new(None),
                shutdown: CancellationToken::new(),
                refresh_task: Mutex::new(None),
                visibility: Mutex::new(None),
            }),
        }
    }

    /// Initial data load without installing listeners.
    pub async fn bootstrap(&self) -> LoadOutcome {
        log::info!("Loading dashboard data");
        self.load_initial_data().await
    }

    /// Initial data load, then the poll timer and the visibility listener.
    pub async fn start(&self) -> LoadOutcome {
        let outcome = self.bootstrap().await;
        self.install_listeners().await;
        outcome
    }

    /// Stop the timer, supersede any load in flight and destroy the charts.
    pub async fn dispose(&self) {
        self.inner.shutdown.cancel();
        if let Some(token) = self.inner.current_load.lock().await.take() {
            token.cancel();
        }
        self.inner.visibility.lock().await.take();
        if let Some(handle) = self.inner.refresh_task.lock().await.take() {
            handle.abort();
            let _ = handle.await;
        }
        self.inner.search.lock().await.cancel();
        self.inner.page.lock().await.dispose();
        log::debug!("Dashboard controller disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.shutdown.is_cancelled()
    }

    pub async fn show_success(&self, message: &str) -> u64 {
        self.notify(NotificationKind::Success, message).await
    }

    pub async fn show_error(&self, message: &str) -> u64 {
        self.notify(NotificationKind::Error, message).await
    }

    async fn notify(&self, kind: NotificationKind, message: &str) -> u64 {
        self.inner.page.lock().await.notify(kind, message, now())
    }

    /// Advance the debounced search, counter animations and notifications.
    ///
    /// Returns true if the page changed.
    pub async fn tick(&self) -> bool {
        let at = now();
        let query = self.inner.search.lock().await.poll(at);
        let mut page = self.inner.page.lock().await;
        if let Some(query) = query {
            let visible = page.apply_search(&query);
            log::debug!("Search {:?} matched {} rows", query, visible);
        }
        page.tick(at)
    }

    /// Direct access to the page model.
    pub async fn page(&self) -> MutexGuard<'_, Page> {
        self.inner.page.lock().await
    }

    pub async fn render_document(&self) -> Result<String, RenderError> {
        self.inner.page.lock().await.render_document()
    }

    /// Returns whether the page changed since the last call.
    pub async fn take_dirty(&self) -> bool {
        self.inner.page.lock().await.take_dirty()
    }

    pub async fn settle(&self) {
        self.inner.page.lock().await.settle();
    }
}
