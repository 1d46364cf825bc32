//! Periodic refresh and the visibility listener

use super::DashboardController;
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};

impl DashboardController {
    /// Install the poll timer and the "refresh when visible again" listener.
    ///
    /// Each trigger spawns its own refresh so a slow load never delays the timer.
    pub(crate) async fn install_listeners(&self) {
        if self.is_disposed() {
            return;
        }

        let (visibility_tx, mut visibility_rx) = mpsc::channel::<bool>(8);
        *self.inner.visibility.lock().await = Some(visibility_tx);

        let period = self.inner.settings.poll_interval;
        let shutdown = self.inner.shutdown.clone();
        let this = self.clone();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => break,
                    _ = interval.tick() => this.spawn_refresh("poll timer"),
                    Some(hidden) = visibility_rx.recv() => {
                        if !hidden {
                            this.spawn_refresh("page visible");
                        }
                    }
                }
            }
            log::debug!("Refresh task stopped");
        });

        if let Some(previous) = self.inner.refresh_task.lock().await.replace(handle) {
            previous.abort();
        }
        log::debug!("Polling every {:?}", period);
    }

    pub(crate) fn spawn_refresh(&self, trigger: &'static str) {
        let this = self.clone();
        tokio::spawn(async move {
            log::debug!("Refresh triggered by {}", trigger);
            this.refresh_data().await;
        });
    }
}
