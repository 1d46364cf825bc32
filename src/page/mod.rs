//! Headless page model
//!
//! Holds every slot the dashboard renders into: stat counters, charts, the
//! videos grid, the users table body, notifications and the modal. A slot
//! whose element is absent from the layout is `None` and updates skip it.

pub mod charts;
pub mod notifications;
mod updaters;

use crate::api::types::{StatsSnapshot, UserRecord, VideoRecord};
use crate::config::PageLayout;
use crate::render::{self, ChartView, CounterView, PageTemplate, RenderError};
use crate::timing::CounterTween;
use askama::Template;
use charts::{ChartKind, ChartSet};
use notifications::NotificationTray;
use strum::{EnumIter, IntoEnumIterator};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum CounterId {
    TotalVideos,
    TotalUsers,
    TotalChats,
    VideosToday,
}

impl CounterId {
    pub fn element_id(&self) -> &'static str {
        match self {
            CounterId::TotalVideos => "total-videos",
            CounterId::TotalUsers => "total-users",
            CounterId::TotalChats => "total-chats",
            CounterId::VideosToday => "videos-today",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CounterId::TotalVideos => "Total videos",
            CounterId::TotalUsers => "Users",
            CounterId::TotalChats => "Chats",
            CounterId::VideosToday => "Videos today",
        }
    }

    fn read(&self, stats: &StatsSnapshot) -> u64 {
        match self {
            CounterId::TotalVideos => stats.total_videos,
            CounterId::TotalUsers => stats.total_users,
            CounterId::TotalChats => stats.total_chats,
            CounterId::VideosToday => stats.videos_today,
        }
    }
}

#[derive(Debug)]
struct StatCounter {
    id: CounterId,
    displayed: u64,
    tween: Option<CounterTween>,
}

/// One rendered child of a container.
#[derive(Debug, Clone)]
struct Row {
    html: String,
    /// Visible text, matched by search.
    text: String,
    visible: bool,
}

impl Row {
    fn new(html: String) -> Self {
        let text = render::text_content(&html);
        Self {
            html,
            text,
            visible: true,
        }
    }
}

/// A container whose children are replaced wholesale on every render.
#[derive(Debug, Default)]
struct Container {
    rows: Vec<Row>,
    /// Number of rows backed by a record, as opposed to the empty state.
    records: usize,
}

impl Container {
    fn inner_html(&self) -> String {
        self.rows
            .iter()
            .filter(|row| row.visible)
            .map(|row| row.html.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The most recent payload of each resource, as received.
#[derive(Debug, Clone, Default)]
pub struct LatestPayloads {
    pub stats: Option<StatsSnapshot>,
    pub videos: Option<Vec<VideoRecord>>,
    pub users: Option<Vec<UserRecord>>,
}

#[derive(Debug)]
pub struct Page {
    counters: Vec<StatCounter>,
    charts: ChartSet,
    videos_grid: Option<Container>,
    users_table: Option<Container>,
    search_query: String,
    notifications: NotificationTray,
    modal: Option<String>,
    loading: bool,
    dirty: bool,
    latest: LatestPayloads,
}

impl Page {
    /// Initialize the widgets the layout declares.
    pub fn new(layout: PageLayout) -> Self {
        let counters = if layout.stat_counters {
            CounterId::iter()
                .map(|id| StatCounter {
                    id,
                    displayed: 0,
                    tween: None,
                })
                .collect()
        } else {
            Vec::new()
        };

        let charts = ChartSet::init(|kind| match kind {
            ChartKind::Activity => layout.activity_chart,
            ChartKind::VideoDistribution => layout.distribution_chart,
        });

        Self {
            counters,
            charts,
            videos_grid: layout.videos_grid.then(Container::default),
            users_table: layout.users_table.then(Container::default),
            search_query: String::new(),
            notifications: NotificationTray::default(),
            modal: None,
            loading: false,
            dirty: true,
            latest: LatestPayloads::default(),
        }
    }

    #[cfg(test)]
    pub fn counter_value(&self, id: CounterId) -> Option<u64> {
        self.counters
            .iter()
            .find(|counter| counter.id == id)
            .map(|counter| counter.displayed)
    }

    #[cfg(test)]
    pub fn charts(&self) -> &ChartSet {
        &self.charts
    }

    #[cfg(test)]
    pub fn notifications(&self) -> &NotificationTray {
        &self.notifications
    }

    pub fn latest(&self) -> &LatestPayloads {
        &self.latest
    }

    pub fn find_user(&self, user_id: i64) -> Option<&UserRecord> {
        self.latest
            .users
            .as_ref()
            .and_then(|users| users.iter().find(|user| user.user_id == user_id))
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[cfg(test)]
    pub fn modal(&self) -> Option<&str> {
        self.modal.as_deref()
    }

    #[cfg(test)]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Number of video cards currently rendered, `None` without a grid.
    pub fn video_card_count(&self) -> Option<usize> {
        self.videos_grid.as_ref().map(|grid| grid.records)
    }

    /// Number of record-backed user rows, `None` without a table.
    pub fn user_row_count(&self) -> Option<usize> {
        self.users_table.as_ref().map(|table| table.records)
    }

    #[cfg(test)]
    /// Visible text of the users table rows that are not hidden by search.
    pub fn visible_user_rows(&self) -> Vec<&str> {
        self.users_table
            .iter()
            .flat_map(|table| table.rows.iter())
            .filter(|row| row.visible)
            .map(|row| row.text.as_str())
            .collect()
    }

    pub fn videos_grid_html(&self) -> Option<String> {
        self.videos_grid.as_ref().map(Container::inner_html)
    }

    pub fn users_tbody_html(&self) -> Option<String> {
        self.users_table.as_ref().map(Container::inner_html)
    }

    /// Returns whether anything changed since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn dispose(&mut self) {
        self.charts.dispose();
        for counter in &mut self.counters {
            counter.tween = None;
        }
        self.dirty = true;
    }

    /// The whole page as a standalone HTML document.
    pub fn render_document(&self) -> Result<String, RenderError> {
        let counters = self
            .counters
            .iter()
            .map(|counter| CounterView {
                id: counter.id.element_id(),
                label: counter.id.label(),
                value: counter.displayed,
            })
            .collect();

        let charts = self
            .charts
            .iter()
            .map(|(kind, chart)| {
                Ok(ChartView {
                    id: kind.element_id(),
                    labels: serde_json::to_string(&chart.labels)
                        .map_err(|e| RenderError::Custom(Box::new(e)))?,
                    series: serde_json::to_string(&chart.data)
                        .map_err(|e| RenderError::Custom(Box::new(e)))?,
                    revision: chart.revision,
                })
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        let toasts = self
            .notifications
            .iter()
            .map(|n| {
                render::toast(
                    n.id,
                    n.kind == notifications::NotificationKind::Success,
                    &n.message,
                    n.is_showing(),
                )
            })
            .collect::<Result<Vec<_>, RenderError>>()?
            .join("\n");

        PageTemplate {
            generated_at: chrono::Local::now().to_rfc3339(),
            loading: self.loading,
            counters,
            charts,
            videos_grid: self.videos_grid_html(),
            users_tbody: self.users_tbody_html(),
            search_query: self.search_query.clone(),
            toasts,
            modal: self.modal.clone(),
        }
        .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_respects_layout() {
        let layout = PageLayout {
            stat_counters: false,
            distribution_chart: false,
            users_table: false,
            ..PageLayout::default()
        };
        let page = Page::new(layout);
        assert_eq!(page.counter_value(CounterId::TotalVideos), None);
        assert!(page.charts().get(ChartKind::Activity).is_some());
        assert!(page.charts().get(ChartKind::VideoDistribution).is_none());
        assert_eq!(page.video_card_count(), Some(0));
        assert_eq!(page.user_row_count(), None);
    }

    #[test]
    fn test_document_contains_every_present_slot() {
        let page = Page::new(PageLayout::default());
        let html = page.render_document().unwrap();
        for id in [
            "total-videos",
            "total-users",
            "total-chats",
            "videos-today",
            "activityChart",
            "videoDistributionChart",
            "videosGrid",
            "usersTable",
        ] {
            assert!(html.contains(&format!(r#"id="{}""#, id)), "missing {}", id);
        }
        assert!(html.contains("This week"));
    }

    #[test]
    fn test_document_omits_absent_slots() {
        let layout = PageLayout {
            activity_chart: false,
            distribution_chart: false,
            videos_grid: false,
            ..PageLayout::default()
        };
        let html = Page::new(layout).render_document().unwrap();
        assert!(!html.contains("<canvas"));
        assert!(!html.contains("videosGrid"));
        assert!(html.contains("usersTable"));
    }

    #[test]
    fn test_take_dirty_resets() {
        let mut page = Page::new(PageLayout::default());
        assert!(page.take_dirty());
        assert!(!page.take_dirty());
    }
}
