//! Page update logic
//!
//! Contains all methods that write new payloads and interaction state into the page

use super::notifications::NotificationKind;
use super::{Container, Page, Row};

use crate::api::types::{StatsSnapshot, UserRecord, VideoRecord};
use crate::consts::dashboard_consts::interaction::counter_animation;
use crate::render::{self, RenderError};
use crate::timing::CounterTween;

use std::time::Instant;

impl Page {
    /// Start animating every counter from its displayed value towards `stats`.
    pub fn update_stats_display(&mut self, stats: &StatsSnapshot, now: Instant) {
        for counter in &mut self.counters {
            let target = counter.id.read(stats);
            counter.tween = Some(CounterTween::new(
                counter.displayed,
                target,
                now,
                counter_animation(),
            ));
        }
        self.latest.stats = Some(*stats);
        self.dirty = true;
    }

    /// Feed `[week, month, total]` to the charts.
    ///
    /// Both charts receive the same series.
    pub fn update_charts(&mut self, stats: &StatsSnapshot) -> bool {
        let series = [
            stats.videos_this_week,
            stats.videos_this_month,
            stats.total_videos,
        ];
        let updated = self.charts.update_all(&series);
        if updated {
            self.dirty = true;
        }
        updated
    }

    pub fn update_videos_display(&mut self, videos: &[VideoRecord]) -> Result<(), RenderError> {
        self.latest.videos = Some(videos.to_vec());
        let Some(grid) = self.videos_grid.as_mut() else {
            return Ok(());
        };

        *grid = if videos.is_empty() {
            Container {
                rows: vec![Row::new(render::videos_empty()?)],
                records: 0,
            }
        } else {
            Container {
                rows: videos
                    .iter()
                    .map(|video| render::video_card(video).map(Row::new))
                    .collect::<Result<_, _>>()?,
                records: videos.len(),
            }
        };
        self.dirty = true;
        Ok(())
    }

    /// Replace the table body. Rows start visible whatever the current query.
    pub fn update_users_display(&mut self, users: &[UserRecord]) -> Result<(), RenderError> {
        self.latest.users = Some(users.to_vec());
        let Some(table) = self.users_table.as_mut() else {
            return Ok(());
        };

        *table = if users.is_empty() {
            Container {
                rows: vec![Row::new(render::users_empty()?)],
                records: 0,
            }
        } else {
            Container {
                rows: users
                    .iter()
                    .map(|user| render::user_row(user).map(Row::new))
                    .collect::<Result<_, _>>()?,
                records: users.len(),
            }
        };
        self.dirty = true;
        Ok(())
    }

    /// Record what is typed into the search box, before debouncing.
    pub fn set_search_input(&mut self, query: &str) {
        if self.search_query != query {
            self.search_query = query.to_string();
            self.dirty = true;
        }
    }

    /// Show users-table rows whose text contains `query`, case-insensitively.
    ///
    /// Returns the number of rows left visible.
    pub fn apply_search(&mut self, query: &str) -> usize {
        self.set_search_input(query);
        let needle = query.to_lowercase();
        let Some(table) = self.users_table.as_mut() else {
            return 0;
        };

        let mut visible = 0;
        for row in &mut table.rows {
            let show = row.text.to_lowercase().contains(&needle);
            if row.visible != show {
                row.visible = show;
                self.dirty = true;
            }
            if show {
                visible += 1;
            }
        }
        visible
    }

    pub fn set_loading(&mut self, loading: bool) {
        if self.loading != loading {
            self.loading = loading;
            self.dirty = true;
        }
    }

    pub fn notify(&mut self, kind: NotificationKind, message: &str, now: Instant) -> u64 {
        self.dirty = true;
        self.notifications.push(kind, message, now)
    }

    pub fn dismiss_notification(&mut self, id: u64, now: Instant) -> bool {
        let dismissed = self.notifications.dismiss(id, now);
        if dismissed {
            self.dirty = true;
        }
        dismissed
    }

    pub fn open_modal(&mut self, html: String) {
        self.modal = Some(html);
        self.dirty = true;
    }

    pub fn close_modal(&mut self) -> bool {
        let closed = self.modal.take().is_some();
        if closed {
            self.dirty = true;
        }
        closed
    }

    /// Advance counter animations and notification timers.
    ///
    /// Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for counter in &mut self.counters {
            let Some(tween) = counter.tween else {
                continue;
            };
            let value = tween.value_at(now);
            if value != counter.displayed {
                counter.displayed = value;
                changed = true;
            }
            if tween.is_finished(now) {
                counter.tween = None;
            }
        }

        changed |= self.notifications.tick(now);
        if changed {
            self.dirty = true;
        }
        changed
    }

    /// Jump every running counter animation to its end.
    pub fn settle(&mut self) {
        for counter in &mut self.counters {
            if let Some(tween) = counter.tween.take() {
                if counter.displayed != tween.target() {
                    counter.displayed = tween.target();
                    self.dirty = true;
                }
            }
        }
    }
}
