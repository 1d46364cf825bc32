//! Notification tray
//!
//! Notifications stack without a cap. Each one is shown, hides after the
//! autohide delay or on dismiss, and is removed once the hide transition ends.

use crate::consts::dashboard_consts::notifications::{autohide, hide_transition};
use std::time::Instant;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Showing,
    Hiding { since: Instant },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub shown_at: Instant,
    pub phase: Phase,
}

impl Notification {
    pub fn is_showing(&self) -> bool {
        self.phase == Phase::Showing
    }
}

#[derive(Debug, Default)]
pub struct NotificationTray {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationTray {
    pub fn push(&mut self, kind: NotificationKind, message: &str, now: Instant) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            message: message.to_string(),
            shown_at: now,
            phase: Phase::Showing,
        });
        id
    }

    /// Start hiding a notification. Returns false for unknown or already hiding ids.
    pub fn dismiss(&mut self, id: u64, now: Instant) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(item) if item.is_showing() => {
                item.phase = Phase::Hiding { since: now };
                true
            }
            _ => false,
        }
    }

    /// Advance autohide and removal. Returns true if anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for item in &mut self.items {
            if item.is_showing() && now.saturating_duration_since(item.shown_at) >= autohide() {
                item.phase = Phase::Hiding { since: now };
                changed = true;
            }
        }

        let before = self.items.len();
        self.items.retain(|item| match item.phase {
            Phase::Showing => true,
            Phase::Hiding { since } => now.saturating_duration_since(since) < hide_transition(),
        });
        changed || self.items.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn count(&self, kind: NotificationKind) -> usize {
        self.items.iter().filter(|n| n.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_notifications_stack() {
        let t0 = Instant::now();
        let mut tray = NotificationTray::default();
        let a = tray.push(NotificationKind::Error, "Failed to load data", t0);
        let b = tray.push(NotificationKind::Error, "Failed to load data", t0);
        assert_ne!(a, b);
        assert_eq!(tray.len(), 2);
        assert_eq!(tray.count(NotificationKind::Error), 2);
    }

    #[test]
    fn test_autohide_then_removal() {
        let t0 = Instant::now();
        let mut tray = NotificationTray::default();
        tray.push(NotificationKind::Success, "Saved", t0);

        assert!(!tray.tick(t0 + ms(4999)));
        assert!(tray.tick(t0 + ms(5000)));
        let item = tray.iter().next().unwrap();
        assert!(!item.is_showing());

        // Still present during the hide transition
        assert!(!tray.tick(t0 + ms(5100)));
        assert_eq!(tray.len(), 1);
        assert!(tray.tick(t0 + ms(5150)));
        assert!(tray.is_empty());
    }

    #[test]
    fn test_dismiss_starts_hide_transition() {
        let t0 = Instant::now();
        let mut tray = NotificationTray::default();
        let id = tray.push(NotificationKind::Success, "Saved", t0);

        assert!(tray.dismiss(id, t0 + ms(100)));
        assert!(!tray.dismiss(id, t0 + ms(120)));
        assert!(!tray.dismiss(id + 1, t0 + ms(120)));
        assert!(tray.tick(t0 + ms(250)));
        assert!(tray.is_empty());
    }
}
