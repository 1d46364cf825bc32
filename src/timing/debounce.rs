//! Trailing-edge debouncing driven by explicit instants

use std::time::{Duration, Instant};

/// Holds back a value until `wait` has passed without another call.
///
/// Every call replaces the pending value and pushes the deadline out to
/// `now + wait`. There is no leading-edge delivery.
#[derive(Debug)]
pub struct Debounce<T> {
    wait: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debounce<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Record a call, resetting the timer.
    pub fn call(&mut self, now: Instant, value: T) {
        self.pending = Some((now + self.wait, value));
    }

    /// Take the pending value if its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }

    /// Drop the pending value without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_burst_fires_once_after_last_call() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new(ms(300));

        debounce.call(t0, "g");
        debounce.call(t0 + ms(50), "gr");
        debounce.call(t0 + ms(100), "gri");

        assert_eq!(debounce.poll(t0 + ms(300)), None);
        assert_eq!(debounce.poll(t0 + ms(399)), None);
        assert_eq!(debounce.poll(t0 + ms(400)), Some("gri"));
        // Delivered once only
        assert_eq!(debounce.poll(t0 + ms(1000)), None);
    }

    #[test]
    fn test_late_call_resets_deadline() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new(ms(300));

        debounce.call(t0, 1);
        debounce.call(t0 + ms(100), 2);
        debounce.call(t0 + ms(300), 3);

        assert_eq!(debounce.poll(t0 + ms(400)), None);
        assert_eq!(debounce.poll(t0 + ms(599)), None);
        assert_eq!(debounce.poll(t0 + ms(600)), Some(3));
    }

    #[test]
    fn test_cancel_drops_pending_value() {
        let t0 = Instant::now();
        let mut debounce = Debounce::new(ms(10));
        debounce.call(t0, ());
        debounce.cancel();
        assert_eq!(debounce.poll(t0 + ms(50)), None);
    }
}
