//! Leading-edge throttling driven by explicit instants

use std::time::{Duration, Instant};

/// Lets the first call through, then drops calls until `limit` has elapsed.
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    blocked_until: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            blocked_until: None,
        }
    }

    /// Returns true if the call at `now` should run.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        if let Some(until) = self.blocked_until {
            if now < until {
                return false;
            }
        }
        self.blocked_until = Some(now + self.limit);
        true
    }

    /// Time left before the next call is allowed.
    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.blocked_until
            .map(|until| until.saturating_duration_since(now))
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_drops_calls_inside_window() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(100));

        let fired: Vec<bool> = [0, 10, 50]
            .iter()
            .map(|&t| throttle.try_acquire(t0 + ms(t)))
            .collect();
        assert_eq!(fired, vec![true, false, false]);

        assert!(throttle.try_acquire(t0 + ms(150)));
    }

    #[test]
    fn test_dropped_calls_do_not_extend_window() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(ms(100));

        assert!(throttle.try_acquire(t0));
        assert!(!throttle.try_acquire(t0 + ms(99)));
        assert_eq!(throttle.time_until_next(t0 + ms(99)), ms(1));
        assert!(throttle.try_acquire(t0 + ms(100)));
    }
}
