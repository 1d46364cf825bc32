//! Linear integer tween used by the stat counters

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTween {
    from: u64,
    to: u64,
    started_at: Instant,
    duration: Duration,
}

impl CounterTween {
    pub fn new(from: u64, to: u64, started_at: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
        }
    }

    pub fn target(&self) -> u64 {
        self.to
    }

    /// Fraction of the animation elapsed at `now`, clamped to `[0, 1]`.
    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Displayed value at `now`, rounded half up.
    pub fn value_at(&self, now: Instant) -> u64 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        let from = self.from as f64;
        let to = self.to as f64;
        let value = (from + (to - from) * progress + 0.5).floor();
        value.clamp(from.min(to), from.max(to)) as u64
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_interpolates_linearly() {
        let t0 = Instant::now();
        let tween = CounterTween::new(0, 100, t0, ms(1000));

        assert_eq!(tween.value_at(t0), 0);
        assert_eq!(tween.value_at(t0 + ms(250)), 25);
        assert_eq!(tween.value_at(t0 + ms(500)), 50);
        assert_eq!(tween.value_at(t0 + ms(1000)), 100);
        assert!(tween.is_finished(t0 + ms(1000)));
    }

    #[test]
    fn test_never_overshoots_target() {
        let t0 = Instant::now();
        let up = CounterTween::new(3, 7, t0, ms(1000));
        let down = CounterTween::new(900, 12, t0, ms(1000));

        for step in 0..=30 {
            let now = t0 + ms(step * 50);
            assert!(up.value_at(now) <= 7);
            assert!(down.value_at(now) >= 12);
        }
        assert_eq!(down.value_at(t0 + ms(5000)), 12);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let t0 = Instant::now();
        let tween = CounterTween::new(5, 42, t0, Duration::ZERO);
        assert_eq!(tween.value_at(t0), 42);
        assert!(tween.is_finished(t0));
    }
}
