//! Time-driven helpers for input handling and animation
//!
//! All of these take the current instant as an argument, so callers choose the
//! clock and tests stay deterministic.

pub mod debounce;
pub mod throttle;
pub mod tween;

pub use debounce::Debounce;
pub use throttle::Throttle;
pub use tween::CounterTween;
