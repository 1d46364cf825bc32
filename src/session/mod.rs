pub mod commands;
pub mod messages;
pub mod oneshot;
pub mod setup;
pub mod watch_mode;

pub use oneshot::{run_export, run_snapshot};
pub use setup::{SessionData, setup_session};
pub use watch_mode::run_watch_mode;
