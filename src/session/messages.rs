//! Session status lines printed to the terminal

pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone)]
pub enum SessionMessage {
    Info(String),
    Success(String),
}

impl SessionMessage {
    pub fn print(&self) {
        match self {
            Self::Info(msg) => println!("{}[INFO]{} {}", COLOR_INFO, COLOR_RESET, msg),
            Self::Success(msg) => println!("{}[SUCCESS]{} {}", COLOR_SUCCESS, COLOR_RESET, msg),
        }
    }
}

pub fn print_session_starting(api_url: &str, snapshot: &std::path::Path) {
    SessionMessage::Info(format!(
        "Watching {} and writing {} (type `help` for commands)",
        api_url,
        snapshot.display()
    ))
    .print();
}

pub fn print_session_shutdown() {
    SessionMessage::Info("Shutting down...".to_string()).print();
}

pub fn print_written(what: &str, path: &std::path::Path) {
    SessionMessage::Success(format!("{} written to {}", what, path.display())).print();
}
