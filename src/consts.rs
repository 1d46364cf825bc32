pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! Timing, endpoint and page-contract constants for the dashboard client,
    //! organized by functional area.

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    /// Polling and request timing
    pub mod polling {
        /// Interval between automatic data reloads (seconds)
        pub const POLL_INTERVAL_SECS: u64 = 30;

        /// Connect and read timeout for API requests (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;
    }

    // =============================================================================
    // INTERACTION CONFIGURATION
    // =============================================================================

    /// Input and animation timing
    pub mod interaction {
        use std::time::Duration;

        /// Quiet period before a search query is applied (milliseconds)
        pub const SEARCH_DEBOUNCE_MS: u64 = 300;

        /// Duration of the stat counter animation (milliseconds)
        pub const COUNTER_ANIMATION_MS: u64 = 1000;

        /// Frame interval used to advance animations (milliseconds)
        pub const FRAME_INTERVAL_MS: u64 = 16;

        /// Minimum interval between snapshot writes (milliseconds)
        pub const SNAPSHOT_THROTTLE_MS: u64 = 250;

        pub const fn search_debounce() -> Duration {
            Duration::from_millis(SEARCH_DEBOUNCE_MS)
        }

        pub const fn counter_animation() -> Duration {
            Duration::from_millis(COUNTER_ANIMATION_MS)
        }

        pub const fn frame_interval() -> Duration {
            Duration::from_millis(FRAME_INTERVAL_MS)
        }

        pub const fn snapshot_throttle() -> Duration {
            Duration::from_millis(SNAPSHOT_THROTTLE_MS)
        }
    }

    /// Notification lifecycle timing
    pub mod notifications {
        use std::time::Duration;

        /// Time a notification stays visible before it starts hiding (milliseconds)
        pub const AUTOHIDE_MS: u64 = 5000;

        /// Length of the hide transition before removal (milliseconds)
        pub const HIDE_TRANSITION_MS: u64 = 150;

        pub const fn autohide() -> Duration {
            Duration::from_millis(AUTOHIDE_MS)
        }

        pub const fn hide_transition() -> Duration {
            Duration::from_millis(HIDE_TRANSITION_MS)
        }
    }

    // =============================================================================
    // API CONFIGURATION
    // =============================================================================

    /// Backend endpoints
    pub mod endpoints {
        pub const STATS: &str = "api/stats";
        pub const VIDEOS: &str = "api/videos";
        pub const USERS: &str = "api/users";

        /// Endpoint for a single video's details
        pub fn video(video_id: i64) -> String {
            format!("api/video/{}", video_id)
        }
    }

    /// Default API base URL (the web interface's development server)
    pub const DEFAULT_API_URL: &str = "http://localhost:5000";

    /// Environment variable overriding the API base URL
    pub const API_URL_ENV: &str = "DASHBOARD_API_URL";

    // =============================================================================
    // PAGE CONTRACT
    // =============================================================================

    /// Chart canvas ids
    pub mod elements {
        pub const ACTIVITY_CHART: &str = "activityChart";
        pub const VIDEO_DISTRIBUTION_CHART: &str = "videoDistributionChart";
    }

    /// Labels for the three-point chart series
    pub const CHART_LABELS: [&str; 3] = ["This week", "This month", "All time"];

    /// Generic message shown when a load fails outside the per-resource guards
    pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data";
}
