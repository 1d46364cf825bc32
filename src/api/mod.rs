use crate::api::error::ApiError;
use crate::api::types::{StatsSnapshot, UserRecord, VideoRecord};

pub mod client;
pub use client::ApiClient;
pub mod error;
pub mod error_handler;
pub mod types;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait DashboardApi: Send + Sync {
    /// Aggregate counters for the header and charts.
    async fn fetch_stats(&self) -> Result<StatsSnapshot, ApiError>;

    /// Videos, newest first.
    async fn fetch_videos(&self) -> Result<Vec<VideoRecord>, ApiError>;

    /// Users with their video activity.
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError>;

    /// Details for a single video.
    async fn fetch_video(&self, video_id: i64) -> Result<VideoRecord, ApiError>;
}
