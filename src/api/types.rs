//! Payload types returned by the dashboard API

use serde::{Deserialize, Deserializer, Serialize};

/// Aggregate counters for the dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_videos: u64,
    pub total_users: u64,
    pub total_chats: u64,
    pub videos_today: u64,
    pub videos_this_week: u64,
    pub videos_this_month: u64,
}

/// A video message as listed by `/api/videos` and detailed by `/api/video/<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    /// Size in bytes; the backend reports `null` for unknown sizes.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub file_size: u64,
    pub chat_id: i64,
    pub created_at: String,
    #[serde(default)]
    pub file_id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Length in seconds.
    #[serde(default)]
    pub duration: Option<u64>,
}

/// A bot user with aggregated video activity, as listed by `/api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub video_count: u64,
    #[serde(default)]
    pub last_video_date: Option<String>,
    pub created_at: String,
}

impl UserRecord {
    /// True once the user has sent at least one video.
    pub fn is_active(&self) -> bool {
        self.video_count > 0
    }
}

/// Body of any API response: either the payload or an `{"error": ...}` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Failure { error: String },
    Success(T),
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

/// Treats empty strings the way a browser treats them in `a || b`.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
