//! Dashboard API Client
//!
//! A client for the bot's web interface API, fetching the stats, video and user
//! listings the dashboard renders.

use crate::api::DashboardApi;
use crate::api::error::ApiError;
use crate::api::types::{ApiResponse, StatsSnapshot, UserRecord, VideoRecord};
use crate::consts::dashboard_consts::endpoints;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with dashboard version
const USER_AGENT: &str = concat!("bot-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_body(status, &body)
    }
}

/// Decode a response body, honoring the `{"error": ...}` envelope.
///
/// The envelope wins over the status code: the backend sends it with HTTP 500,
/// but a 200 carrying it is still a failure.
pub(crate) fn decode_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let success = (200..300).contains(&status);
    match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(ApiResponse::Failure { error }) => Err(ApiError::Backend {
            status,
            message: error,
        }),
        Ok(ApiResponse::Success(payload)) if success => Ok(payload),
        Ok(ApiResponse::Success(_)) => Err(ApiError::Http {
            status,
            message: body.to_string(),
        }),
        Err(_) if !success => Err(ApiError::Http {
            status,
            message: body.to_string(),
        }),
        Err(e) => Err(ApiError::Decode(e)),
    }
}

#[async_trait::async_trait]
impl DashboardApi for ApiClient {
    async fn fetch_stats(&self) -> Result<StatsSnapshot, ApiError> {
        self.get_request(endpoints::STATS).await
    }

    async fn fetch_videos(&self) -> Result<Vec<VideoRecord>, ApiError> {
        self.get_request(endpoints::VIDEOS).await
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.get_request(endpoints::USERS).await
    }

    async fn fetch_video(&self, video_id: i64) -> Result<VideoRecord, ApiError> {
        self.get_request(&endpoints::video(video_id)).await
    }
}
