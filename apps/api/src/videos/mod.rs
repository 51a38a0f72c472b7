//! Video recommendations via the YouTube Data API v3 search endpoint.
//!
//! `AppState` carries an optional `Arc<dyn VideoSearch>`; it is `None` when no
//! `YOUTUBE_API_KEY` is configured.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod handlers;

const YOUTUBE_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Number of videos returned per recommendation.
pub const VIDEO_LIMIT: u32 = 5;

#[derive(Debug, Error)]
pub enum VideoSearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("YouTube API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    pub title: String,
    pub url: String,
}

#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search(&self, topic: &str, limit: u32) -> Result<Vec<Video>, VideoSearchError>;
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
}

impl SearchResponse {
    /// Keeps only items that resolve to a video (channels and playlists carry no `videoId`).
    fn into_videos(self) -> Vec<Video> {
        self.items
            .into_iter()
            .filter_map(|item| {
                item.id.video_id.map(|id| Video {
                    title: item.snippet.title,
                    url: format!("{YOUTUBE_WATCH_URL}{id}"),
                })
            })
            .collect()
    }
}

#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(api_key: String) -> Result<Self, VideoSearchError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key,
        })
    }
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    async fn search(&self, topic: &str, limit: u32) -> Result<Vec<Video>, VideoSearchError> {
        let limit = limit.to_string();
        let response = self
            .client
            .get(YOUTUBE_SEARCH_URL)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", limit.as_str()),
                ("q", topic),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(VideoSearchError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let videos = response.json::<SearchResponse>().await?.into_videos();
        debug!(topic, count = videos.len(), "YouTube search succeeded");
        Ok(videos)
    }
}
