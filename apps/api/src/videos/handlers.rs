use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::videos::{Video, VIDEO_LIMIT};

#[derive(Debug, Deserialize)]
pub struct VideoQuery {
    pub topic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VideoListResponse {
    pub videos: Vec<Video>,
}

/// GET /recommend_videos?topic=...
pub async fn handle_recommend_videos(
    State(state): State<AppState>,
    Query(params): Query<VideoQuery>,
) -> Result<Json<VideoListResponse>, AppError> {
    let topic = params
        .topic
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Please provide a topic parameter".to_string()))?;

    let search = state.videos.as_ref().ok_or_else(|| {
        AppError::Unavailable("Video recommendations are not configured".to_string())
    })?;

    let videos = search
        .search(topic.trim(), VIDEO_LIMIT)
        .await
        .map_err(|e| AppError::Upstream(format!("Video search failed: {e}")))?;

    Ok(Json(VideoListResponse { videos }))
}
