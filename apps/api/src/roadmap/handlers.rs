use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::roadmap::generate_roadmap;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRoadmapRequest {
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateRoadmapResponse {
    pub roadmap: String,
}

/// POST /generate_roadmap
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Json(request): Json<GenerateRoadmapRequest>,
) -> Result<Json<GenerateRoadmapResponse>, AppError> {
    let role = request
        .role
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Please provide a role".to_string()))?;

    let roadmap = generate_roadmap(&role, state.llm.as_ref()).await?;

    Ok(Json(GenerateRoadmapResponse { roadmap }))
}
