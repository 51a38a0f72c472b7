//! Axum route handlers for the Quiz API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::quiz::generator::generate_quiz;
use crate::quiz::model::QuizQuestion;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateQuizRequest {
    pub domain: Option<String>,
}

/// POST /generate_quiz
///
/// Generates a multiple-choice quiz for `domain`. Responds with a bare JSON array of
/// questions, which may be empty if the model reply held no valid question.
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuizRequest>,
) -> Result<Json<Vec<QuizQuestion>>, AppError> {
    let domain = request
        .domain
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing 'domain' in request body".to_string()))?;

    let quiz = generate_quiz(&domain, state.llm.as_ref()).await?;

    Ok(Json(quiz))
}
