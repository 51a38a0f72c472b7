pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::quiz::handlers::handle_generate_quiz;
use crate::roadmap::handlers::handle_generate_roadmap;
use crate::state::AppState;
use crate::videos::handlers::handle_recommend_videos;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate_quiz", post(handle_generate_quiz))
        .route("/generate_roadmap", post(handle_generate_roadmap))
        .route("/recommend_videos", get(handle_recommend_videos))
        .with_state(state)
}
