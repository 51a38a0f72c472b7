use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;
use crate::videos::VideoSearch;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend, built once in `main`. Default: `LlmClient`.
    pub llm: Arc<dyn CompletionProvider>,
    /// `None` when no YouTube API key is configured.
    pub videos: Option<Arc<dyn VideoSearch>>,
    pub config: Config,
}
