//! Career roadmap generation. The model reply is forwarded as-is; nothing is parsed.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{CompletionProvider, Sampling};

pub mod handlers;
pub mod prompts;

use prompts::{build_roadmap_prompt, ROADMAP_SYSTEM};

pub async fn generate_roadmap(
    role: &str,
    llm: &dyn CompletionProvider,
) -> Result<String, AppError> {
    let prompt = build_roadmap_prompt(role);
    let roadmap = llm
        .complete(ROADMAP_SYSTEM, &prompt, Sampling::ROADMAP)
        .await
        .map_err(|e| AppError::Llm(format!("Roadmap generation failed: {e}")))?;

    info!(role, chars = roadmap.len(), "Roadmap generated");
    Ok(roadmap)
}
