use anyhow::{Context, Result};

const DEFAULT_LLM_ENDPOINT: &str = "https://models.github.ai/inference";
const DEFAULT_LLM_MODEL: &str = "openai/gpt-4.1";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub llm_endpoint: String,
    pub llm_model: String,
    pub youtube_api_key: Option<String>,
    pub cors_origin: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            github_token: require_env("GITHUB_TOKEN")?,
            llm_endpoint: env_or("LLM_ENDPOINT", DEFAULT_LLM_ENDPOINT),
            llm_model: env_or("LLM_MODEL", DEFAULT_LLM_MODEL),
            youtube_api_key: std::env::var("YOUTUBE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            cors_origin: env_or("CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            github_token: "test-token".to_string(),
            llm_endpoint: DEFAULT_LLM_ENDPOINT.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            youtube_api_key: None,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
            port: 5000,
            rust_log: "debug".to_string(),
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
