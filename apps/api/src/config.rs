use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODEL;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost:5174",
    "http://127.0.0.1:5174",
    "https://storage.googleapis.com",
    "https://*.storage.googleapis.com",
];

/// Application configuration loaded from environment variables.
///
/// API keys are optional: the server starts without them and the endpoints
/// that need them answer 503 instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub docraptor_api_key: Option<String>,
    pub docraptor_test_mode: bool,
    pub base_backend_url: String,
    pub pdf_output_dir: PathBuf,
    pub cors_origins: Vec<String>,
    pub rate_limit_per_minute: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_model: optional_env("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            docraptor_api_key: optional_env("DOCRAPTOR_API_KEY"),
            docraptor_test_mode: parse_env("DOCRAPTOR_TEST_MODE", false)?,
            base_backend_url: optional_env("BASE_BACKEND_URL")
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            pdf_output_dir: optional_env("PDF_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join("resume_pdfs")),
            cors_origins: optional_env("CORS_ORIGINS")
                .map(|raw| split_list(&raw))
                .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()),
            rate_limit_per_minute: parse_env("RATE_LIMIT_PER_MINUTE", 5)?,
            port: parse_env("PORT", 8000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
