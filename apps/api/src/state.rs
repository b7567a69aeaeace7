use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::CompletionProvider;
use crate::rate_limit::RateLimiter;
use crate::render::storage::PdfStorage;
use crate::render::PdfRenderer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// None when no OpenAI key is configured.
    pub llm: Option<Arc<dyn CompletionProvider>>,
    /// None when no DocRaptor key is configured.
    pub renderer: Option<Arc<dyn PdfRenderer>>,
    pub storage: PdfStorage,
    pub limiter: Arc<RateLimiter>,
    pub config: Config,
}

impl AppState {
    pub fn llm(&self) -> Result<&dyn CompletionProvider, AppError> {
        self.llm
            .as_deref()
            .ok_or_else(|| AppError::ServiceUnavailable("OpenAI API key is not set.".to_string()))
    }

    pub fn renderer(&self) -> Result<&dyn PdfRenderer, AppError> {
        self.renderer.as_deref().ok_or_else(|| {
            AppError::ServiceUnavailable("DocRaptor API key is not set.".to_string())
        })
    }

    /// Public download URL for a stored PDF.
    pub fn pdf_url(&self, filename: &str) -> String {
        format!("{}/download-pdf/{filename}", self.config.base_backend_url)
    }
}
