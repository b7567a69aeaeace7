//! In-process doubles for the LLM and PDF boundaries.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use crate::config::Config;
use crate::llm_client::{CompletionProvider, CompletionRequest, LlmError};
use crate::rate_limit::RateLimiter;
use crate::render::storage::PdfStorage;
use crate::render::{PdfRenderer, RenderError};
use crate::state::AppState;

/// Answers requests from a fixed queue of replies, recording every request.
/// Once the queue is exhausted each call fails with `EmptyContent`.
#[derive(Default)]
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    pub fn new<'a>(replies: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(String::from).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(LlmError::EmptyContent)
    }
}

pub struct FailingProvider;

#[async_trait]
impl CompletionProvider for FailingProvider {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        })
    }
}

/// Returns the HTML it was given, prefixed so it looks like a PDF, and keeps
/// the last document for inspection.
#[derive(Default)]
pub struct EchoRenderer {
    last_html: Mutex<Option<String>>,
}

impl EchoRenderer {
    pub fn last_html(&self) -> Option<String> {
        self.last_html.lock().unwrap().clone()
    }
}

#[async_trait]
impl PdfRenderer for EchoRenderer {
    async fn render(&self, html: &str) -> Result<Bytes, RenderError> {
        *self.last_html.lock().unwrap() = Some(html.to_string());
        Ok(Bytes::from(format!("%PDF-1.7\n{html}")))
    }
}

pub struct FailingRenderer;

#[async_trait]
impl PdfRenderer for FailingRenderer {
    async fn render(&self, _html: &str) -> Result<Bytes, RenderError> {
        Err(RenderError::Api {
            status: 401,
            message: "Unauthorized".to_string(),
        })
    }
}

pub fn test_config(pdf_output_dir: &std::path::Path) -> Config {
    Config {
        openai_api_key: None,
        openai_model: "gpt-4".to_string(),
        docraptor_api_key: None,
        docraptor_test_mode: true,
        base_backend_url: "http://api.test".to_string(),
        pdf_output_dir: pdf_output_dir.to_path_buf(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        rate_limit_per_minute: 100,
        port: 0,
        rust_log: "debug".to_string(),
    }
}

pub fn test_state(
    pdf_output_dir: &std::path::Path,
    llm: Option<Arc<dyn CompletionProvider>>,
    renderer: Option<Arc<dyn PdfRenderer>>,
) -> AppState {
    let config = test_config(pdf_output_dir);
    AppState {
        llm,
        renderer,
        storage: PdfStorage::new(pdf_output_dir),
        limiter: Arc::new(RateLimiter::per_minute(config.rate_limit_per_minute)),
        config,
    }
}
