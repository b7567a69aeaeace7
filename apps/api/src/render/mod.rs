//! PDF rendering boundary. A finished HTML document goes out, PDF bytes come back.

pub mod storage;

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

const DOCRAPTOR_API_URL: &str = "https://api.docraptor.com/docs";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Renderer error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Converts an HTML document into PDF bytes.
///
/// Carried in `AppState` as `Arc<dyn PdfRenderer>`.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: &str) -> Result<Bytes, RenderError>;
}

#[derive(Debug, Serialize)]
struct DocumentRequest<'a> {
    #[serde(rename = "type")]
    doc_type: &'a str,
    document_content: &'a str,
    test: bool,
    prince_options: PrinceOptions<'a>,
}

#[derive(Debug, Serialize)]
struct PrinceOptions<'a> {
    media: &'a str,
    pdf_profile: &'a str,
}

/// DocRaptor client. The API key is sent as the basic-auth user name.
#[derive(Clone)]
pub struct DocRaptorRenderer {
    client: Client,
    api_key: String,
    test_mode: bool,
}

impl DocRaptorRenderer {
    pub fn new(api_key: String, test_mode: bool) -> Result<Self, RenderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            api_key,
            test_mode,
        })
    }
}

fn document_request(html: &str, test: bool) -> DocumentRequest<'_> {
    DocumentRequest {
        doc_type: "pdf",
        document_content: html,
        test,
        prince_options: PrinceOptions {
            media: "print",
            pdf_profile: "PDF/UA-1",
        },
    }
}

#[async_trait]
impl PdfRenderer for DocRaptorRenderer {
    async fn render(&self, html: &str) -> Result<Bytes, RenderError> {
        info!("Rendering PDF ({} bytes of HTML)", html.len());

        let response = self
            .client
            .post(DOCRAPTOR_API_URL)
            .basic_auth(&self.api_key, Some(""))
            .json(&document_request(html, self.test_mode))
            .send()
            .await?;

        let status = response.status();
        debug!("DocRaptor responded with {status}");

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RenderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_request_shape() {
        let json = serde_json::to_value(document_request("<html></html>", true)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "pdf",
                "document_content": "<html></html>",
                "test": true,
                "prince_options": {"media": "print", "pdf_profile": "PDF/UA-1"}
            })
        );
    }

    #[test]
    fn test_render_error_display() {
        let err = RenderError::Api {
            status: 422,
            message: "Invalid document".to_string(),
        };
        assert_eq!(err.to_string(), "Renderer error (status 422): Invalid document");
    }
}
