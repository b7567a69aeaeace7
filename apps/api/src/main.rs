mod analysis;
mod config;
mod cors;
mod enhancement;
mod errors;
mod formatter;
mod llm_client;
mod rate_limit;
mod render;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::cors::cors_layer;
use crate::llm_client::{CompletionProvider, LlmClient};
use crate::rate_limit::RateLimiter;
use crate::render::storage::PdfStorage;
use crate::render::{DocRaptorRenderer, PdfRenderer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    let llm: Option<Arc<dyn CompletionProvider>> = match &config.openai_api_key {
        Some(key) => {
            let client = LlmClient::new(key.clone(), config.openai_model.clone())?;
            info!("LLM client initialized (model: {})", client.model());
            Some(Arc::new(client))
        }
        None => {
            warn!("OPENAI_API_KEY is not set; analysis and enhancement will return 503");
            None
        }
    };

    let renderer: Option<Arc<dyn PdfRenderer>> = match &config.docraptor_api_key {
        Some(key) => {
            let renderer = DocRaptorRenderer::new(key.clone(), config.docraptor_test_mode)?;
            info!(
                "PDF renderer initialized (test mode: {})",
                config.docraptor_test_mode
            );
            Some(Arc::new(renderer))
        }
        None => {
            warn!("DOCRAPTOR_API_KEY is not set; enhancement will return 503");
            None
        }
    };

    let storage = PdfStorage::new(&config.pdf_output_dir);
    storage.ensure_dir().await?;
    info!("PDF output directory: {}", storage.root().display());

    info!(
        "Rate limit: {} requests per minute per client",
        config.rate_limit_per_minute
    );

    let state = AppState {
        llm,
        renderer,
        storage,
        limiter: Arc::new(RateLimiter::per_minute(config.rate_limit_per_minute)),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
