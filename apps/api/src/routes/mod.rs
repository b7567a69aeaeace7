pub mod download;
pub mod health;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::enhancement::handlers::handle_enhance_resume;
use crate::rate_limit::enforce_rate_limit;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/analyze/", post(handle_analyze))
        .route("/enhance-resume/", post(handle_enhance_resume))
        .route(
            "/download-pdf/:filename",
            get(download::handle_download_pdf),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            enforce_rate_limit,
        ))
        .with_state(state)
}
