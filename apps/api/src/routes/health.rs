use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Service banner with the public endpoint list.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Resume Analyzer API!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "analyze": "POST /analyze/ - Analyze resume against job description",
            "enhance": "POST /enhance-resume/ - Generate an enhanced resume PDF",
            "download": "GET /download-pdf/{filename} - Download generated PDF"
        }
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-analyzer-api"
    }))
}
