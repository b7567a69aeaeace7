use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::interpreter::AnalysisResult;
use crate::analysis::service::analyze_resume;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description_text: String,
}

/// POST /analyze/
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    if req.resume_text.trim().is_empty() || req.job_description_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume text and job description text cannot be empty.".to_string(),
        ));
    }

    let llm = state.llm()?;
    let result = analyze_resume(llm, &req.resume_text, &req.job_description_text).await?;
    Ok(Json(result))
}
