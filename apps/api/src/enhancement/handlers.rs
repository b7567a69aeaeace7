use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::enhancement::service::{run_enhancement, EnhancementInput};
use crate::errors::AppError;
use crate::formatter::{Header, SocialLinks};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnhancedResumeRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description_text: String,
    pub applicant_name: String,
    pub contact_info: String,
    pub github_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub portfolio_link: Option<String>,
    pub improvement_suggestions: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EnhancedResumeResponse {
    pub pdf_url: String,
    pub improvement_summary: String,
}

/// POST /enhance-resume/
pub async fn handle_enhance_resume(
    State(state): State<AppState>,
    Json(req): Json<EnhancedResumeRequest>,
) -> Result<Json<EnhancedResumeResponse>, AppError> {
    if req.job_description_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description text cannot be empty.".to_string(),
        ));
    }
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("Resume text cannot be empty.".to_string()));
    }

    let llm = state.llm()?;
    let renderer = state.renderer()?;

    let header = Header::new(req.applicant_name, &req.contact_info).with_links(SocialLinks::new(
        req.github_link,
        req.linkedin_link,
        req.portfolio_link,
    ));

    let outcome = run_enhancement(
        llm,
        renderer,
        &state.storage,
        EnhancementInput {
            resume_text: &req.resume_text,
            job_description: &req.job_description_text,
            improvement_suggestions: req.improvement_suggestions.as_deref(),
            header,
        },
    )
    .await?;

    Ok(Json(EnhancedResumeResponse {
        pdf_url: state.pdf_url(&outcome.filename),
        improvement_summary: outcome.improvement_summary,
    }))
}
