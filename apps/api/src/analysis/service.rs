//! Analysis pipeline: prompt → LLM → `interpret`.

use tracing::info;

use crate::analysis::interpreter::{interpret, AnalysisResult};
use crate::analysis::prompts::{
    ANALYSIS_MAX_TOKENS, ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM, ANALYSIS_TEMPERATURE,
};
use crate::errors::AppError;
use crate::llm_client::{fill_template, CompletionProvider, CompletionRequest};

pub fn build_analysis_request(resume_text: &str, job_description: &str) -> CompletionRequest {
    CompletionRequest {
        system: ANALYSIS_SYSTEM.to_string(),
        user: fill_template(
            ANALYSIS_PROMPT_TEMPLATE,
            &[("job_description", job_description), ("resume", resume_text)],
        ),
        temperature: ANALYSIS_TEMPERATURE,
        max_tokens: ANALYSIS_MAX_TOKENS,
    }
}

/// Scores a resume against a job description.
pub async fn analyze_resume(
    llm: &dyn CompletionProvider,
    resume_text: &str,
    job_description: &str,
) -> Result<AnalysisResult, AppError> {
    info!(
        "Analyzing resume ({} chars) against job description ({} chars)",
        resume_text.len(),
        job_description.len()
    );

    let request = build_analysis_request(resume_text, job_description);
    let reply = llm
        .complete(&request)
        .await
        .map_err(|e| AppError::Llm(format!("Error analyzing resume: {e}")))?;

    let result = interpret(&reply);
    info!(
        "Analysis parsed: score={}, matched={}, missing={}",
        result.compatibility_score,
        result.matched_keywords.len(),
        result.missing_keywords.len()
    );
    Ok(result)
}
