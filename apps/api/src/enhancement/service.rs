//! Enhancement pipeline: rewrite → summarize → format → render → store.

use tracing::{info, warn};

use crate::enhancement::prompts::{
    ENHANCE_MAX_TOKENS, ENHANCE_PROMPT_TEMPLATE, ENHANCE_SYSTEM, ENHANCE_TEMPERATURE,
    FALLBACK_IMPROVEMENT_SUMMARY, IMPROVEMENT_CONTEXT_TEMPLATE, SUMMARY_MAX_TOKENS,
    SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM, SUMMARY_TEMPERATURE,
};
use crate::errors::AppError;
use crate::formatter::{format_resume, Header};
use crate::llm_client::{fill_template, CompletionProvider, CompletionRequest};
use crate::render::storage::PdfStorage;
use crate::render::PdfRenderer;

/// Everything needed to produce one enhanced PDF.
#[derive(Debug, Clone)]
pub struct EnhancementInput<'a> {
    pub resume_text: &'a str,
    pub job_description: &'a str,
    pub improvement_suggestions: Option<&'a str>,
    pub header: Header,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementOutcome {
    pub filename: String,
    pub improvement_summary: String,
}

pub fn build_enhance_request(
    resume_text: &str,
    job_description: &str,
    improvement_suggestions: Option<&str>,
) -> CompletionRequest {
    let improvement_context = improvement_suggestions
        .filter(|s| !s.trim().is_empty())
        .map(|s| fill_template(IMPROVEMENT_CONTEXT_TEMPLATE, &[("improvement_suggestions", s)]))
        .unwrap_or_default();

    CompletionRequest {
        system: ENHANCE_SYSTEM.to_string(),
        user: fill_template(
            ENHANCE_PROMPT_TEMPLATE,
            &[
                ("job_description", job_description),
                ("resume", resume_text),
                ("improvement_context", improvement_context.as_str()),
            ],
        ),
        temperature: ENHANCE_TEMPERATURE,
        max_tokens: ENHANCE_MAX_TOKENS,
    }
}

pub fn build_summary_request(
    original_resume: &str,
    enhanced_resume: &str,
    job_description: &str,
) -> CompletionRequest {
    CompletionRequest {
        system: SUMMARY_SYSTEM.to_string(),
        user: fill_template(
            SUMMARY_PROMPT_TEMPLATE,
            &[
                ("job_description", job_description),
                ("original_resume", original_resume),
                ("enhanced_resume", enhanced_resume),
            ],
        ),
        temperature: SUMMARY_TEMPERATURE,
        max_tokens: SUMMARY_MAX_TOKENS,
    }
}

/// Rewrites the resume for the job description. The reply is trimmed.
pub async fn enhance_resume(
    llm: &dyn CompletionProvider,
    resume_text: &str,
    job_description: &str,
    improvement_suggestions: Option<&str>,
) -> Result<String, AppError> {
    let request = build_enhance_request(resume_text, job_description, improvement_suggestions);
    let reply = llm
        .complete(&request)
        .await
        .map_err(|e| AppError::Llm(format!("Error enhancing resume: {e}")))?;
    Ok(reply.trim().to_string())
}

/// Explains what changed between the two versions. Never fails: any LLM
/// error yields the fixed fallback summary.
pub async fn summarize_improvements(
    llm: &dyn CompletionProvider,
    original_resume: &str,
    enhanced_resume: &str,
    job_description: &str,
) -> String {
    let request = build_summary_request(original_resume, enhanced_resume, job_description);
    match llm.complete(&request).await {
        Ok(summary) => summary,
        Err(e) => {
            warn!("Error generating improvement summary, using fallback: {e}");
            FALLBACK_IMPROVEMENT_SUMMARY.to_string()
        }
    }
}

pub async fn run_enhancement(
    llm: &dyn CompletionProvider,
    renderer: &dyn PdfRenderer,
    storage: &PdfStorage,
    input: EnhancementInput<'_>,
) -> Result<EnhancementOutcome, AppError> {
    info!(
        "Enhancing resume for {:?} ({} chars)",
        input.header.name,
        input.resume_text.len()
    );

    let enhanced = enhance_resume(
        llm,
        input.resume_text,
        input.job_description,
        input.improvement_suggestions,
    )
    .await?;

    let improvement_summary =
        summarize_improvements(llm, input.resume_text, &enhanced, input.job_description).await;

    let html = format_resume(&enhanced, input.header);
    let pdf = renderer
        .render(&html)
        .await
        .map_err(|e| AppError::Render(e.to_string()))?;
    let filename = storage.save(&pdf).await?;

    info!("Enhanced resume stored as {filename}");
    Ok(EnhancementOutcome {
        filename,
        improvement_summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{EchoRenderer, FailingProvider, FailingRenderer, ScriptedProvider};

    const ENHANCED: &str = "Professional Summary:\nBackend engineer.\n\nSkills:\n• Languages: Rust, Go";

    fn input<'a>(suggestions: Option<&'a str>) -> EnhancementInput<'a> {
        EnhancementInput {
            resume_text: "old resume",
            job_description: "Rust role",
            improvement_suggestions: suggestions,
            header: Header::new("Jane Doe", "jane@example.com | 555-0100 | Berlin"),
        }
    }

    #[test]
    fn test_enhance_request_without_suggestions() {
        let request = build_enhance_request("RESUME", "JD", None);
        assert!(request.user.contains("**Original Resume:**\n```\nRESUME\n```"));
        assert!(request.user.contains("**Job Description:**\n```\nJD\n```"));
        assert!(!request.user.contains("Additionally"));
        assert!(!request.user.contains("{improvement_context}"));
        assert_eq!(request.max_tokens, 4000);
    }

    #[test]
    fn test_enhance_request_with_suggestions() {
        let request = build_enhance_request("RESUME", "JD", Some("- Mention Kubernetes"));
        assert!(request
            .user
            .contains("address these improvement suggestions in your enhancement:\n- Mention Kubernetes"));
    }

    #[test]
    fn test_blank_suggestions_are_ignored() {
        let request = build_enhance_request("RESUME", "JD", Some("   "));
        assert!(!request.user.contains("Additionally"));
    }

    #[test]
    fn test_enhance_request_does_not_expand_placeholders_in_inputs() {
        let request = build_enhance_request(
            "MY RESUME {improvement_context}",
            "Paste your {resume} here",
            Some("- Lead with {job_description}"),
        );
        assert!(request.user.contains("```\nPaste your {resume} here\n```"));
        assert!(request.user.contains("```\nMY RESUME {improvement_context}\n```"));
        assert!(request.user.contains("enhancement:\n- Lead with {job_description}\n"));
        assert_eq!(request.user.matches("MY RESUME").count(), 1);
        assert_eq!(request.user.matches("Additionally").count(), 1);
    }

    #[test]
    fn test_summary_request_embeds_all_three_texts() {
        let request = build_summary_request("OLD", "NEW", "JD");
        assert!(request.user.contains("**Original Resume:**\n```\nOLD\n```"));
        assert!(request.user.contains("**Enhanced Resume:**\n```\nNEW\n```"));
        assert!(request.user.contains("**Job Description:**\n```\nJD\n```"));
        assert_eq!(request.max_tokens, 1500);
    }

    #[tokio::test]
    async fn test_enhance_resume_trims_reply() {
        let llm = ScriptedProvider::new(["\n\n  Skills:\n• Rust  \n"]);
        let text = enhance_resume(&llm, "r", "jd", None).await.unwrap();
        assert_eq!(text, "Skills:\n• Rust");
    }

    #[tokio::test]
    async fn test_summary_falls_back_on_failure() {
        let summary = summarize_improvements(&FailingProvider, "a", "b", "c").await;
        assert_eq!(summary, FALLBACK_IMPROVEMENT_SUMMARY);
    }

    #[tokio::test]
    async fn test_run_enhancement_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let storage = PdfStorage::new(dir.path());
        let llm = ScriptedProvider::new([ENHANCED, "## Improvement Summary\n- Added Go"]);
        let renderer = EchoRenderer::default();

        let outcome = run_enhancement(&llm, &renderer, &storage, input(Some("- Add Go")))
            .await
            .unwrap();

        assert_eq!(outcome.improvement_summary, "## Improvement Summary\n- Added Go");
        assert!(outcome.filename.starts_with("enhanced_resume_"));

        let requests = llm.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].user.contains("- Add Go"));
        assert!(requests[1].user.contains(ENHANCED));

        let html = renderer.last_html().unwrap();
        assert!(html.contains("<title>Professional Resume - Jane Doe</title>"));
        assert!(html.contains("Backend engineer."));

        let stored = storage.read(&outcome.filename).await.unwrap();
        assert!(stored.starts_with(b"%PDF-1.7"));
    }

    #[tokio::test]
    async fn test_run_enhancement_uses_fallback_summary() {
        let dir = tempfile::tempdir().unwrap();
        let storage = PdfStorage::new(dir.path());
        // second call finds the queue empty and fails
        let llm = ScriptedProvider::new([ENHANCED]);

        let outcome = run_enhancement(&llm, &EchoRenderer::default(), &storage, input(None))
            .await
            .unwrap();
        assert_eq!(outcome.improvement_summary, FALLBACK_IMPROVEMENT_SUMMARY);
    }

    #[tokio::test]
    async fn test_run_enhancement_fails_when_rewrite_fails() {
        let dir = tempfile::tempdir().unwrap();
        let storage = PdfStorage::new(dir.path());
        let err = run_enhancement(&FailingProvider, &EchoRenderer::default(), &storage, input(None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(msg) if msg.starts_with("Error enhancing resume")));
    }

    #[tokio::test]
    async fn test_run_enhancement_surfaces_render_failure() {
        let dir = tempfile::tempdir().unwrap();
        let storage = PdfStorage::new(dir.path());
        let llm = ScriptedProvider::new([ENHANCED, "summary"]);
        let err = run_enhancement(&llm, &FailingRenderer, &storage, input(None))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Render(_)));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
