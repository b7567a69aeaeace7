//! Response interpreter. Turns the free-form analysis reply into typed fields.
//!
//! The model is asked to emit four literal markers (`Score: N%`, `Summary:`,
//! `Matched Keywords:`, `Missing Keywords:`). Parsing is anchored on those
//! markers and never fails: any field that cannot be located keeps its default.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

const SUMMARY_MARKER: &str = "Summary:";
const MATCHED_MARKER: &str = "Matched Keywords:";
const MISSING_MARKER: &str = "Missing Keywords:";

/// Returned as `improvement_summary` when no `Summary:` marker is present.
pub const FALLBACK_SUMMARY: &str = "Could not parse improvement suggestions from AI response.";

static SCORE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Score:\s*(\d+(?:\.\d+)?)\s*%").expect("score pattern is a valid regex")
});

/// Structured view of one analysis reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub compatibility_score: f64,
    pub improvement_summary: String,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            compatibility_score: 0.0,
            improvement_summary: FALLBACK_SUMMARY.to_string(),
            matched_keywords: Vec::new(),
            missing_keywords: Vec::new(),
        }
    }
}

/// Interprets an analysis reply. Total: always returns a best-effort result.
pub fn interpret(text: &str) -> AnalysisResult {
    let mut result = AnalysisResult::default();

    if let Some(score) = parse_score(text) {
        result.compatibility_score = score;
    }
    if let Some(summary) = parse_summary(text) {
        result.improvement_summary = summary;
    }
    result.matched_keywords = keyword_section(text, MATCHED_MARKER, Some(MISSING_MARKER))
        .map(collect_keywords)
        .unwrap_or_default();
    result.missing_keywords = keyword_section(text, MISSING_MARKER, None)
        .map(collect_keywords)
        .unwrap_or_default();

    result
}

/// First `Score: N%` occurrence, if its number parses.
fn parse_score(text: &str) -> Option<f64> {
    let Some(captures) = SCORE_PATTERN.captures(text) else {
        warn!("Could not find 'Score:' pattern in analysis response");
        return None;
    };

    let raw = captures.get(1)?.as_str();
    match raw.parse::<f64>() {
        Ok(score) => Some(score),
        Err(e) => {
            warn!("Could not convert score '{raw}' to a number: {e}");
            None
        }
    }
}

/// Everything between `Summary:` and `Matched Keywords:`, non-blank lines only.
fn parse_summary(text: &str) -> Option<String> {
    let (_, after) = text.split_once(SUMMARY_MARKER)?;
    let slice = after
        .split_once(MATCHED_MARKER)
        .map_or(after, |(head, _)| head)
        .trim();

    // Dash bullets and plain lines are both kept: every non-blank line survives.
    let lines: Vec<&str> = slice
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('-') || !line.is_empty())
        .collect();

    let summary = if lines.is_empty() {
        slice.to_string()
    } else {
        lines.join("\n")
    };

    Some(summary.trim().to_string())
}

/// Text after `start` up to the first `end` marker (or end of text).
fn keyword_section<'a>(text: &'a str, start: &str, end: Option<&str>) -> Option<&'a str> {
    let (_, after) = text.split_once(start)?;
    let section = end
        .and_then(|marker| after.split_once(marker))
        .map_or(after, |(head, _)| head);
    Some(section)
}

/// Dash-prefixed lines with the dash and following whitespace removed.
/// A bare `-` yields an empty keyword.
fn collect_keywords(section: &str) -> Vec<String> {
    section
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('-'))
        .map(|line| line.trim_start_matches('-').trim())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = "\
Score: 72.5%
Score Breakdown:
- Required Skills: 20/25 points
- Preferred Skills: 9/15 points

Summary:
- Quantify the migration project with latency numbers
- Mention Kubernetes explicitly
Move the skills section above education

Matched Keywords:
- Rust
- PostgreSQL
- gRPC

Missing Keywords:
- Kubernetes
- Terraform
";

    #[test]
    fn test_interpret_reference_example() {
        let result = interpret(
            "Score: 87%\nSummary:\n- Add metrics\nMatched Keywords:\n- Python\nMissing Keywords:\n- Go",
        );
        assert_eq!(
            result,
            AnalysisResult {
                compatibility_score: 87.0,
                improvement_summary: "- Add metrics".to_string(),
                matched_keywords: vec!["Python".to_string()],
                missing_keywords: vec!["Go".to_string()],
            }
        );
    }

    #[test]
    fn test_interpret_empty_text_returns_defaults() {
        let result = interpret("");
        assert_eq!(result.compatibility_score, 0.0);
        assert_eq!(result.improvement_summary, FALLBACK_SUMMARY);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_interpret_full_response() {
        let result = interpret(FULL_RESPONSE);
        assert!((result.compatibility_score - 72.5).abs() < f64::EPSILON);
        assert_eq!(
            result.improvement_summary,
            "- Quantify the migration project with latency numbers\n\
             - Mention Kubernetes explicitly\n\
             Move the skills section above education"
        );
        assert_eq!(result.matched_keywords, vec!["Rust", "PostgreSQL", "gRPC"]);
        assert_eq!(result.missing_keywords, vec!["Kubernetes", "Terraform"]);
    }

    #[test]
    fn test_interpret_is_repeatable() {
        assert_eq!(interpret(FULL_RESPONSE), interpret(FULL_RESPONSE));
    }

    #[test]
    fn test_score_uses_first_occurrence() {
        let result = interpret("Score: 40%\nlater Score: 90%");
        assert_eq!(result.compatibility_score, 40.0);
    }

    #[test]
    fn test_score_allows_whitespace_before_percent() {
        assert_eq!(interpret("Score:   65 %").compatibility_score, 65.0);
    }

    #[test]
    fn test_score_without_percent_is_ignored() {
        assert_eq!(interpret("Score: 65 out of 100").compatibility_score, 0.0);
    }

    #[test]
    fn test_score_above_hundred_is_kept() {
        assert_eq!(interpret("Score: 120%").compatibility_score, 120.0);
    }

    #[test]
    fn test_summary_without_matched_marker_takes_remainder() {
        let result = interpret("Summary:\n- Tighten the summary\n- Add a projects section\n");
        assert_eq!(
            result.improvement_summary,
            "- Tighten the summary\n- Add a projects section"
        );
    }

    #[test]
    fn test_summary_marker_with_no_content_is_empty() {
        let result = interpret("Summary:\n\nMatched Keywords:\n- Go");
        assert_eq!(result.improvement_summary, "");
        assert_eq!(result.matched_keywords, vec!["Go"]);
    }

    #[test]
    fn test_summary_lines_are_trimmed() {
        let result = interpret("Summary:\n    - indented bullet   \n\tplain line\n");
        assert_eq!(result.improvement_summary, "- indented bullet\nplain line");
    }

    #[test]
    fn test_matched_keywords_without_missing_marker_run_to_end() {
        let result = interpret("Matched Keywords:\n- Docker\n- AWS\n");
        assert_eq!(result.matched_keywords, vec!["Docker", "AWS"]);
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_keyword_lines_without_dash_are_skipped() {
        let result = interpret("Matched Keywords:\nnone of these\n- Rust\n* Go\n");
        assert_eq!(result.matched_keywords, vec!["Rust"]);
    }

    #[test]
    fn test_keyword_keeps_inner_hyphens() {
        let result = interpret("Missing Keywords:\n-   CI/CD\n- state-of-the-art tooling\n");
        assert_eq!(
            result.missing_keywords,
            vec!["CI/CD", "state-of-the-art tooling"]
        );
    }

    #[test]
    fn test_bare_dash_keyword_is_kept_empty() {
        let result = interpret("Matched Keywords:\n- Rust\n-\n- Go\nMissing Keywords:\n  -  \n");
        assert_eq!(result.matched_keywords, vec!["Rust", "", "Go"]);
        assert_eq!(result.missing_keywords, vec![""]);
    }

    #[test]
    fn test_keywords_preserve_order_and_duplicates() {
        let result = interpret("Missing Keywords:\n- Go\n- Rust\n- Go\n");
        assert_eq!(result.missing_keywords, vec!["Go", "Rust", "Go"]);
    }

    #[test]
    fn test_markers_in_any_order_do_not_panic() {
        let result = interpret("Missing Keywords:\n- A\nMatched Keywords:\n- B\nSummary:\nScore: x%");
        assert_eq!(result.compatibility_score, 0.0);
        assert_eq!(result.matched_keywords, vec!["B"]);
        assert_eq!(result.missing_keywords, vec!["A", "B"]);
        assert_eq!(result.improvement_summary, "Score: x%");
    }

    #[test]
    fn test_analysis_result_serializes_with_snake_case_fields() {
        let json = serde_json::to_value(interpret("Score: 50%")).unwrap();
        assert_eq!(json["compatibility_score"], 50.0);
        assert!(json["matched_keywords"].as_array().unwrap().is_empty());
        assert_eq!(json["improvement_summary"], FALLBACK_SUMMARY);
    }
}
