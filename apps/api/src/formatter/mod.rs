//! Resume formatter: plain-text resume in, styled HTML document out.
//!
//! Pipeline: `segment` splits the text into named sections, each known section is
//! parsed into its typed body (`document`), and `html` lays the result out in a
//! fixed two-column template. Every step is total; malformed text degrades to
//! fewer rendered sections, never to an error.

pub mod document;
pub mod entries;
pub mod header;
pub mod html;
pub mod lists;
pub mod segment;
pub mod skills;

pub use document::ResumeDocument;
pub use header::{Header, SocialLinks};

/// Primary bullet used for entries, skill categories and list items.
pub const BULLET: char = '•';
/// Secondary bullet used for achievements and sub-items.
pub const DASH: char = '-';

/// Builds the complete HTML document for a resume.
pub fn format_resume(resume_text: &str, header: Header) -> String {
    let document = ResumeDocument::build(resume_text, header);
    html::render(&document)
}

/// Strips every leading `marker` (and whitespace between them), then trims.
pub(crate) fn strip_marker(line: &str, marker: char) -> &str {
    line.trim_start_matches(|c: char| c == marker || c.is_whitespace())
        .trim()
}
