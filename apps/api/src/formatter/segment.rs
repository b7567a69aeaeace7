//! Section segmentation: one pass over the resume lines with an explicit accumulator.
//!
//! A header is a trimmed line ending in `:` that does not start with a bullet.
//! Lines before the first header belong to an implicit "professional summary".

use crate::formatter::{BULLET, DASH};

/// Section name used for free text that precedes the first header.
pub const IMPLICIT_SUMMARY: &str = "professional summary";

/// Raw section bodies keyed by lowercased header name, in first-seen order.
///
/// Unknown names are kept; only the renderer decides which names matter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sections {
    entries: Vec<(String, String)>,
}

impl Sections {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, body)| body.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A repeated header replaces the earlier body but keeps its position.
    fn insert(&mut self, name: String, body: String) {
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = body,
            None => self.entries.push((name, body)),
        }
    }
}

/// Returns the section name if `line` (already trimmed) is a header.
pub fn header_name(line: &str) -> Option<String> {
    if !line.ends_with(':') || line.starts_with(BULLET) || line.starts_with(DASH) {
        return None;
    }
    Some(line.trim_end_matches(':').trim().to_lowercase())
}

/// Splits resume text into sections. Total; an empty input yields no sections.
pub fn segment(text: &str) -> Sections {
    let mut builder = SectionBuilder::default();
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match header_name(line) {
            Some(name) => builder.open(name),
            None => builder.push(line),
        }
    }
    builder.finish()
}

#[derive(Default)]
struct SectionBuilder<'a> {
    sections: Sections,
    current: Option<String>,
    buffer: Vec<&'a str>,
}

impl<'a> SectionBuilder<'a> {
    fn open(&mut self, name: String) {
        self.flush();
        self.current = Some(name);
    }

    fn push(&mut self, line: &'a str) {
        if self.current.is_none() {
            self.current = Some(IMPLICIT_SUMMARY.to_string());
        }
        self.buffer.push(line);
    }

    /// Empty sections are dropped rather than stored with an empty body.
    fn flush(&mut self) {
        let Some(name) = self.current.take() else {
            return;
        };
        if !self.buffer.is_empty() {
            self.sections.insert(name, self.buffer.join("\n"));
            self.buffer.clear();
        }
    }

    fn finish(mut self) -> Sections {
        self.flush();
        self.sections
    }
}
