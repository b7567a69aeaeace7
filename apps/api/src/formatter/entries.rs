//! Entry-block splitting for work experience, education and projects.
//!
//! A `•` line opens an entry; following lines are its details until the next `•`.
//! Lines before the first `•` have no entry to attach to and are dropped.

use serde::Serialize;

use crate::formatter::{strip_marker, BULLET, DASH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailKind {
    /// `-` prefixed line, rendered as a bulleted achievement.
    Achievement,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailLine {
    pub kind: DetailKind,
    pub text: String,
}

impl DetailLine {
    fn parse(line: &str) -> Self {
        if line.starts_with(DASH) {
            Self {
                kind: DetailKind::Achievement,
                text: strip_marker(line, DASH).to_string(),
            }
        } else {
            Self {
                kind: DetailKind::Plain,
                text: line.to_string(),
            }
        }
    }

    pub fn is_achievement(&self) -> bool {
        self.kind == DetailKind::Achievement
    }
}

/// One titled block: a job, a degree or a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub title: String,
    pub details: Vec<DetailLine>,
}

/// Splits a section body into entries in source order.
pub fn split_entries(body: &str) -> Vec<Entry> {
    let mut entries: Vec<Entry> = Vec::new();

    for line in body.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if line.starts_with(BULLET) {
            entries.push(Entry {
                title: strip_marker(line, BULLET).to_string(),
                details: Vec::new(),
            });
        } else if let Some(entry) = entries.last_mut() {
            entry.details.push(DetailLine::parse(line));
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn achievement(text: &str) -> DetailLine {
        DetailLine {
            kind: DetailKind::Achievement,
            text: text.to_string(),
        }
    }

    fn plain(text: &str) -> DetailLine {
        DetailLine {
            kind: DetailKind::Plain,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_work_entry_with_mixed_details() {
        let entries = split_entries("• Engineer (Corp, 2020-2022)\n- built X\nCorp\n2020-2022");
        assert_eq!(
            entries,
            vec![Entry {
                title: "Engineer (Corp, 2020-2022)".to_string(),
                details: vec![achievement("built X"), plain("Corp"), plain("2020-2022")],
            }]
        );
    }

    #[test]
    fn test_multiple_entries_keep_order() {
        let entries = split_entries(
            "• Staff Engineer\n  - Led 4 engineers\n• Senior Engineer\n  - Cut costs by 20%\n",
        );
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Staff Engineer", "Senior Engineer"]);
        assert_eq!(entries[0].details, vec![achievement("Led 4 engineers")]);
        assert_eq!(entries[1].details, vec![achievement("Cut costs by 20%")]);
    }

    #[test]
    fn test_section_without_bullet_yields_no_entries() {
        assert!(split_entries("Engineer at Corp\n- built X").is_empty());
    }

    #[test]
    fn test_lines_before_first_bullet_are_dropped() {
        let entries = split_entries("stray line\n• BSc Computer Science\nMIT\n2016");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].details, vec![plain("MIT"), plain("2016")]);
    }

    #[test]
    fn test_entry_without_details() {
        let entries = split_entries("• Open-source maintainer");
        assert_eq!(entries[0].title, "Open-source maintainer");
        assert!(entries[0].details.is_empty());
    }

    #[test]
    fn test_achievement_keeps_inner_dashes() {
        let entries = split_entries("• Ledger\n-   Built end-to-end test harness");
        assert_eq!(
            entries[0].details,
            vec![achievement("Built end-to-end test harness")]
        );
        assert!(entries[0].details[0].is_achievement());
    }
}
