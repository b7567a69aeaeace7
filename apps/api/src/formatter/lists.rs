//! Flat item lists for languages, certifications and interests.

use crate::formatter::{BULLET, DASH};

/// Flattens a section body into comma-separated items, in source order.
pub fn parse_items(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.strip_prefix(BULLET)
                .or_else(|| line.strip_prefix(DASH))
                .unwrap_or(line)
        })
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_markers_flatten() {
        assert_eq!(
            parse_items("• Hiking, Chess\n- Reading"),
            vec!["Hiking", "Chess", "Reading"]
        );
    }

    #[test]
    fn test_unmarked_lines_are_split_too() {
        assert_eq!(
            parse_items("English (Native), German (B2)"),
            vec!["English (Native)", "German (B2)"]
        );
    }

    #[test]
    fn test_only_one_leading_marker_is_removed() {
        assert_eq!(parse_items("• - AWS Certified"), vec!["- AWS Certified"]);
    }

    #[test]
    fn test_empty_fragments_are_skipped() {
        assert_eq!(parse_items("•  Chess,, Go ,\n\n"), vec!["Chess", "Go"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        assert_eq!(parse_items("• Go\n• Go"), vec!["Go", "Go"]);
    }
}
