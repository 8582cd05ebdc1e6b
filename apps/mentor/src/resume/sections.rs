//! Section detection: finds a header line and collects the body under it.
//!
//! Header detection is a heuristic: resumes have no grammar, so a "header" is
//! any line starting with the section word and the body runs until the next
//! short ALL-CAPS line. It sits behind [`HeaderMatcher`] so a smarter detector
//! can replace it without touching the collector or the assembler.

use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::resume::normalize::normalize_line;

/// Maximum word count for an ALL-CAPS line to be treated as the next header.
const MAX_HEADER_WORDS: usize = 4;

/// Locates the line that introduces a section.
pub trait HeaderMatcher: Send + Sync {
    /// Returns the index of the first line after the header, or `None` if no
    /// line introduces `header`.
    fn find_body_start(&self, lines: &[&str], header: &str) -> Option<usize>;
}

/// Default matcher: `^<header>s?\b`, case-insensitive, on the left-trimmed line.
///
/// "Education", "EDUCATIONS" and "education & training" match "education";
/// "Miseducation" and "Educational" do not.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexHeaderMatcher;

impl RegexHeaderMatcher {
    fn pattern(header: &str) -> Option<Regex> {
        let source = format!(r"^{}s?\b", regex::escape(header));
        match RegexBuilder::new(&source).case_insensitive(true).build() {
            Ok(re) => Some(re),
            Err(e) => {
                warn!("Invalid header pattern for '{header}': {e}");
                None
            }
        }
    }
}

impl HeaderMatcher for RegexHeaderMatcher {
    fn find_body_start(&self, lines: &[&str], header: &str) -> Option<usize> {
        let re = Self::pattern(header)?;
        lines
            .iter()
            .position(|line| re.is_match(line.trim_start()))
            .map(|i| i + 1)
    }
}

/// True for lines like `EXPERIENCE` or `WORK HISTORY & AWARDS`: at least one
/// uppercase letter, no lowercase letters, at most four words.
pub fn is_section_break(line: &str) -> bool {
    let has_upper = line.chars().any(char::is_uppercase);
    let has_lower = line.chars().any(char::is_lowercase);
    has_upper && !has_lower && line.split_whitespace().count() <= MAX_HEADER_WORDS
}

/// Collects the raw, non-blank lines from `start` up to (not including) the
/// next section break. `None` yields nothing.
pub fn collect_body<'a>(lines: &[&'a str], start: Option<usize>) -> Vec<&'a str> {
    let Some(start) = start else {
        return Vec::new();
    };

    lines
        .iter()
        .skip(start)
        .take_while(|line| !is_section_break(line))
        .filter(|line| !line.trim().is_empty())
        .copied()
        .collect()
}

/// Raw body lines of the section introduced by `header`.
pub fn extract_raw_section<'a>(
    matcher: &dyn HeaderMatcher,
    lines: &[&'a str],
    header: &str,
) -> Vec<&'a str> {
    collect_body(lines, matcher.find_body_start(lines, header))
}

/// Normalized body lines of the section introduced by `header`.
pub fn extract_section(matcher: &dyn HeaderMatcher, lines: &[&str], header: &str) -> Vec<String> {
    extract_raw_section(matcher, lines, header)
        .into_iter()
        .map(normalize_line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(lines: &[&str], header: &str) -> Option<usize> {
        RegexHeaderMatcher.find_body_start(lines, header)
    }

    #[test]
    fn test_matches_header_case_insensitive() {
        assert_eq!(find(&["Jane Doe", "EDUCATION", "BSc"], "education"), Some(2));
        assert_eq!(find(&["Education", "BSc"], "education"), Some(1));
    }

    #[test]
    fn test_matches_plural_suffix() {
        assert_eq!(find(&["PROJECTS", "Built a chatbot"], "project"), Some(1));
    }

    #[test]
    fn test_matches_after_leading_whitespace() {
        assert_eq!(find(&["   Skills", "Rust"], "skills"), Some(1));
    }

    #[test]
    fn test_rejects_header_inside_longer_word() {
        assert_eq!(find(&["Miseducation of the topic", "x"], "education"), None);
        assert_eq!(find(&["Educational outreach", "x"], "education"), None);
    }

    #[test]
    fn test_rejects_header_not_at_line_start() {
        assert_eq!(find(&["My education", "x"], "education"), None);
    }

    #[test]
    fn test_first_matching_line_wins() {
        let lines = ["Skills", "Rust", "Skills", "Go"];
        assert_eq!(find(&lines, "skills"), Some(1));
    }

    #[test]
    fn test_header_text_is_escaped() {
        assert_eq!(find(&["C++ experience"], "c++"), None);
        assert_eq!(find(&["a.b", "x"], "a.b"), Some(1));
        assert_eq!(find(&["axb", "x"], "a.b"), None);
    }

    #[test]
    fn test_multi_word_header() {
        let lines = ["TECHNICAL SKILLS", "Rust, Go"];
        assert_eq!(find(&lines, "technical skills"), Some(1));
    }

    #[test]
    fn test_section_break_detection() {
        assert!(is_section_break("EXPERIENCE"));
        assert!(is_section_break("WORK HISTORY & AWARDS"));
        assert!(is_section_break("SKILLS:"));
        assert!(!is_section_break("Experience"));
        assert!(!is_section_break("ONE TWO THREE FOUR FIVE"));
        assert!(!is_section_break("2019 - 2023"));
        assert!(!is_section_break(""));
    }

    #[test]
    fn test_collector_stops_at_caps_line_exclusive() {
        let lines = ["EDUCATION", "BSc CS", "MSc CS", "EXPERIENCE", "Acme Corp"];
        let body = collect_body(&lines, Some(1));
        assert_eq!(body, vec!["BSc CS", "MSc CS"]);
    }

    #[test]
    fn test_collector_skips_blank_lines_without_stopping() {
        let lines = ["Acme Corp", "   ", "Globex", "", "Initech"];
        let body = collect_body(&lines, Some(0));
        assert_eq!(body, vec!["Acme Corp", "Globex", "Initech"]);
    }

    #[test]
    fn test_collector_runs_to_end_without_break() {
        let lines = ["SKILLS", "Rust", "Go"];
        assert_eq!(collect_body(&lines, Some(1)), vec!["Rust", "Go"]);
    }

    #[test]
    fn test_collector_with_missing_header_is_empty() {
        let lines = ["Anything", "At all"];
        assert!(collect_body(&lines, None).is_empty());
    }

    #[test]
    fn test_collector_start_past_end_is_empty() {
        let lines = ["SKILLS"];
        assert!(collect_body(&lines, Some(1)).is_empty());
    }

    #[test]
    fn test_long_caps_line_does_not_terminate() {
        let lines = ["LED A TEAM OF FIVE ENGINEERS", "Shipped v2", "AWARDS"];
        let body = collect_body(&lines, Some(0));
        assert_eq!(body, vec!["LED A TEAM OF FIVE ENGINEERS", "Shipped v2"]);
    }

    #[test]
    fn test_extract_section_normalizes_lines() {
        let lines = ["EXPERIENCE", "Software Engineer @ Acme, 2021", "SKILLS"];
        let section = extract_section(&RegexHeaderMatcher, &lines, "experience");
        assert_eq!(section, vec!["software engineer acme 2021"]);
    }
}
