//! Resume assembler: raw PDF text in, four named sections out.

use tracing::debug;

use crate::models::resume::ParsedResume;
use crate::resume::sections::{
    extract_raw_section, extract_section, HeaderMatcher, RegexHeaderMatcher,
};
use crate::resume::skills::split_skills;

/// Parses raw resume text with the default header heuristic.
pub fn parse_resume(raw_text: &str) -> ParsedResume {
    parse_resume_with(&RegexHeaderMatcher, raw_text)
}

/// Parses raw resume text with a caller-supplied header matcher.
///
/// Best-effort and total: a section whose header is never found is empty,
/// and empty input gives an empty resume.
pub fn parse_resume_with(matcher: &dyn HeaderMatcher, raw_text: &str) -> ParsedResume {
    // Original casing is kept so ALL-CAPS headers still terminate sections.
    let lines: Vec<&str> = raw_text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    let education = extract_section(matcher, &lines, "education");
    let experience = extract_section(matcher, &lines, "experience");

    let mut projects = extract_section(matcher, &lines, "project");
    if projects.is_empty() {
        projects = extract_section(matcher, &lines, "projects");
    }

    let mut skill_lines = extract_raw_section(matcher, &lines, "skills");
    if skill_lines.is_empty() {
        skill_lines = extract_raw_section(matcher, &lines, "technical skills");
    }
    let skills = split_skills(&skill_lines);

    debug!(
        lines = lines.len(),
        education = education.len(),
        experience = experience.len(),
        projects = projects.len(),
        skills = skills.len(),
        "Parsed resume sections"
    );

    ParsedResume {
        education,
        experience,
        projects,
        skills,
    }
}
