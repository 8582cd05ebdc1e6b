//! Skills gap: which of a role's required skills the resume does not show,
//! plus a canned learning pointer for each.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::advice::roles::RoleSkillTable;
use crate::models::resume::ParsedResume;

/// Result of comparing a resume against a target role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsGapReport {
    pub target_role: String,
    pub current_skills: Vec<String>,
    /// Required skills not on the resume, in the table's order and casing.
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Substring rules for recommendations. First match wins.
const RECOMMENDATION_RULES: &[(&str, &str, &str)] = &[
    ("python", "Learn", "Start with Codecademy or freeCodeCamp Python courses"),
    ("sql", "Learn", "Practice on LeetCode or HackerRank SQL challenges"),
    ("machine learning", "Learn", "Take Andrew Ng's ML course on Coursera"),
    ("statistics", "Learn", "Take Statistics courses on Khan Academy or edX"),
    (
        "data visualization",
        "Learn",
        "Master Tableau, Power BI, or Python libraries like Matplotlib",
    ),
];

/// Computes the gap between `resume` and the skills `table` lists for `target_role`.
///
/// A required skill counts as present when its lowercase form is one of the
/// resume's skill tokens.
pub fn analyze_skills_gap(
    table: &RoleSkillTable,
    resume: &ParsedResume,
    target_role: &str,
) -> SkillsGapReport {
    let current: HashSet<&str> = resume.skills.iter().map(String::as_str).collect();

    let missing_skills: Vec<String> = table
        .required_skills(target_role)
        .iter()
        .filter(|skill| !current.contains(skill.to_lowercase().as_str()))
        .cloned()
        .collect();

    let recommendations = recommend_for_skills(&missing_skills);

    SkillsGapReport {
        target_role: target_role.to_string(),
        current_skills: resume.skills.clone(),
        missing_skills,
        recommendations,
    }
}

/// One recommendation line per missing skill.
pub fn recommend_for_skills(missing_skills: &[String]) -> Vec<String> {
    missing_skills.iter().map(|s| recommend(s)).collect()
}

fn recommend(skill: &str) -> String {
    let lower = skill.to_lowercase();
    RECOMMENDATION_RULES
        .iter()
        .find(|(needle, _, _)| lower.contains(needle))
        .map(|(_, verb, advice)| format!("{verb} {skill}: {advice}"))
        .unwrap_or_else(|| format!("Develop {skill}: Research online courses and practice projects"))
}
