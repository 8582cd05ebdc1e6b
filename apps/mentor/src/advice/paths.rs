use serde::{Deserialize, Serialize};

use crate::models::resume::ParsedResume;

/// Skill keyword → career paths it opens up, checked in this order.
const PATH_RULES: &[(&str, &[&str])] = &[
    ("python", &["Data Scientist", "Software Engineer"]),
    ("sql", &["Data Analyst", "Business Intelligence Developer"]),
    ("machine learning", &["ML Engineer", "AI Researcher"]),
    ("java", &["Java Developer", "Android Developer"]),
];

const DEFAULT_PATHS: &[&str] = &["General Software Developer", "IT Consultant"];

/// Suggests career paths from the keywords found in the resume's skills.
pub fn suggest_career_paths(resume: &ParsedResume) -> Vec<String> {
    let paths: Vec<String> = PATH_RULES
        .iter()
        .filter(|(keyword, _)| resume.has_skill_containing(keyword))
        .flat_map(|(_, paths)| paths.iter().map(|p| p.to_string()))
        .collect();

    if paths.is_empty() {
        DEFAULT_PATHS.iter().map(|p| p.to_string()).collect()
    } else {
        paths
    }
}

/// Follow-up learning tracks for the stacks a resume already shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearningRoadmap {
    pub python_path: Vec<String>,
    pub java_path: Vec<String>,
    pub data_path: Vec<String>,
    pub general: Vec<String>,
}

const PYTHON_TRACK: &[&str] = &[
    "Advanced Python (Decorators, Generators)",
    "Web Development (Django/Flask)",
    "Data Science Libraries (Pandas, NumPy)",
    "Machine Learning (Scikit-learn)",
];

const JAVA_TRACK: &[&str] = &[
    "Advanced Java (Collections, Streams)",
    "Spring Framework",
    "Microservices Architecture",
    "Cloud Deployment (AWS/Azure)",
];

const DATA_TRACK: &[&str] = &[
    "Advanced SQL (Window Functions)",
    "Data Visualization (Tableau, Power BI)",
    "Business Intelligence",
    "Data Engineering",
];

const GENERAL_TRACK: &[&str] = &[
    "Build portfolio projects",
    "Contribute to open source",
    "Network and attend tech meetups",
    "Stay updated with industry trends",
];

pub fn generate_learning_roadmap(resume: &ParsedResume) -> LearningRoadmap {
    let track = |keyword: &str, steps: &[&str]| -> Vec<String> {
        if resume.has_skill_containing(keyword) {
            steps.iter().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        }
    };

    LearningRoadmap {
        python_path: track("python", PYTHON_TRACK),
        java_path: track("java", JAVA_TRACK),
        data_path: track("sql", DATA_TRACK),
        general: GENERAL_TRACK.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume_with(skills: &[&str]) -> ParsedResume {
        ParsedResume {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_paths_follow_rule_order() {
        let paths = suggest_career_paths(&resume_with(&["sql", "python"]));
        assert_eq!(
            paths,
            vec![
                "Data Scientist",
                "Software Engineer",
                "Data Analyst",
                "Business Intelligence Developer"
            ]
        );
    }

    #[test]
    fn test_paths_use_substring_match() {
        let paths = suggest_career_paths(&resume_with(&["machine learning basics"]));
        assert_eq!(paths, vec!["ML Engineer", "AI Researcher"]);
    }

    #[test]
    fn test_javascript_also_counts_as_java() {
        let paths = suggest_career_paths(&resume_with(&["javascript"]));
        assert_eq!(paths, vec!["Java Developer", "Android Developer"]);
    }

    #[test]
    fn test_default_paths_when_nothing_matches() {
        let paths = suggest_career_paths(&resume_with(&["excel"]));
        assert_eq!(paths, vec!["General Software Developer", "IT Consultant"]);
        assert_eq!(suggest_career_paths(&ParsedResume::default()).len(), 2);
    }

    #[test]
    fn test_roadmap_tracks_follow_skills() {
        let roadmap = generate_learning_roadmap(&resume_with(&["python", "postgresql"]));
        assert_eq!(roadmap.python_path.len(), 4);
        assert!(roadmap.java_path.is_empty());
        assert_eq!(roadmap.data_path[0], "Advanced SQL (Window Functions)");
        assert_eq!(roadmap.general.len(), 4);
    }

    #[test]
    fn test_roadmap_general_track_always_present() {
        let roadmap = generate_learning_roadmap(&ParsedResume::default());
        assert!(roadmap.python_path.is_empty());
        assert!(roadmap.data_path.is_empty());
        assert_eq!(roadmap.general[0], "Build portfolio projects");
    }
}
