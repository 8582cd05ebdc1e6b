use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// One of the four resume categories the extractor fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Education,
    Experience,
    Projects,
    Skills,
}

impl Section {
    /// Display label used as the chunk prefix in the retrieval index.
    pub fn label(self) -> &'static str {
        match self {
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
        }
    }
}

/// Sections extracted from one resume.
///
/// All four fields are always present; a section whose header was not found
/// is an empty vector. `skills` holds deduplicated tokens, the others hold
/// normalized lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub projects: Vec<String>,
    pub skills: Vec<String>,
}

impl ParsedResume {
    pub fn section(&self, section: Section) -> &[String] {
        match section {
            Section::Education => &self.education,
            Section::Experience => &self.experience,
            Section::Projects => &self.projects,
            Section::Skills => &self.skills,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.education.is_empty()
            && self.experience.is_empty()
            && self.projects.is_empty()
            && self.skills.is_empty()
    }

    /// True when any skill token contains `needle` (lowercase).
    pub fn has_skill_containing(&self, needle: &str) -> bool {
        self.skills
            .iter()
            .any(|s| s.to_lowercase().contains(needle))
    }
}

/// A loaded resume. Replaced wholesale when a new document is loaded.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeSession {
    pub id: Uuid,
    pub source_path: PathBuf,
    pub resume: ParsedResume,
    pub loaded_at: DateTime<Utc>,
}

impl ResumeSession {
    pub fn new(source_path: PathBuf, resume: ParsedResume) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_path,
            resume,
            loaded_at: Utc::now(),
        }
    }
}
