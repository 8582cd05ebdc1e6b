use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const DEFAULT_ROLES: &[(&str, &[&str])] = &[
    (
        "data scientist",
        &[
            "Python",
            "SQL",
            "Machine Learning",
            "Statistics",
            "Data Visualization",
        ],
    ),
    (
        "software engineer",
        &[
            "Programming",
            "Data Structures",
            "Algorithms",
            "System Design",
            "Testing",
        ],
    ),
    (
        "product manager",
        &[
            "Product Strategy",
            "User Research",
            "Data Analysis",
            "Leadership",
            "Agile",
        ],
    ),
    (
        "data analyst",
        &[
            "SQL",
            "Excel",
            "Python",
            "Data Visualization",
            "Statistical Analysis",
        ],
    ),
    (
        "ml engineer",
        &[
            "Python",
            "Machine Learning",
            "Deep Learning",
            "MLOps",
            "Data Engineering",
        ],
    ),
];

/// Role name → skills a candidate is expected to have for it.
///
/// Immutable once built; owned by whoever runs gap analysis and passed in,
/// so tests can supply their own table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSkillTable {
    roles: BTreeMap<String, Vec<String>>,
}

impl RoleSkillTable {
    /// Builds a table; role names are lowercased, skill order is kept.
    pub fn new<I, R, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = (R, Vec<S>)>,
        R: AsRef<str>,
        S: Into<String>,
    {
        let roles = roles
            .into_iter()
            .map(|(role, skills)| {
                (
                    role.as_ref().trim().to_lowercase(),
                    skills.into_iter().map(Into::into).collect(),
                )
            })
            .collect();
        Self { roles }
    }

    /// Required skills for `role` (case-insensitive). Unknown roles need nothing.
    pub fn required_skills(&self, role: &str) -> &[String] {
        self.roles
            .get(&role.trim().to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains_key(&role.trim().to_lowercase())
    }
}

impl Default for RoleSkillTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_ROLES
                .iter()
                .map(|(role, skills)| (*role, skills.to_vec())),
        )
    }
}
