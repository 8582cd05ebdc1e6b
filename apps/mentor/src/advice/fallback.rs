use crate::models::resume::ParsedResume;

/// Canned answer for a free-text question when no language model is available.
/// Rules are checked in order on the lowercased question.
pub fn fallback_answer(question: &str, resume: &ParsedResume) -> String {
    let q = question.to_lowercase();

    if q.contains("skill") && q.contains("gap") {
        "I can help you analyze skills gaps! Use the Skills Gap Analysis feature to see \
         what skills you need for your target role."
            .to_string()
    } else if q.contains("career") && q.contains("path") {
        "Great question! Use Career Path Suggestions to see what career paths align with \
         your current skills and background."
            .to_string()
    } else if q.contains("resume") {
        format!(
            "Your resume shows {} skills and {} projects. You're well-positioned for tech roles!",
            resume.skills.len(),
            resume.projects.len()
        )
    } else if q.contains("python") {
        if resume.has_skill_containing("python") {
            "Great! You already have Python skills. Consider building more projects and \
             learning advanced topics like Django, Flask, or data science libraries."
                .to_string()
        } else {
            "Python is a great skill to add! Start with basic syntax, then move to web \
             development or data science depending on your interests."
                .to_string()
        }
    } else {
        "I'm here to help with your career! You can ask me about skills, career paths, \
         resume improvement, or use the interactive features above."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume() -> ParsedResume {
        ParsedResume {
            skills: vec!["python".into(), "sql".into(), "go".into()],
            projects: vec!["built a chatbot".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_skill_gap_question() {
        let answer = fallback_answer("What is my Skill GAP?", &resume());
        assert!(answer.contains("Skills Gap Analysis"));
    }

    #[test]
    fn test_career_path_question() {
        let answer = fallback_answer("Which career path fits me?", &resume());
        assert!(answer.contains("Career Path Suggestions"));
    }

    #[test]
    fn test_resume_question_reports_counts() {
        let answer = fallback_answer("How does my resume look?", &resume());
        assert_eq!(
            answer,
            "Your resume shows 3 skills and 1 projects. You're well-positioned for tech roles!"
        );
    }

    #[test]
    fn test_python_question_depends_on_skills() {
        assert!(fallback_answer("Should I learn python?", &resume()).starts_with("Great!"));
        let answer = fallback_answer("Should I learn python?", &ParsedResume::default());
        assert!(answer.starts_with("Python is a great skill to add!"));
    }

    #[test]
    fn test_default_answer() {
        let answer = fallback_answer("hello", &resume());
        assert!(answer.starts_with("I'm here to help"));
    }

    #[test]
    fn test_skill_without_gap_is_not_gap_rule() {
        let answer = fallback_answer("what skill should I list on my resume", &resume());
        assert!(answer.starts_with("Your resume shows"));
    }
}
