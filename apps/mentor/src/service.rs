//! Career service: one resume session plus everything that answers questions about it.
//!
//! With a model configured, free-text questions go through the RAG chain and
//! fall back to canned answers if the model call fails. Without one, every
//! answer comes from the rule tables.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::advice::fallback::fallback_answer;
use crate::advice::gap::{analyze_skills_gap, SkillsGapReport};
use crate::advice::paths::{generate_learning_roadmap, suggest_career_paths, LearningRoadmap};
use crate::advice::roles::RoleSkillTable;
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::{AnswerModel, LlmClient, MODEL};
use crate::models::resume::{ParsedResume, ResumeSession};
use crate::rag::memory::ChatTurn;
use crate::rag::pipeline::{Advice, CareerRagPipeline};
use crate::resume::parser::parse_resume;
use crate::resume::pdf::extract_text_from_pdf_async;

pub struct CareerService {
    model: Option<Arc<dyn AnswerModel>>,
    roles: RoleSkillTable,
    top_k: usize,
    session: Option<ResumeSession>,
    pipeline: Option<CareerRagPipeline>,
}

impl CareerService {
    pub fn new(model: Option<Arc<dyn AnswerModel>>, roles: RoleSkillTable, top_k: usize) -> Self {
        info!(
            "CareerService initialized (model available: {})",
            model.is_some()
        );
        Self {
            model,
            roles,
            top_k,
            session: None,
            pipeline: None,
        }
    }

    /// Builds the service from configuration. A client that cannot be built
    /// is logged and the service runs on rule tables only.
    pub fn from_config(config: &Config) -> Self {
        let model: Option<Arc<dyn AnswerModel>> = match &config.anthropic_api_key {
            Some(key) => match LlmClient::new(key.clone()) {
                Ok(client) => {
                    info!("LLM client initialized (model: {MODEL})");
                    Some(Arc::new(client))
                }
                Err(e) => {
                    warn!("LLM client unavailable, using rule-based advice: {e}");
                    None
                }
            },
            None => {
                info!("ANTHROPIC_API_KEY not set, using rule-based advice");
                None
            }
        };

        Self::new(model, RoleSkillTable::default(), config.retrieval_top_k)
    }

    /// Extracts, parses and indexes the resume at `path`, replacing any
    /// previous session. An unreadable file loads as an empty resume.
    pub async fn load_resume(&mut self, path: &Path) -> &ParsedResume {
        info!("Loading resume: {}", path.display());
        let raw_text = extract_text_from_pdf_async(path).await;
        if raw_text.is_empty() {
            warn!("No text extracted from {}", path.display());
        }
        self.load_text(path, &raw_text)
    }

    /// Same as [`load_resume`](Self::load_resume) for already-extracted text.
    pub fn load_text(&mut self, source: &Path, raw_text: &str) -> &ParsedResume {
        let resume = parse_resume(raw_text);

        self.pipeline = self
            .model
            .as_ref()
            .map(|model| CareerRagPipeline::new(&resume, Arc::clone(model), self.top_k));

        if resume.is_empty() {
            warn!("No sections found in {}", source.display());
        }

        let session = ResumeSession::new(source.to_path_buf(), resume);
        info!(
            "Resume session {} ready: {} education, {} experience, {} projects, {} skills",
            session.id,
            session.resume.education.len(),
            session.resume.experience.len(),
            session.resume.projects.len(),
            session.resume.skills.len()
        );

        &self.session.insert(session).resume
    }

    pub fn session(&self) -> Option<&ResumeSession> {
        self.session.as_ref()
    }

    pub fn resume_data(&self) -> Option<&ParsedResume> {
        self.session.as_ref().map(|s| &s.resume)
    }

    /// Conversation so far with the RAG chain. Empty in rule-based mode.
    pub fn chat_history(&self) -> &[ChatTurn] {
        self.pipeline
            .as_ref()
            .map(|p| p.memory().turns())
            .unwrap_or(&[])
    }

    /// True when questions are answered by the RAG chain rather than rules.
    pub fn is_available(&self) -> bool {
        self.pipeline.is_some()
    }

    /// Answers a free-text question about the loaded resume.
    pub async fn career_advice(&mut self, question: &str) -> Result<Advice, AppError> {
        if question.trim().is_empty() {
            return Err(AppError::Validation("question cannot be empty".to_string()));
        }
        let resume = self
            .session
            .as_ref()
            .map(|s| &s.resume)
            .ok_or(AppError::NotInitialized)?;

        let Some(pipeline) = self.pipeline.as_mut() else {
            return Ok(canned_advice(question, resume));
        };

        info!("Getting career advice for: {question}");
        match pipeline.get_career_advice(question).await {
            Ok(advice) => Ok(advice),
            Err(e) => {
                warn!("RAG advice failed, answering from rules: {e}");
                Ok(canned_advice(question, resume))
            }
        }
    }

    /// Rule-based gap between the resume and `target_role`.
    pub fn skills_gap(&self, target_role: &str) -> Result<SkillsGapReport, AppError> {
        if target_role.trim().is_empty() {
            return Err(AppError::Validation("target_role cannot be empty".to_string()));
        }
        let resume = self.require_resume()?;
        if !self.roles.contains(target_role) {
            warn!("Unknown target role '{target_role}', no required skills on file");
        }
        Ok(analyze_skills_gap(&self.roles, resume, target_role))
    }

    /// Model-written gap analysis for `target_role`.
    pub async fn skills_gap_rag(&mut self, target_role: &str) -> Result<Advice, AppError> {
        if target_role.trim().is_empty() {
            return Err(AppError::Validation("target_role cannot be empty".to_string()));
        }
        let pipeline = self.pipeline.as_mut().ok_or(AppError::NotInitialized)?;
        info!("Analyzing skills gap for role: {target_role}");
        pipeline.analyze_skills_gap(target_role).await
    }

    pub fn career_paths(&self) -> Result<Vec<String>, AppError> {
        Ok(suggest_career_paths(self.require_resume()?))
    }

    pub fn learning_roadmap(&self) -> Result<LearningRoadmap, AppError> {
        Ok(generate_learning_roadmap(self.require_resume()?))
    }

    fn require_resume(&self) -> Result<&ParsedResume, AppError> {
        self.resume_data().ok_or(AppError::NotInitialized)
    }
}

fn canned_advice(question: &str, resume: &ParsedResume) -> Advice {
    Advice {
        answer: fallback_answer(question, resume),
        sources: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::io::Write;

    const RESUME_TEXT: &str = "EDUCATION\n\
        BSc Computer Science, XYZ University\n\
        SKILLS\n\
        Languages: Python, Go\n\
        PROJECTS\n\
        Built a chatbot\n";

    struct EchoModel;

    #[async_trait]
    impl AnswerModel for EchoModel {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Ok("Model answer".to_string())
        }
    }

    struct DownModel;

    #[async_trait]
    impl AnswerModel for DownModel {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        }
    }

    fn service_with(model: Option<Arc<dyn AnswerModel>>) -> CareerService {
        CareerService::new(model, RoleSkillTable::default(), 2)
    }

    #[tokio::test]
    async fn test_advice_before_load_is_not_initialized() {
        let mut service = service_with(None);
        let err = service.career_advice("What next?").await.unwrap_err();
        assert!(matches!(err, AppError::NotInitialized));
        assert!(matches!(service.career_paths(), Err(AppError::NotInitialized)));
    }

    #[tokio::test]
    async fn test_empty_question_is_validation_error() {
        let mut service = service_with(None);
        service.load_text(Path::new("resume.pdf"), RESUME_TEXT);
        let err = service.career_advice("   ").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_load_text_replaces_session() {
        let mut service = service_with(None);
        service.load_text(Path::new("a.pdf"), RESUME_TEXT);
        let first_id = service.session().unwrap().id;

        let resume = service.load_text(Path::new("b.pdf"), "");
        assert!(resume.is_empty());

        let session = service.session().unwrap();
        assert_ne!(session.id, first_id);
        assert_eq!(session.source_path, Path::new("b.pdf"));
    }

    #[tokio::test]
    async fn test_without_model_answers_from_rules() {
        let mut service = service_with(None);
        service.load_text(Path::new("resume.pdf"), RESUME_TEXT);
        assert!(!service.is_available());

        let advice = service.career_advice("Review my resume").await.unwrap();
        assert_eq!(
            advice.answer,
            "Your resume shows 2 skills and 1 projects. You're well-positioned for tech roles!"
        );
        assert!(advice.sources.is_empty());
        assert!(service.chat_history().is_empty());
    }

    #[tokio::test]
    async fn test_with_model_answers_from_rag() {
        let mut service = service_with(Some(Arc::new(EchoModel)));
        service.load_text(Path::new("resume.pdf"), RESUME_TEXT);
        assert!(service.is_available());

        let advice = service.career_advice("What about my skills?").await.unwrap();
        assert_eq!(advice.answer, "Model answer");
        assert_eq!(advice.sources[0], "Skills:\npython, go");
        assert_eq!(service.chat_history().len(), 2);
    }

    #[tokio::test]
    async fn test_model_failure_falls_back_to_rules() {
        let mut service = service_with(Some(Arc::new(DownModel)));
        service.load_text(Path::new("resume.pdf"), RESUME_TEXT);

        let advice = service.career_advice("Should I learn python?").await.unwrap();
        assert!(advice.answer.starts_with("Great! You already have Python skills."));
        assert!(advice.sources.is_empty());
    }

    #[tokio::test]
    async fn test_rag_gap_requires_model() {
        let mut service = service_with(None);
        service.load_text(Path::new("resume.pdf"), RESUME_TEXT);
        let err = service.skills_gap_rag("Data Scientist").await.unwrap_err();
        assert!(matches!(err, AppError::NotInitialized));

        let mut service = service_with(Some(Arc::new(EchoModel)));
        service.load_text(Path::new("resume.pdf"), RESUME_TEXT);
        let advice = service.skills_gap_rag("Data Scientist").await.unwrap();
        assert_eq!(advice.answer, "Model answer");
    }

    #[test]
    fn test_rule_based_gap_and_paths() {
        let mut service = service_with(None);
        service.load_text(Path::new("resume.pdf"), RESUME_TEXT);

        let report = service.skills_gap("Data Analyst").unwrap();
        assert_eq!(
            report.missing_skills,
            vec!["SQL", "Excel", "Data Visualization", "Statistical Analysis"]
        );

        let paths = service.career_paths().unwrap();
        assert_eq!(paths, vec!["Data Scientist", "Software Engineer"]);

        let roadmap = service.learning_roadmap().unwrap();
        assert!(!roadmap.python_path.is_empty());
        assert!(roadmap.java_path.is_empty());

        assert!(matches!(service.skills_gap(" "), Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_unreadable_pdf_loads_empty_resume() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not a pdf at all").unwrap();

        let mut service = service_with(None);
        let resume = service.load_resume(file.path()).await;
        assert_eq!(*resume, ParsedResume::default());
        assert!(service.session().is_some());
    }
}
