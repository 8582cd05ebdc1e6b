//! Conversational retrieval chain over one resume.
//!
//! Flow per question: condense (only when there is history) → retrieve top-k
//! section chunks → answer from those chunks → record the exchange.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::llm_client::prompts::{CAREER_MENTOR_SYSTEM, GROUNDING_INSTRUCTION};
use crate::llm_client::AnswerModel;
use crate::models::resume::ParsedResume;
use crate::rag::memory::ConversationMemory;
use crate::rag::prompts::{ANSWER_PROMPT, CONDENSE_QUESTION_PROMPT, CONDENSE_QUESTION_SYSTEM};
use crate::rag::store::{ResumeIndex, Retriever};

/// Number of section chunks handed to the model per question.
pub const DEFAULT_TOP_K: usize = 2;

/// An answer plus the resume chunks it was generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub answer: String,
    pub sources: Vec<String>,
}

pub struct CareerRagPipeline {
    retriever: Box<dyn Retriever>,
    model: Arc<dyn AnswerModel>,
    memory: ConversationMemory,
    top_k: usize,
}

impl CareerRagPipeline {
    /// Indexes `resume` and wires it to `model`.
    pub fn new(resume: &ParsedResume, model: Arc<dyn AnswerModel>, top_k: usize) -> Self {
        let index = ResumeIndex::from_resume(resume);
        info!("RAG index built over resume sections (k={top_k})");
        Self::with_retriever(Box::new(index), model, top_k)
    }

    pub fn with_retriever(
        retriever: Box<dyn Retriever>,
        model: Arc<dyn AnswerModel>,
        top_k: usize,
    ) -> Self {
        Self {
            retriever,
            model,
            memory: ConversationMemory::new(),
            top_k,
        }
    }

    pub fn memory(&self) -> &ConversationMemory {
        &self.memory
    }

    /// Answers a free-text career question against the indexed resume.
    pub async fn get_career_advice(&mut self, question: &str) -> Result<Advice, AppError> {
        let standalone = self.condense(question).await?;
        debug!("Retrieval query: {standalone}");

        let sources: Vec<String> = self
            .retriever
            .retrieve(&standalone, self.top_k)
            .into_iter()
            .map(|chunk| chunk.text)
            .collect();

        let prompt = ANSWER_PROMPT
            .replace("{context}", &sources.join("\n\n"))
            .replace("{question}", &standalone);
        let system = format!("{CAREER_MENTOR_SYSTEM}\n\n{GROUNDING_INSTRUCTION}");

        let answer = self
            .model
            .complete(&prompt, &system)
            .await
            .map_err(|e| AppError::Llm(format!("Career advice generation failed: {e}")))?;

        self.memory.record_exchange(question, &answer);

        Ok(Advice { answer, sources })
    }

    /// Asks the chain what the candidate needs for `target_role`.
    pub async fn analyze_skills_gap(&mut self, target_role: &str) -> Result<Advice, AppError> {
        let question = format!("What skills do I need to develop to become a {target_role}?");
        self.get_career_advice(&question).await
    }

    /// Turns a follow-up into a standalone question. First questions pass through.
    async fn condense(&self, question: &str) -> Result<String, AppError> {
        if self.memory.is_empty() {
            return Ok(question.to_string());
        }

        let prompt = CONDENSE_QUESTION_PROMPT
            .replace("{chat_history}", &self.memory.transcript())
            .replace("{question}", question);

        let condensed = self
            .model
            .complete(&prompt, CONDENSE_QUESTION_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Question condensing failed: {e}")))?;

        Ok(condensed)
    }
}
