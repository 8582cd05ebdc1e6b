// Retrieval-augmented answers over a parsed resume.
// The model sits behind llm_client::AnswerModel; retrieval behind store::Retriever.

pub mod memory;
pub mod pipeline;
pub mod prompts;
pub mod store;
