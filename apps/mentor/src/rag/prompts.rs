// Prompt templates for the conversational retrieval chain.
// Placeholders are filled with str::replace; keep the braces literal.

/// Rewrites a follow-up into a question that stands on its own, so retrieval
/// does not depend on pronouns like "it" or "that role".
pub const CONDENSE_QUESTION_PROMPT: &str = "\
Given the following conversation and a follow-up question, rephrase the follow-up question \
to be a standalone question. Reply with the standalone question only.

Chat history:
{chat_history}

Follow-up question: {question}
Standalone question:";

pub const CONDENSE_QUESTION_SYSTEM: &str =
    "You rewrite questions. You never answer them. Output a single question.";

/// Answers a question from the retrieved resume sections.
pub const ANSWER_PROMPT: &str = "\
Use the following sections of the candidate's resume to answer the question at the end.

{context}

Question: {question}
Helpful answer:";
