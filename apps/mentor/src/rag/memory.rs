use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Human,
    Assistant,
}

impl Speaker {
    fn label(self) -> &'static str {
        match self {
            Speaker::Human => "Human",
            Speaker::Assistant => "Assistant",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub content: String,
    pub at: DateTime<Utc>,
}

/// Unbounded buffer of the conversation so far, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ConversationMemory {
    turns: Vec<ChatTurn>,
}

impl ConversationMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one question and the answer given to it.
    pub fn record_exchange(&mut self, question: &str, answer: &str) {
        let at = Utc::now();
        self.turns.push(ChatTurn {
            speaker: Speaker::Human,
            content: question.to_string(),
            at,
        });
        self.turns.push(ChatTurn {
            speaker: Speaker::Assistant,
            content: answer.to_string(),
            at,
        });
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// History rendered for a prompt, one `Speaker: text` line per turn.
    pub fn transcript(&self) -> String {
        self.turns
            .iter()
            .map(|t| format!("{}: {}", t.speaker.label(), t.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
