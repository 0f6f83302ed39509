use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::id::HistoryId;

/// Who produced a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Question,
    Answer,
}

/// One entry of the chat transcript. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    text: String,
}

impl Message {
    pub fn question(text: impl Into<String>) -> Self {
        Self {
            role: Role::Question,
            text: text.into(),
        }
    }

    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            role: Role::Answer,
            text: text.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_question(&self) -> bool {
        self.role == Role::Question
    }
}

/// A previously submitted question, as listed in the history panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: HistoryId,
    pub question: String,
    pub created_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            id: HistoryId::next(),
            question: question.into(),
            created_at: Local::now(),
        }
    }

    /// Timestamp formatted for display, e.g. `2024-03-05 14:07:09`.
    pub fn display_timestamp(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
