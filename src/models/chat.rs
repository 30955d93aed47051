use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatSender {
    User,
    Assistant,
    Support,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(rename = "_id")]
    pub id: String,
    pub session_id: String,
    pub sender: ChatSender,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A chat-history session as listed on the history screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub title: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

impl ChatSession {
    /// History screens show the stored title, or the first user message
    /// when no title was saved.
    pub fn display_title(&self) -> &str {
        if let Some(title) = self.title.as_deref() {
            if !title.trim().is_empty() {
                return title;
            }
        }
        self.messages
            .iter()
            .find(|m| m.sender == ChatSender::User)
            .map(|m| m.content.as_str())
            .unwrap_or("Cuộc trò chuyện mới")
    }
}
