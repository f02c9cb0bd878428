use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "system" => Ok(Role::System),
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// History item as sent by the chat widget.
///
/// Fields are optional on the wire; see `From<HistoryEntry> for ChatMessage`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct HistoryEntry {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<HistoryEntry> for ChatMessage {
    /// Missing or unknown roles become `user`; missing content is empty.
    fn from(entry: HistoryEntry) -> Self {
        let role = match entry.role.as_deref() {
            None => Role::User,
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::debug!("{}, treating history entry as user", err);
                Role::User
            }),
        };
        ChatMessage { role, content: entry.content.unwrap_or_default() }
    }
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub history: Option<Vec<HistoryEntry>>,
}

/// Which path produced a chat answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum ChatSource {
    /// Generated by the hosted model
    #[serde(rename = "azure_openai")]
    Model,
    /// Canned answer after the model call failed
    #[serde(rename = "mock_fallback")]
    FallbackAfterModelError,
    /// Canned answer because no model is configured
    #[serde(rename = "mock")]
    FallbackNoModel,
}

impl ChatSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatSource::Model => "azure_openai",
            ChatSource::FallbackAfterModelError => "mock_fallback",
            ChatSource::FallbackNoModel => "mock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ChatResult {
    pub message: String,
    pub source: ChatSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResult {
    pub fn from_model(message: String) -> Self {
        Self { message, source: ChatSource::Model, error: None }
    }

    pub fn fallback_no_model(message: String) -> Self {
        Self { message, source: ChatSource::FallbackNoModel, error: None }
    }

    pub fn fallback_after_error(message: String, error: impl Into<String>) -> Self {
        Self { message, source: ChatSource::FallbackAfterModelError, error: Some(error.into()) }
    }
}
