//! Hosted model access
//!
//! The orchestrator only sees the [`ChatModel`] trait. The Azure OpenAI
//! client is one implementation; tests plug in fakes.
//!
//! ```text
//! ┌───────────────┐
//! │   ChatModel   │  ← trait, Result<String, LLMError>
//! └───────┬───────┘
//!         │
//!    ┌────┴─────┐
//!    ▼          ▼
//! ┌───────┐  ┌──────┐
//! │ Azure │  │ Fake │
//! │OpenAI │  │(test)│
//! └───────┘  └──────┘
//! ```

mod client;
mod models;

pub use client::AzureOpenAIClient;
pub use models::*;

use async_trait::async_trait;
use thiserror::Error;

/// Failure of a single model call
#[derive(Debug, Error)]
pub enum LLMError {
    #[error("Azure OpenAI is not configured")]
    NotConfigured,

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Model returned no content")]
    EmptyResponse,

    #[error("Failed to parse model response: {0}")]
    Parse(String),
}

/// Generates an assistant reply for a prepared message sequence
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Short provider name used in logs
    fn name(&self) -> &str;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LLMError>;
}
