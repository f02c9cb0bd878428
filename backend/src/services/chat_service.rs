//! Chat orchestration
//!
//! ```text
//! Received ─► Validating ─┬─► Rejected (400)
//!                         └─► Routing ─┬─► no model ─► canned       (mock)
//!                                      └─► model ─┬─► Succeeded     (azure_openai)
//!                                                 └─► canned        (mock_fallback)
//! ```

use std::sync::Arc;

use crate::config::Config;
use crate::models::{ChatMessage, ChatResult};
use crate::services::canned::CannedResponder;
use crate::services::knowledge_service::KnowledgeSource;
use crate::services::language;
use crate::services::llm::{ChatModel, CompletionRequest, SamplingParams};
use crate::services::prompt;
use crate::utils::text::log_preview;
use crate::utils::{ApiError, ApiResult};

/// Most recent history entries forwarded to the model
pub const HISTORY_LIMIT: usize = 10;

pub struct ChatService {
    model: Option<Arc<dyn ChatModel>>,
    knowledge: Option<Arc<dyn KnowledgeSource>>,
    canned: CannedResponder,
    system_prompt: String,
    organization: String,
    params: SamplingParams,
}

impl ChatService {
    pub fn new(
        config: &Config,
        model: Option<Arc<dyn ChatModel>>,
        knowledge: Option<Arc<dyn KnowledgeSource>>,
    ) -> Self {
        let kb = &config.assistant.knowledge_base;
        Self {
            model,
            knowledge,
            canned: CannedResponder::new(kb.clone()),
            system_prompt: config.assistant.system_prompt.clone(),
            organization: kb.organization.clone(),
            params: SamplingParams::from(&config.azure_openai),
        }
    }

    pub fn model_available(&self) -> bool {
        self.model.is_some()
    }

    pub fn knowledge_available(&self) -> bool {
        self.knowledge.is_some()
    }

    /// Answer one chat turn.
    ///
    /// Only an empty message is an error. Model failures are absorbed into a
    /// canned answer carrying the error text.
    pub async fn handle(&self, message: &str, history: Vec<ChatMessage>) -> ApiResult<ChatResult> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ApiError::validation_error("Message is required"));
        }

        tracing::info!("Received chat message: {}...", log_preview(message));

        let Some(model) = &self.model else {
            return Ok(ChatResult::fallback_no_model(self.canned.respond(message)));
        };

        let system_prompt = self.build_system_prompt(Some(message)).await;
        let request = CompletionRequest {
            messages: build_messages(system_prompt, history, message),
            params: self.params,
        };

        match model.complete(&request).await {
            Ok(answer) => {
                tracing::info!("{} response generated successfully", model.name());
                Ok(ChatResult::from_model(answer))
            },
            Err(e) => {
                tracing::error!("{} error: {}", model.name(), e);
                Ok(ChatResult::fallback_after_error(self.canned.respond(message), e.to_string()))
            },
        }
    }

    /// Compose the system prompt with a fresh knowledge fetch.
    pub async fn build_system_prompt(&self, message: Option<&str>) -> String {
        let language = message.map(language::detect);
        let context = match &self.knowledge {
            Some(source) => source.fetch_context().await,
            None => None,
        };
        prompt::compose(&self.system_prompt, &self.organization, language, context.as_deref())
    }
}

/// `[system] + history[last 10] + [user]`
pub fn build_messages(
    system_prompt: String,
    history: Vec<ChatMessage>,
    message: &str,
) -> Vec<ChatMessage> {
    let skip = history.len().saturating_sub(HISTORY_LIMIT);
    let mut messages = Vec::with_capacity(history.len() - skip + 2);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend(history.into_iter().skip(skip));
    messages.push(ChatMessage::user(message));
    messages
}
