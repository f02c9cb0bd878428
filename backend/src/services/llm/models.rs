use serde::{Deserialize, Serialize};

use crate::config::AzureOpenAIConfig;
use crate::models::ChatMessage;

/// Sampling parameters sent with every completion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl From<&AzureOpenAIConfig> for SamplingParams {
    fn from(cfg: &AzureOpenAIConfig) -> Self {
        Self {
            max_tokens: cfg.max_tokens,
            temperature: cfg.temperature,
            top_p: cfg.top_p,
            frequency_penalty: cfg.frequency_penalty,
            presence_penalty: cfg.presence_penalty,
        }
    }
}

/// Provider-neutral completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// `[system] + history + [user]`
    pub messages: Vec<ChatMessage>,
    pub params: SamplingParams,
}

// ============================================================================
// Azure OpenAI wire format
// ============================================================================

#[derive(Debug, Serialize)]
pub(crate) struct AzureChatRequest<'a> {
    pub messages: &'a [ChatMessage],
    #[serde(flatten)]
    pub params: SamplingParams,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AzureChatResponse {
    #[serde(default)]
    pub choices: Vec<AzureChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AzureChoice {
    pub message: AzureChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AzureChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl AzureChatResponse {
    /// Content of the first choice, if any
    pub fn into_content(self) -> Option<String> {
        self.choices.into_iter().next().and_then(|c| c.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SamplingParams {
        SamplingParams::from(&AzureOpenAIConfig::default())
    }

    #[test]
    fn test_request_body_is_flat() {
        let messages = vec![ChatMessage::system("sys"), ChatMessage::user("hi")];
        let body = AzureChatRequest { messages: &messages, params: params() };
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["max_tokens"], 800);
        assert!(json.get("params").is_none());
        assert!(json.get("top_p").is_some());
        assert!(json.get("presence_penalty").is_some());
    }

    #[test]
    fn test_response_first_choice_content() {
        let raw = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"Hi!"}}]}"#;
        let resp: AzureChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.into_content().as_deref(), Some("Hi!"));
    }

    #[test]
    fn test_response_without_choices() {
        let resp: AzureChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(resp.into_content().is_none());

        let resp: AzureChatResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.into_content().is_none());

        let raw = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let resp: AzureChatResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.into_content().is_none());
    }
}
