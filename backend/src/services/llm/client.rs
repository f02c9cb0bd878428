//! Azure OpenAI chat completions client

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::models::{AzureChatRequest, AzureChatResponse, CompletionRequest};
use super::{ChatModel, LLMError};
use crate::config::AzureOpenAIConfig;

pub struct AzureOpenAIClient {
    http_client: Client,
    endpoint: String,
    api_key: String,
    api_version: String,
    deployment: String,
    timeout_secs: u64,
}

impl AzureOpenAIClient {
    /// Build a client from configuration.
    ///
    /// Returns `NotConfigured` for empty or placeholder credentials so that
    /// no request is ever attempted against them.
    pub fn new(cfg: &AzureOpenAIConfig) -> Result<Self, LLMError> {
        if !cfg.is_configured() {
            return Err(LLMError::NotConfigured);
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| LLMError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: cfg.endpoint.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            api_version: cfg.api_version.clone(),
            deployment: cfg.deployment_name.clone(),
            timeout_secs: cfg.timeout_secs,
        })
    }

    pub fn deployment(&self) -> &str {
        &self.deployment
    }

    pub fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, self.api_version
        )
    }
}

// Not Debug: keeps the api key out of logs.

#[async_trait]
impl ChatModel for AzureOpenAIClient {
    fn name(&self) -> &str {
        "azure_openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LLMError> {
        let body = AzureChatRequest { messages: &request.messages, params: request.params };
        let url = self.completions_url();

        tracing::debug!(
            "Calling Azure OpenAI deployment '{}' with {} messages",
            self.deployment,
            request.messages.len()
        );

        let response = self
            .http_client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LLMError::Timeout(self.timeout_secs)
                } else {
                    LLMError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Azure OpenAI returned {}: {}", status, error_text);
            return Err(LLMError::Api { status: status.as_u16(), message: error_text });
        }

        let parsed: AzureChatResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                LLMError::Timeout(self.timeout_secs)
            } else {
                LLMError::Parse(e.to_string())
            }
        })?;

        match parsed.into_content() {
            Some(content) if !content.trim().is_empty() => Ok(content),
            _ => Err(LLMError::EmptyResponse),
        }
    }
}
