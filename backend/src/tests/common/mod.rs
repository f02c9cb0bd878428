// Common test utilities and helpers

use async_trait::async_trait;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::AppState;
use crate::config::Config;
use crate::services::knowledge_service::KnowledgeSource;
use crate::services::llm::{ChatModel, CompletionRequest, LLMError};

/// Create an in-memory SQLite database with the knowledge schema
pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(3))
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Configuration as if read from a file, with a known service list
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.source = Some(PathBuf::from("conf/config.toml"));
    config.assistant.name = "Zoota AI Assistant".to_string();
    config.assistant.welcome_message = "Hi! I'm Zoota.".to_string();
    config.assistant.system_prompt = "You are Zoota, the OrkinosAI assistant.".to_string();
    config.assistant.knowledge_base.services = vec![
        "Web Development".to_string(),
        "AI & Machine Learning".to_string(),
        "Azure Cloud Solutions".to_string(),
    ];
    config
}

/// How the fake model answers
pub enum FakeBehavior {
    Reply(String),
    Fail,
}

/// Records every request it receives
pub struct FakeModel {
    behavior: FakeBehavior,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeModel {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self { behavior: FakeBehavior::Reply(text.to_string()), requests: Mutex::new(Vec::new()) })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { behavior: FakeBehavior::Fail, requests: Mutex::new(Vec::new()) })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> CompletionRequest {
        self.requests.lock().unwrap().last().cloned().expect("model was never called")
    }
}

#[async_trait]
impl ChatModel for FakeModel {
    fn name(&self) -> &str {
        "fake"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LLMError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.behavior {
            FakeBehavior::Reply(text) => Ok(text.clone()),
            FakeBehavior::Fail => {
                Err(LLMError::Api { status: 503, message: "Service Unavailable".to_string() })
            },
        }
    }
}

/// Knowledge source with a fixed answer
pub struct FakeKnowledge(pub Option<String>);

#[async_trait]
impl KnowledgeSource for FakeKnowledge {
    async fn fetch_context(&self) -> Option<String> {
        self.0.clone()
    }
}

pub fn state_without_model() -> Arc<AppState> {
    Arc::new(AppState::new(test_config(), None, None))
}

pub fn state_with_model(model: Arc<FakeModel>) -> Arc<AppState> {
    Arc::new(AppState::new(test_config(), Some(model as Arc<dyn ChatModel>), None))
}
