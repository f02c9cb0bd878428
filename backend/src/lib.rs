//! Zoota AI backend
//!
//! HTTP backend for the website chat widget. Messages go to a hosted model
//! with a per-request system prompt; when the model is missing or fails, a
//! rule-based responder answers instead.

pub mod config;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(test)]
mod tests;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::Config;
use crate::services::{AzureOpenAIClient, ChatModel, ChatService, KnowledgeSource, SqlKnowledgeSource};

/// Application context shared by every request.
///
/// Built once at startup and never mutated afterwards.
pub struct AppState {
    pub config: Arc<Config>,
    /// A configuration file was found and read
    pub config_loaded: bool,
    pub chat_service: ChatService,
}

impl AppState {
    pub fn new(
        config: Config,
        model: Option<Arc<dyn ChatModel>>,
        knowledge: Option<Arc<dyn KnowledgeSource>>,
    ) -> Self {
        let chat_service = ChatService::new(&config, model, knowledge);
        Self { config_loaded: config.is_loaded(), config: Arc::new(config), chat_service }
    }

    /// Create the model client and knowledge pool described by `config`.
    ///
    /// Neither is required: an unusable collaborator is logged and left out.
    pub async fn init(config: Config) -> Self {
        let model: Option<Arc<dyn ChatModel>> = if config.azure_openai.is_configured() {
            match AzureOpenAIClient::new(&config.azure_openai) {
                Ok(client) => {
                    tracing::info!(
                        "Azure OpenAI client initialized (deployment: {})",
                        client.deployment()
                    );
                    Some(Arc::new(client) as Arc<dyn ChatModel>)
                },
                Err(e) => {
                    tracing::warn!("Failed to initialize Azure OpenAI client: {}", e);
                    None
                },
            }
        } else {
            None
        };

        let knowledge: Option<Arc<dyn KnowledgeSource>> = if config.database.is_usable() {
            match SqlKnowledgeSource::connect(&config.database).await {
                Ok(source) => Some(Arc::new(source) as Arc<dyn KnowledgeSource>),
                Err(e) => {
                    tracing::warn!(
                        "Database connection failed (will use config-based knowledge): {}",
                        e
                    );
                    None
                },
            }
        } else {
            tracing::info!("Knowledge database disabled or not configured");
            None
        };

        Self::new(config, model, knowledge)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::system::health,
        handlers::system::public_config,
        handlers::chat::chat,
    ),
    components(schemas(
        models::ChatRequest,
        models::HistoryEntry,
        models::ChatResult,
        models::ChatSource,
        models::ChatMessage,
        models::Role,
        models::HealthResponse,
        models::PublicConfigResponse,
        utils::ApiErrorResponse,
    )),
    tags(
        (name = "Chat", description = "Chat assistant"),
        (name = "System", description = "Health and public settings")
    ),
    info(title = "Zoota AI Backend", description = "Chat backend for the OrkinosAI website")
)]
pub struct ApiDoc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::system::health))
        .route("/api/chat", post(handlers::chat::chat))
        .route("/api/config", get(handlers::system::public_config))
        .route("/api-docs/openapi.json", get(handlers::system::openapi_json))
        .layer(CatchPanicLayer::custom(utils::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
