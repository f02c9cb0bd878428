use axum::{Json, extract::State};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::AppState;
use crate::models::{HealthResponse, PublicConfigResponse};
use crate::utils::{ApiError, ApiErrorResponse, ApiResult};

pub const SERVICE_NAME: &str = "Zoota AI Backend";

// Liveness and dependency status
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service status", body = HealthResponse),
        (status = 500, description = "Status could not be computed", body = ApiErrorResponse)
    ),
    tag = "System"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> ApiResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        azure_configured: state.chat_service.model_available(),
        config_loaded: state.config_loaded,
        database_enabled: state.chat_service.knowledge_available(),
    }))
}

// Public, non-secret assistant settings for the chat widget
#[utoipa::path(
    get,
    path = "/api/config",
    responses(
        (status = 200, description = "Public configuration", body = PublicConfigResponse),
        (status = 500, description = "Configuration not loaded", body = ApiErrorResponse)
    ),
    tag = "System"
)]
pub async fn public_config(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PublicConfigResponse>> {
    if !state.config_loaded {
        return Err(ApiError::ConfigurationMissing);
    }

    let assistant = &state.config.assistant;
    Ok(Json(PublicConfigResponse {
        name: assistant.name.clone(),
        version: assistant.version.clone(),
        welcome_message: assistant.welcome_message.clone(),
        azure_configured: state.chat_service.model_available(),
    }))
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(crate::ApiDoc::openapi())
}
