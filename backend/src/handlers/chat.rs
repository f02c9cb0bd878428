use axum::{Json, extract::State, extract::rejection::JsonRejection};
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

use crate::AppState;
use crate::models::{ChatMessage, ChatRequest, ChatResult};
use crate::utils::{ApiError, ApiErrorResponse, ApiResult};

// Answer one chat turn
#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant answer", body = ChatResult),
        (status = 400, description = "Empty message or malformed body", body = ApiErrorResponse),
        (status = 500, description = "Internal server error", body = ApiErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<ChatResult>> {
    let Json(request) = payload.map_err(|rejection| ApiError::invalid_data(rejection.body_text()))?;

    let history: Vec<ChatMessage> = request
        .history
        .unwrap_or_default()
        .into_iter()
        .map(ChatMessage::from)
        .collect();
    let message = request.message.unwrap_or_default();

    let span = tracing::info_span!("chat", request_id = %Uuid::new_v4());
    let result = state.chat_service.handle(&message, history).instrument(span).await?;

    tracing::debug!("Chat answered from source={}", result.source.as_str());
    Ok(Json(result))
}
