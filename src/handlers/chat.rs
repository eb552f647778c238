use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{ChatRequest, ChatResponse, SessionResponse};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::models::chat::ChatMessage;
use crate::services::chatbot::{classify, respond_to_message};
use crate::AppState;

/// One-shot reply with no transcript kept server side.
pub async fn chat(
    AppJson(body): AppJson<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    body.validate()?;

    let topic = classify(&body.message);
    tracing::debug!(
        topic = ?topic,
        has_context = body.context.is_some(),
        "Chat message routed"
    );

    Ok(Json(ChatResponse {
        reply: respond_to_message(&body.message),
        topic,
    }))
}

pub async fn create_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let (session_id, greeting) = state.chats.create().await;
    tracing::info!(session_id = %session_id, "Chat session opened");

    Json(SessionResponse {
        session_id,
        messages: vec![greeting],
    })
}

pub async fn post_message(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    AppJson(body): AppJson<ChatRequest>,
) -> AppResult<Json<ChatMessage>> {
    body.validate()?;

    let reply = state
        .chats
        .exchange(session_id, &body.message)
        .await
        .ok_or_else(|| AppError::NotFound("Chat session not found".into()))?;

    tracing::debug!(
        session_id = %session_id,
        topic = ?classify(&body.message),
        "Chat reply appended"
    );

    Ok(Json(reply))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<SessionResponse>> {
    let messages = state
        .chats
        .transcript(session_id)
        .await
        .ok_or_else(|| AppError::NotFound("Chat session not found".into()))?;

    Ok(Json(SessionResponse {
        session_id,
        messages,
    }))
}
