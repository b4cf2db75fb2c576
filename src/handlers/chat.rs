//! Chat endpoint: advisor response plus a chat-history write.

use crate::dtos::{ChatRequest, ChatResponse};
use crate::error::AppError;
use crate::models::ChatExchange;
use crate::startup::AppState;
use axum::{extract::State, Json};
use validator::Validate;

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    request.validate()?;

    let response = state.advisor.respond(&request.message).await;

    let exchange = ChatExchange::new(request.message, response.clone());
    let timestamp = exchange.timestamp;
    state.store.record_chat(exchange).await?;

    Ok(Json(ChatResponse {
        response,
        timestamp,
    }))
}
