use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let reply = state.agent.handle_message(&payload.message).await?;
    Ok(Json(ChatResponse { message: reply }))
}
