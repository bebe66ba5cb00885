// src/routes/mod.rs
pub mod chat;

use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

pub fn create_router() -> Router<SharedState> {
    let api_v1 = Router::new().route("/chat", post(chat_handler));

    Router::new()
        .nest("/api/v1", api_v1)
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
