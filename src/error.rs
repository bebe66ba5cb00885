// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::model_client::ModelError;

/// Application-level errors with HTTP status code mapping.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("model call failed: {0}")]
    Model(#[from] ModelError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Model(e) => {
                tracing::error!("model call failed: {e}");
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
