use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::handlers::image_dtos::MAX_PROMPT_CHARS;

#[derive(Debug, Error)]
pub enum Error {
    #[error("prompt must not be empty")]
    EmptyPrompt,
    #[error("prompt is longer than {} characters", MAX_PROMPT_CHARS)]
    PromptTooLong,
    #[error("image service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("image service returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("image service response contained no image")]
    NoImage,
    #[error("image payload is not valid base64: {0}")]
    InvalidPayload(#[from] base64::DecodeError),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::EmptyPrompt | Error::PromptTooLong => StatusCode::BAD_REQUEST,
            Error::Transport(_) | Error::Upstream { .. } | Error::NoImage | Error::InvalidPayload(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Image generation failed: {}", self);
        }

        // Upstream bodies stay in the server log.
        let message = match &self {
            Error::Upstream { status, .. } => format!("image service returned {}", status),
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
