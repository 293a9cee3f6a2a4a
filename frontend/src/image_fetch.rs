//! Client side of the decorative image pipeline.
//!
//! The backend owns the generative-image credential; this module only sends a
//! prompt and gets back a `data:` URL. Every failure ends up as `None`, which
//! callers treat as final.

use gloo_net::http::Request;
use log::{error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

pub const ASPECT_RATIO: &str = "16:9";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ImageRequest {
    pub prompt: String,
    pub aspect_ratio: &'static str,
}

impl ImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            aspect_ratio: ASPECT_RATIO,
        }
    }
}

#[derive(Deserialize)]
struct GeneratedImage {
    image: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to image service failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("image service answered with status {0}")]
    Status(u16),
    #[error("image service returned an empty payload")]
    EmptyPayload,
}

/// What a deferred image slot is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageResult {
    Pending,
    Ready(String),
    Unavailable,
}

impl ImageResult {
    /// Applies the adapter's answer. Only `Pending` moves; a settled result is returned as is.
    pub fn settle(&self, payload: Option<String>) -> ImageResult {
        match self {
            ImageResult::Pending => match payload {
                Some(src) if !src.is_empty() => ImageResult::Ready(src),
                _ => ImageResult::Unavailable,
            },
            settled => settled.clone(),
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, ImageResult::Pending)
    }
}

/// Collapses a fetch outcome to "non-empty payload or nothing", logging the failure.
pub fn settle_fetch(result: Result<String, FetchError>) -> Option<String> {
    match result {
        Ok(src) if !src.trim().is_empty() => Some(src),
        Ok(_) => {
            error!("Image generation failed: {}", FetchError::EmptyPayload);
            None
        }
        Err(e) => {
            error!("Image generation failed: {}", e);
            None
        }
    }
}

async fn request_image(request: &ImageRequest) -> Result<String, FetchError> {
    let response = Request::post(&config::image_endpoint())
        .json(request)?
        .send()
        .await?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body: GeneratedImage = response.json().await?;
    if body.image.trim().is_empty() {
        return Err(FetchError::EmptyPayload);
    }
    Ok(body.image)
}

pub async fn fetch_image(prompt: &str) -> Option<String> {
    let request = ImageRequest::new(prompt);
    info!("Requesting generated image: {}", request.prompt);
    settle_fetch(request_image(&request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_fixed_aspect_ratio() {
        let request = ImageRequest::new("golden dumbbells");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "prompt": "golden dumbbells", "aspect_ratio": "16:9" })
        );
    }

    #[test]
    fn settle_fetch_keeps_only_non_empty_payloads() {
        assert_eq!(
            settle_fetch(Ok("data:image/png;base64,aGk=".to_string())),
            Some("data:image/png;base64,aGk=".to_string())
        );
        assert_eq!(settle_fetch(Ok(String::new())), None);
        assert_eq!(settle_fetch(Ok("   ".to_string())), None);
        assert_eq!(settle_fetch(Err(FetchError::Status(502))), None);
        assert_eq!(settle_fetch(Err(FetchError::EmptyPayload)), None);
    }

    #[test]
    fn pending_settles_to_ready_or_unavailable() {
        assert_eq!(
            ImageResult::Pending.settle(Some("data:x".to_string())),
            ImageResult::Ready("data:x".to_string())
        );
        assert_eq!(ImageResult::Pending.settle(None), ImageResult::Unavailable);
        assert_eq!(ImageResult::Pending.settle(Some(String::new())), ImageResult::Unavailable);
    }

    #[test]
    fn settled_results_never_change() {
        let ready = ImageResult::Ready("data:first".to_string());
        assert_eq!(ready.settle(None), ready);
        assert_eq!(ready.settle(Some("data:second".to_string())), ready);

        let unavailable = ImageResult::Unavailable;
        assert_eq!(unavailable.settle(Some("data:late".to_string())), ImageResult::Unavailable);
    }

    #[test]
    fn only_pending_is_unsettled() {
        assert!(!ImageResult::Pending.is_settled());
        assert!(ImageResult::Ready("data:x".to_string()).is_settled());
        assert!(ImageResult::Unavailable.is_settled());
    }

    #[test]
    fn simulated_network_error_ends_unavailable_not_loading() {
        let outcome = settle_fetch(Err(FetchError::Status(503)));
        let state = ImageResult::Pending.settle(outcome);
        assert_eq!(state, ImageResult::Unavailable);
        assert!(state.is_settled());
    }
}
