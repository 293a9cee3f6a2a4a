use std::sync::Arc;

use axum::{extract::State, Json};

use crate::error::Error;
use crate::handlers::image_dtos::{GenerateImageRequest, GeneratedImageResponse};
use crate::AppState;

pub async fn generate_image(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateImageRequest>,
) -> Result<Json<GeneratedImageResponse>, Error> {
    let prompt = request.validated_prompt()?;
    tracing::info!("Generating image for prompt: {}", prompt);

    let image = state.image_generator.generate(prompt, request.aspect_ratio).await?;

    Ok(Json(GeneratedImageResponse {
        image: image.to_data_url(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::gemini::{InlineImage, MockImageGenerator};
    use crate::handlers::image_dtos::AspectRatio;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn router_with(generator: MockImageGenerator) -> Router {
        crate::api_router(Arc::new(AppState {
            image_generator: Arc::new(generator),
        }))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/images/generate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn returns_data_url_from_generator() {
        let mut generator = MockImageGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt, ratio| {
                prompt.to_string() == "dark gym interior" && *ratio == AspectRatio::Widescreen
            })
            .times(1)
            .returning(|_, _| {
                Ok(InlineImage {
                    mime_type: "image/png".to_string(),
                    data: "aGVsbG8=".to_string(),
                })
            });

        let response = router_with(generator)
            .oneshot(post_json(r#"{"prompt":"  dark gym interior ","aspect_ratio":"16:9"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["image"], "data:image/png;base64,aGVsbG8=");
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_bad_gateway() {
        let mut generator = MockImageGenerator::new();
        generator.expect_generate().times(1).returning(|_, _| {
            Err(Error::Upstream {
                status: 503,
                body: "overloaded".to_string(),
            })
        });

        let response = router_with(generator)
            .oneshot(post_json(r#"{"prompt":"barbell"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(response).await;
        assert_eq!(body["error"], "image service returned 503");
    }

    #[tokio::test]
    async fn missing_image_maps_to_bad_gateway() {
        let mut generator = MockImageGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_, _| Err(Error::NoImage));

        let response = router_with(generator)
            .oneshot(post_json(r#"{"prompt":"barbell"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn blank_prompt_is_rejected_without_calling_generator() {
        let mut generator = MockImageGenerator::new();
        generator.expect_generate().never();

        let response = router_with(generator)
            .oneshot(post_json(r#"{"prompt":"   "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "prompt must not be empty");
    }

    #[tokio::test]
    async fn unsupported_aspect_ratio_is_rejected() {
        let mut generator = MockImageGenerator::new();
        generator.expect_generate().never();

        let response = router_with(generator)
            .oneshot(post_json(r#"{"prompt":"gym","aspect_ratio":"1:1"}"#))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn health_check_answers_ok() {
        let response = router_with(MockImageGenerator::new())
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }
}
