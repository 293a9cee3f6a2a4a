use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Error;
use crate::handlers::image_dtos::AspectRatio;

pub const STYLE_PREFIX: &str =
    "Professional high-end luxury fitness photography, dramatic lighting, cinematic, 8k";
const DEFAULT_MIME_TYPE: &str = "image/png";

pub fn styled_prompt(prompt: &str) -> String {
    format!("{}: {}", STYLE_PREFIX, prompt)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    /// Base64, exactly as the service returned it.
    pub data: String,
}

impl InlineImage {
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, aspect_ratio: AspectRatio) -> Result<InlineImage, Error>;
}

// Request body for models/{model}:generateContent

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "imageConfig")]
    image_config: ImageConfig,
}

#[derive(Debug, Serialize)]
struct ImageConfig {
    #[serde(rename = "aspectRatio")]
    aspect_ratio: &'static str,
}

// Response body. Everything is optional; the service drops empty fields.

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: Option<String>,
    data: String,
}

/// Picks the first inline image of the first candidate and checks that it
/// decodes to a non-empty byte string.
fn extract_inline_image(response: GenerateContentResponse) -> Result<InlineImage, Error> {
    let inline = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.inline_data))
        .ok_or(Error::NoImage)?;

    let bytes = STANDARD.decode(inline.data.trim())?;
    if bytes.is_empty() {
        return Err(Error::NoImage);
    }

    Ok(InlineImage {
        mime_type: inline
            .mime_type
            .filter(|m| m.starts_with("image/"))
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string()),
        data: inline.data.trim().to_string(),
    })
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.image_timeout)
            .build()?;

        Ok(Self {
            http,
            api_key: config.gemini_api_key.clone(),
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.gemini_base_url, config.image_model
            ),
        })
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, aspect_ratio: AspectRatio) -> Result<InlineImage, Error> {
        let text = styled_prompt(prompt);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![TextPart { text: &text }],
            }],
            generation_config: GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: aspect_ratio.as_str(),
                },
            },
        };

        tracing::debug!("Requesting image from {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let image = extract_inline_image(parsed)?;
        tracing::info!("Generated {} image ({} base64 chars)", image.mime_type, image.data.len());
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn style_prefix_wraps_the_prompt() {
        assert_eq!(
            styled_prompt("golden barbells"),
            "Professional high-end luxury fitness photography, dramatic lighting, cinematic, 8k: golden barbells"
        );
    }

    #[test]
    fn request_body_matches_generate_content_shape() {
        let text = styled_prompt("gym");
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![TextPart { text: &text }],
            }],
            generation_config: GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: AspectRatio::Widescreen.as_str(),
                },
            },
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "contents": [{ "parts": [{ "text": text }] }],
                "generationConfig": { "imageConfig": { "aspectRatio": "16:9" } }
            })
        );
    }

    #[test]
    fn finds_inline_image_after_text_parts() {
        let response = parse(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is your image" },
                        { "inlineData": { "mimeType": "image/jpeg", "data": "aGVsbG8=" } }
                    ]
                }
            }]
        }));

        let image = extract_inline_image(response).unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.to_data_url(), "data:image/jpeg;base64,aGVsbG8=");
    }

    #[test]
    fn missing_mime_type_falls_back_to_png() {
        let response = parse(json!({
            "candidates": [{ "content": { "parts": [{ "inlineData": { "data": "aGVsbG8=" } }] } }]
        }));

        assert_eq!(extract_inline_image(response).unwrap().mime_type, "image/png");
    }

    #[test]
    fn text_only_or_empty_responses_have_no_image() {
        let text_only = parse(json!({
            "candidates": [{ "content": { "parts": [{ "text": "I can't draw that" }] } }]
        }));
        assert!(matches!(extract_inline_image(text_only), Err(Error::NoImage)));

        assert!(matches!(extract_inline_image(parse(json!({}))), Err(Error::NoImage)));

        let blocked = parse(json!({ "candidates": [{ "finishReason": "SAFETY" }] }));
        assert!(matches!(extract_inline_image(blocked), Err(Error::NoImage)));
    }

    #[test]
    fn payload_must_be_non_empty_base64() {
        let empty = parse(json!({
            "candidates": [{ "content": { "parts": [{ "inlineData": { "mimeType": "image/png", "data": "" } }] } }]
        }));
        assert!(matches!(extract_inline_image(empty), Err(Error::NoImage)));

        let garbage = parse(json!({
            "candidates": [{ "content": { "parts": [{ "inlineData": { "mimeType": "image/png", "data": "not base64!" } }] } }]
        }));
        assert!(matches!(extract_inline_image(garbage), Err(Error::InvalidPayload(_))));
    }
}
