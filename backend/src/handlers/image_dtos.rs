use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const MAX_PROMPT_CHARS: usize = 500;

/// The only ratio the site asks for. Anything else fails deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
}

impl AspectRatio {
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16:9",
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
}

impl GenerateImageRequest {
    /// Returns the trimmed prompt if it is usable.
    pub fn validated_prompt(&self) -> Result<&str, Error> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(Error::EmptyPrompt);
        }
        if prompt.chars().count() > MAX_PROMPT_CHARS {
            return Err(Error::PromptTooLong);
        }
        Ok(prompt)
    }
}

#[derive(Debug, Serialize)]
pub struct GeneratedImageResponse {
    /// `data:` URL, usable directly as an `<img src>`.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_defaults_to_widescreen() {
        let req: GenerateImageRequest = serde_json::from_str(r#"{"prompt":"gym"}"#).unwrap();
        assert_eq!(req.aspect_ratio, AspectRatio::Widescreen);

        let req: GenerateImageRequest =
            serde_json::from_str(r#"{"prompt":"gym","aspect_ratio":"16:9"}"#).unwrap();
        assert_eq!(req.aspect_ratio.as_str(), "16:9");
    }

    #[test]
    fn other_aspect_ratios_are_rejected() {
        let parsed = serde_json::from_str::<GenerateImageRequest>(r#"{"prompt":"gym","aspect_ratio":"4:3"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn prompt_is_trimmed_and_bounded() {
        let req = GenerateImageRequest {
            prompt: "  dark gym interior \n".to_string(),
            aspect_ratio: AspectRatio::Widescreen,
        };
        assert_eq!(req.validated_prompt().unwrap(), "dark gym interior");

        let blank = GenerateImageRequest {
            prompt: " \t ".to_string(),
            aspect_ratio: AspectRatio::Widescreen,
        };
        assert!(matches!(blank.validated_prompt(), Err(Error::EmptyPrompt)));

        let long = GenerateImageRequest {
            prompt: "x".repeat(MAX_PROMPT_CHARS + 1),
            aspect_ratio: AspectRatio::Widescreen,
        };
        assert!(matches!(long.validated_prompt(), Err(Error::PromptTooLong)));

        let at_limit = GenerateImageRequest {
            prompt: "é".repeat(MAX_PROMPT_CHARS),
            aspect_ratio: AspectRatio::Widescreen,
        };
        assert!(at_limit.validated_prompt().is_ok());
    }
}
