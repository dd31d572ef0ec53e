//! HTTP client for the Gemini generative API.
//!
//! One request per call, no retry, no streaming. The caller owns prompt
//! construction and response interpretation; this layer only moves JSON.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::error::{ForgeError, Result};
use crate::profile::AspectRatio;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const TEXT_MODEL: &str = "gemini-2.5-flash";
const IMAGE_MODEL: &str = "imagen-3.0-generate-002";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ForgeError::InvalidInput(format!(
                "missing API key; set {API_KEY_ENV} in the environment"
            )));
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, api_key })
    }

    /// Client from the conventional environment variable.
    pub fn from_env() -> Result<Self> {
        Self::new(std::env::var(API_KEY_ENV).unwrap_or_default())
    }

    /// Single text completion for `prompt`.
    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        self.generate(json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        }))
        .await
    }

    /// Text completion over an inline file plus a prompt, steered by a
    /// system instruction.
    pub async fn generate_text_with_file(
        &self,
        prompt: &str,
        system_instruction: &str,
        file_bytes: &[u8],
        mime_type: &str,
    ) -> Result<String> {
        self.generate(json!({
            "contents": [{
                "parts": [
                    { "inlineData": { "mimeType": mime_type, "data": STANDARD.encode(file_bytes) } },
                    { "text": prompt }
                ]
            }],
            "systemInstruction": { "parts": [{ "text": system_instruction }] }
        }))
        .await
    }

    async fn generate(&self, payload: Value) -> Result<String> {
        let url =
            format!("{API_BASE}/models/{TEXT_MODEL}:generateContent?key={}", self.api_key);
        tracing::debug!(model = TEXT_MODEL, "sending text generation request");

        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ForgeError::AiResponse(format!(
                "model returned {status}: {}",
                truncate(&body, 320)
            )));
        }

        let body: Value = response.json().await?;
        let text = body["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"].as_array())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();
        if text.is_empty() {
            return Err(ForgeError::AiResponse(
                "model returned no text candidates".to_string(),
            ));
        }
        tracing::debug!(chars = text.len(), "received text response");
        Ok(text)
    }

    /// Single JPEG image for `prompt` at the requested aspect ratio.
    pub async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<Vec<u8>> {
        let url = format!("{API_BASE}/models/{IMAGE_MODEL}:predict?key={}", self.api_key);
        let payload = json!({
            "instances": [{ "prompt": prompt }],
            "parameters": {
                "sampleCount": 1,
                "outputMimeType": "image/jpeg",
                "aspectRatio": aspect_ratio.api_value(),
            }
        });
        tracing::debug!(model = IMAGE_MODEL, ratio = aspect_ratio.api_value(), "sending image generation request");

        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ForgeError::AiResponse(format!(
                "image model returned {status}: {}",
                truncate(&body, 320)
            )));
        }

        let body: Value = response.json().await?;
        let encoded = body["predictions"]
            .as_array()
            .and_then(|predictions| predictions.first())
            .and_then(|prediction| prediction["bytesBase64Encoded"].as_str())
            .ok_or_else(|| {
                ForgeError::AiResponse(
                    "model did not generate an image; try a different prompt".to_string(),
                )
            })?;
        STANDARD
            .decode(encoded)
            .map_err(|e| ForgeError::AiResponse(format!("invalid image payload: {e}")))
    }
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_api_key_rejected() {
        assert!(matches!(GeminiClient::new("  "), Err(ForgeError::InvalidInput(_))));
        assert!(GeminiClient::new("key").is_ok());
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("hi", 10), "hi");
    }
}
