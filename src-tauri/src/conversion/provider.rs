//! Text-generation providers and the HTTP calls that reach them.
//!
//! Each provider gets one plain-text prompt and hands back whatever text the
//! model produced. Nothing in the reply is parsed or checked beyond pulling
//! the text out of the provider's JSON envelope.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::ConverterError;

/// Hosted model vendors the converter can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Gemini,
    Claude,
    OpenAi,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Gemini, Provider::Claude, Provider::OpenAi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::Claude => "claude",
            Provider::OpenAi => "openai",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini-1.5-flash-latest",
            Provider::Claude => "claude-3-5-haiku-latest",
            Provider::OpenAi => "gpt-4o-mini",
        }
    }

    /// Environment variable checked first for this provider's API key.
    pub fn env_var(&self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI_API_KEY",
            Provider::Claude => "ANTHROPIC_API_KEY",
            Provider::OpenAi => "OPENAI_API_KEY",
        }
    }

    /// Keychain service id used when the key was saved from Settings.
    pub fn keychain_service(&self) -> &'static str {
        match self {
            Provider::Gemini => "unit-converter-gemini-api",
            Provider::Claude => "unit-converter-claude-api",
            Provider::OpenAi => "unit-converter-openai-api",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(Provider::Gemini),
            "claude" => Ok(Provider::Claude),
            "openai" => Ok(Provider::OpenAi),
            other => Err(ConverterError::UnknownProvider(other.to_string())),
        }
    }
}

/// Something that turns a prompt into model text.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, ConverterError>> + Send;
}

/// Calls a hosted provider over HTTPS.
pub struct HttpGenerator {
    provider: Provider,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

impl HttpGenerator {
    pub fn new(provider: Provider, model: &str, api_key: String) -> Self {
        Self {
            provider,
            model: model.to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

impl TextGenerator for HttpGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, ConverterError>> + Send {
        async move {
            info!(
                "Sending conversion prompt to provider '{}' model '{}'",
                self.provider, self.model
            );
            let request = match self.provider {
                Provider::Gemini => self
                    .client
                    .post(gemini_generate_url(&self.model))
                    .header("x-goog-api-key", &self.api_key)
                    .json(&gemini_body(prompt)),
                Provider::Claude => self
                    .client
                    .post("https://api.anthropic.com/v1/messages")
                    .header("x-api-key", &self.api_key)
                    .header("anthropic-version", "2023-06-01")
                    .json(&claude_body(&self.model, prompt)),
                Provider::OpenAi => self
                    .client
                    .post("https://api.openai.com/v1/chat/completions")
                    .header("Authorization", format!("Bearer {}", self.api_key))
                    .json(&openai_body(&self.model, prompt)),
            };

            let response = request.send().await.map_err(|e| {
                let err = ConverterError::Network {
                    provider: self.provider.to_string(),
                    message: e.to_string(),
                };
                error!("{}", err);
                err
            })?;

            let body_text = handle_api_response(response, self.provider).await?;
            let json: serde_json::Value = serde_json::from_str(&body_text).map_err(|e| {
                let err = ConverterError::MalformedResponse {
                    provider: self.provider.to_string(),
                    message: format!("response is not JSON: {}", e),
                };
                error!("{}", err);
                err
            })?;

            let text = extract_text(self.provider, &json)?;
            info!(
                "Received {} chars from provider '{}'",
                text.len(),
                self.provider
            );
            Ok(text)
        }
    }
}

fn gemini_generate_url(model: &str) -> String {
    let model = model.strip_prefix("models/").unwrap_or(model);
    format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
        urlencoding::encode(model)
    )
}

fn gemini_body(prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [
            {"parts": [{"text": prompt}]}
        ]
    })
}

fn claude_body(model: &str, prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "model": model,
        "max_tokens": 1024,
        "messages": [
            {"role": "user", "content": prompt}
        ]
    })
}

fn openai_body(model: &str, prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "model": model,
        "messages": [
            {"role": "user", "content": prompt}
        ]
    })
}

/// Check status and read the body. Non-2xx bodies are truncated to 1 KiB.
async fn handle_api_response(
    response: reqwest::Response,
    provider: Provider,
) -> Result<String, ConverterError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<failed to read body>".to_string());
        let err = ConverterError::Api {
            provider: provider.to_string(),
            status: status.as_u16(),
            body: truncate_body(body, 1024),
        };
        error!("{}", err);
        return Err(err);
    }
    response.text().await.map_err(|e| ConverterError::Network {
        provider: provider.to_string(),
        message: format!("failed to read response body: {}", e),
    })
}

fn truncate_body(body: String, max: usize) -> String {
    if body.len() <= max {
        return body;
    }
    let mut end = max;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

/// Pull the generated text out of a provider's response envelope.
pub fn extract_text(provider: Provider, json: &serde_json::Value) -> Result<String, ConverterError> {
    let malformed = |message: &str| ConverterError::MalformedResponse {
        provider: provider.to_string(),
        message: message.to_string(),
    };

    match provider {
        // { "candidates": [{ "content": { "parts": [{ "text": "..." }] } }] }
        Provider::Gemini => {
            let parts = json["candidates"][0]["content"]["parts"]
                .as_array()
                .ok_or_else(|| malformed("no candidates in Gemini response"))?;
            let texts: Vec<&str> = parts.iter().filter_map(|p| p["text"].as_str()).collect();
            if texts.is_empty() {
                return Err(malformed("no text parts in Gemini response"));
            }
            Ok(texts.concat())
        }
        // { "content": [{ "type": "text", "text": "..." }] }
        Provider::Claude => json["content"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| malformed("no text content in Claude response")),
        // { "choices": [{ "message": { "content": "..." } }] }
        Provider::OpenAi => json["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| malformed("no content in OpenAI response")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_from_str() {
        assert_eq!("gemini".parse::<Provider>().unwrap(), Provider::Gemini);
        assert_eq!(" Claude ".parse::<Provider>().unwrap(), Provider::Claude);
        assert_eq!("openai".parse::<Provider>().unwrap(), Provider::OpenAi);
        assert!(matches!(
            "kimi".parse::<Provider>(),
            Err(ConverterError::UnknownProvider(_))
        ));
    }

    #[test]
    fn test_provider_serde_matches_as_str() {
        for provider in Provider::ALL {
            let json = serde_json::to_value(provider).unwrap();
            assert_eq!(json, provider.as_str());
        }
    }

    #[test]
    fn test_default_provider_is_gemini() {
        assert_eq!(Provider::default(), Provider::Gemini);
        assert_eq!(Provider::Gemini.env_var(), "GEMINI_API_KEY");
        assert_eq!(Provider::Gemini.default_model(), "gemini-1.5-flash-latest");
    }

    #[test]
    fn test_gemini_url_strips_models_prefix() {
        assert_eq!(
            gemini_generate_url("models/gemini-1.5-flash-latest"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash-latest:generateContent"
        );
    }

    #[test]
    fn test_extract_gemini_text_joins_parts() {
        let json = serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "5 meters is "}, {"text": "16.4042 feet."}]
                }
            }]
        });
        assert_eq!(
            extract_text(Provider::Gemini, &json).unwrap(),
            "5 meters is 16.4042 feet."
        );
    }

    #[test]
    fn test_extract_gemini_blocked_prompt_is_malformed() {
        let json = serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        });
        assert!(matches!(
            extract_text(Provider::Gemini, &json),
            Err(ConverterError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_extract_claude_text() {
        let json = serde_json::json!({
            "content": [{"type": "text", "text": "32 degrees fahrenheit"}]
        });
        assert_eq!(
            extract_text(Provider::Claude, &json).unwrap(),
            "32 degrees fahrenheit"
        );
        assert!(extract_text(Provider::Claude, &serde_json::json!({})).is_err());
    }

    #[test]
    fn test_extract_openai_text() {
        let json = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "1 kilogram"}}]
        });
        assert_eq!(extract_text(Provider::OpenAi, &json).unwrap(), "1 kilogram");
        assert!(extract_text(Provider::OpenAi, &serde_json::json!({"choices": []})).is_err());
    }

    #[test]
    fn test_truncate_body() {
        assert_eq!(truncate_body("short".to_string(), 1024), "short");
        let long = "x".repeat(2000);
        let truncated = truncate_body(long, 1024);
        assert_eq!(truncated.len(), 1027);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_body_respects_char_boundary() {
        let body = "é".repeat(10); // 2 bytes each
        let truncated = truncate_body(body, 5);
        assert_eq!(truncated, "éé...");
    }
}
