use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::resolve_api_key;
use crate::conversion::Provider;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
}

/// Claude and OpenAI: `{ "data": [{ "id": ..., "display_name": ... }] }`
#[derive(Debug, Deserialize)]
struct ModelsResponse {
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
    #[serde(default)]
    display_name: Option<String>,
}

/// Gemini: `{ "models": [{ "name": "models/...", "displayName": ..., "supportedGenerationMethods": [...] }] }`
#[derive(Debug, Deserialize)]
struct GeminiModelsResponse {
    #[serde(default)]
    models: Vec<GeminiModelEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiModelEntry {
    name: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

fn parse_models(provider: Provider, body: &str) -> Result<Vec<ModelInfo>, String> {
    let mut result: Vec<ModelInfo> = match provider {
        Provider::Gemini => {
            let models: GeminiModelsResponse = serde_json::from_str(body)
                .map_err(|e| format!("Failed to parse response: {}", e))?;
            models
                .models
                .into_iter()
                .filter(|m| {
                    m.supported_generation_methods
                        .iter()
                        .any(|method| method == "generateContent")
                })
                .map(|m| {
                    let id = m
                        .name
                        .strip_prefix("models/")
                        .unwrap_or(&m.name)
                        .to_string();
                    let name = m.display_name.unwrap_or_else(|| id.clone());
                    ModelInfo { id, name }
                })
                .collect()
        }
        Provider::Claude | Provider::OpenAi => {
            let models: ModelsResponse = serde_json::from_str(body)
                .map_err(|e| format!("Failed to parse response: {}", e))?;
            models
                .data
                .into_iter()
                .map(|m| {
                    let name = m.display_name.unwrap_or_else(|| m.id.clone());
                    ModelInfo { id: m.id, name }
                })
                .collect()
        }
    };

    result.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(result)
}

#[tauri::command]
pub async fn list_models(provider: String) -> Result<Vec<ModelInfo>, String> {
    info!("Fetching models for provider: {}", provider);
    let provider: Provider = provider.parse()?;
    let (api_key, _) = resolve_api_key(provider)?;
    let client = reqwest::Client::new();

    let request = match provider {
        Provider::Gemini => client
            .get("https://generativelanguage.googleapis.com/v1beta/models")
            .header("x-goog-api-key", &api_key),
        Provider::Claude => client
            .get("https://api.anthropic.com/v1/models")
            .header("x-api-key", &api_key)
            .header("anthropic-version", "2023-06-01"),
        Provider::OpenAi => client
            .get("https://api.openai.com/v1/models")
            .header("Authorization", format!("Bearer {}", api_key)),
    };

    let resp = request
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        warn!("Models API error for {} ({}): {}", provider, status, body);
        return Err(format!("API error ({})", status));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    let models = parse_models(provider, &body)?;
    info!("Found {} models for {}", models.len(), provider);
    Ok(models)
}
