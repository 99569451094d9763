use serde::Serialize;
use tracing::{info, warn};

use crate::config::{resolve_api_key, KeySource};
use crate::conversion::Provider;
use crate::error::ConverterError;

#[derive(Debug, Clone, Serialize)]
pub struct ProviderKeyStatus {
    pub provider: Provider,
    pub env_var: &'static str,
    /// `None` when no key is available.
    pub source: Option<KeySource>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub providers: Vec<ProviderKeyStatus>,
    pub any_key_available: bool,
}

#[tauri::command]
pub fn run_health_check() -> Result<HealthReport, String> {
    info!("Running health check");

    let providers: Vec<ProviderKeyStatus> = Provider::ALL
        .iter()
        .map(|&provider| {
            let source = match resolve_api_key(provider) {
                Ok((_, source)) => Some(source),
                Err(ConverterError::MissingApiKey { .. }) => None,
                Err(e) => {
                    warn!("Could not check {} API key: {}", provider, e);
                    None
                }
            };
            info!("{} API key source: {:?}", provider, source);
            ProviderKeyStatus {
                provider,
                env_var: provider.env_var(),
                source,
            }
        })
        .collect();

    let any_key_available = providers.iter().any(|p| p.source.is_some());

    Ok(HealthReport {
        providers,
        any_key_available,
    })
}
