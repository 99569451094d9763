//! Provider selection and API key lookup.

use std::future::Future;

use keyring::Entry;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::conversion::{HttpGenerator, Provider, TextGenerator};
use crate::error::ConverterError;

/// Keychain account name shared by all provider entries.
pub const KEYCHAIN_USER: &str = "unit-converter";

/// Preferences file managed by tauri-plugin-store.
pub const PREFERENCES_FILE: &str = "preferences.json";

pub const PROVIDER_PREF_KEY: &str = "provider";
pub const MODEL_PREF_KEY: &str = "model";

/// Which provider and model conversions go to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterSettings {
    pub provider: Provider,
    pub model: String,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        let provider = Provider::default();
        Self {
            provider,
            model: provider.default_model().to_string(),
        }
    }
}

impl ConverterSettings {
    /// Build settings from stored preference values.
    ///
    /// Unknown providers fall back to the default provider; a missing or blank
    /// model falls back to the provider's default model.
    pub fn from_preferences(provider: Option<&str>, model: Option<&str>) -> Self {
        let provider = match provider.map(str::parse::<Provider>) {
            Some(Ok(p)) => p,
            Some(Err(e)) => {
                warn!("Ignoring stored provider preference: {}", e);
                Provider::default()
            }
            None => Provider::default(),
        };
        let model = model
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(provider.default_model())
            .to_string();
        Self { provider, model }
    }
}

/// Where an API key was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeySource {
    Environment,
    Keychain,
}

/// Pick the API key from the candidates, environment first.
pub fn resolve_api_key_with(
    provider: Provider,
    env_value: Option<String>,
    keychain_value: Option<String>,
) -> Result<(String, KeySource), ConverterError> {
    if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
        return Ok((key, KeySource::Environment));
    }
    if let Some(key) = keychain_value.filter(|k| !k.trim().is_empty()) {
        return Ok((key, KeySource::Keychain));
    }
    Err(ConverterError::MissingApiKey {
        provider: provider.to_string(),
        env_var: provider.env_var(),
    })
}

/// Read a stored key from the OS keychain. `Ok(None)` when nothing is stored.
pub fn read_keychain(service: &str) -> Result<Option<String>, ConverterError> {
    let entry = Entry::new(service, KEYCHAIN_USER)
        .map_err(|e| ConverterError::Keychain(e.to_string()))?;
    match entry.get_password() {
        Ok(password) => Ok(Some(password)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(ConverterError::Keychain(e.to_string())),
    }
}

/// Look up the API key for `provider` from the environment, then the keychain.
///
/// A keychain failure is returned as-is when the environment has no key.
pub fn resolve_api_key(provider: Provider) -> Result<(String, KeySource), ConverterError> {
    resolve_api_key_from(provider, std::env::var(provider.env_var()).ok(), || {
        read_keychain(provider.keychain_service())
    })
}

fn resolve_api_key_from(
    provider: Provider,
    env_value: Option<String>,
    keychain: impl FnOnce() -> Result<Option<String>, ConverterError>,
) -> Result<(String, KeySource), ConverterError> {
    let env_value = env_value.filter(|k| !k.trim().is_empty());
    let keychain_value = if env_value.is_some() {
        None
    } else {
        keychain().map_err(|e| {
            warn!("Keychain lookup failed for {}: {}", provider, e);
            e
        })?
    };
    resolve_api_key_with(provider, env_value, keychain_value)
}

/// How [`ConfiguredGenerator`] finds the key for a provider.
pub type KeyLookup = fn(Provider) -> Result<(String, KeySource), ConverterError>;

/// Generator that resolves the API key only when a call is actually made.
pub struct ConfiguredGenerator {
    settings: ConverterSettings,
    lookup: KeyLookup,
}

impl ConfiguredGenerator {
    pub fn new(settings: ConverterSettings) -> Self {
        Self::with_key_lookup(settings, resolve_api_key)
    }

    pub fn with_key_lookup(settings: ConverterSettings, lookup: KeyLookup) -> Self {
        Self { settings, lookup }
    }
}

impl TextGenerator for ConfiguredGenerator {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, ConverterError>> + Send {
        async move {
            let (api_key, source) = (self.lookup)(self.settings.provider)?;
            info!(
                "Using {} API key from {:?}",
                self.settings.provider, source
            );
            let generator =
                HttpGenerator::new(self.settings.provider, &self.settings.model, api_key);
            generator.generate(prompt).await
        }
    }
}
