use tauri::AppHandle;
use tauri_plugin_store::StoreExt;
use tracing::{info, warn};

use crate::config::{ConverterSettings, MODEL_PREF_KEY, PREFERENCES_FILE, PROVIDER_PREF_KEY};

fn read_string(app: &AppHandle, key: &str) -> Result<Option<String>, String> {
    let store = app.store(PREFERENCES_FILE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    Ok(store.get(key).and_then(|v| v.as_str().map(|s| s.to_string())))
}

fn write_strings(app: &AppHandle, pairs: &[(&str, &str)]) -> Result<(), String> {
    let store = app.store(PREFERENCES_FILE).map_err(|e| {
        warn!("Failed to open store: {}", e);
        e.to_string()
    })?;
    for (key, value) in pairs {
        store.set(*key, serde_json::json!(value));
    }
    store.save().map_err(|e| {
        warn!("Failed to save store: {}", e);
        e.to_string()
    })
}

/// Current provider settings, falling back to defaults when the store is unreadable.
pub fn load_settings(app: &AppHandle) -> ConverterSettings {
    let provider = read_string(app, PROVIDER_PREF_KEY).unwrap_or(None);
    let model = read_string(app, MODEL_PREF_KEY).unwrap_or(None);
    ConverterSettings::from_preferences(provider.as_deref(), model.as_deref())
}

#[tauri::command]
pub fn get_preference(app: AppHandle, key: &str) -> Result<Option<String>, String> {
    info!("Getting preference: {}", key);
    read_string(&app, key)
}

#[tauri::command]
pub fn set_preference(app: AppHandle, key: &str, value: &str) -> Result<(), String> {
    info!("Setting preference: {} = {}", key, value);
    write_strings(&app, &[(key, value)])
}

#[tauri::command]
pub fn get_converter_settings(app: AppHandle) -> ConverterSettings {
    load_settings(&app)
}

#[tauri::command]
pub fn set_converter_settings(app: AppHandle, settings: ConverterSettings) -> Result<(), String> {
    let model = settings.model.trim();
    let model = if model.is_empty() {
        settings.provider.default_model()
    } else {
        model
    };
    info!("Setting converter provider {} with model {}", settings.provider, model);
    write_strings(
        &app,
        &[
            (PROVIDER_PREF_KEY, settings.provider.as_str()),
            (MODEL_PREF_KEY, model),
        ],
    )
}
