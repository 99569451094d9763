//! Tauri command for running a conversion.

use tauri::{AppHandle, State};
use tracing::{error, info};

use super::config::load_settings;
use crate::config::ConfiguredGenerator;
use crate::conversion::{ConversionOutcome, ConversionRequest};
use crate::session::SessionState;

/// Convert a value between two units of a category.
///
/// Returns `same_units` without any network call when both units match.
/// Provider failures are returned as errors; nothing is retried.
#[tauri::command]
pub async fn convert_units(
    app: AppHandle,
    state: State<'_, SessionState>,
    request: ConversionRequest,
) -> Result<ConversionOutcome, String> {
    let settings = load_settings(&app);
    info!(
        "Conversion requested: {} {} -> {} ({}) via {}/{}",
        request.value,
        request.from_unit,
        request.to_unit,
        request.category,
        settings.provider,
        settings.model
    );

    let generator = ConfiguredGenerator::new(settings);
    state
        .convert(&generator, &request)
        .await
        .map_err(|e| {
            error!("Conversion failed: {}", e);
            e.into()
        })
}
