pub mod catalog;
mod commands;
pub mod config;
pub mod conversion;
pub mod error;
pub mod history;
pub mod session;

pub use conversion::{ConversionOutcome, ConversionRequest, Provider, TextGenerator};
pub use error::ConverterError;
pub use history::{ConversionHistory, HistoryEntry, HistoryView};
pub use session::{ConversionSession, SessionState};

pub fn run() {
    // A missing .env is fine; keys can also come from the shell or the keychain.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match dotenv {
        Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to load .env: {}", e),
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .manage(SessionState::new())
        .invoke_handler(tauri::generate_handler![
            commands::catalog::list_categories,
            commands::catalog::list_units,
            commands::convert::convert_units,
            commands::history::get_history,
            commands::keychain::set_api_key,
            commands::keychain::get_api_key,
            commands::keychain::delete_api_key,
            commands::config::get_preference,
            commands::config::set_preference,
            commands::config::get_converter_settings,
            commands::config::set_converter_settings,
            commands::models::list_models,
            commands::health::run_health_check,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
