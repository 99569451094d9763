use tauri::State;

use crate::history::HistoryView;
use crate::session::SessionState;

/// Conversion history for the sidebar, newest first.
#[tauri::command]
pub async fn get_history(state: State<'_, SessionState>) -> Result<HistoryView, String> {
    Ok(state.history_view().await)
}
