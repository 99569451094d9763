use tracing::info;

use crate::catalog;

/// Category names in display order.
#[tauri::command]
pub fn list_categories() -> Vec<String> {
    catalog::category_names()
        .into_iter()
        .map(String::from)
        .collect()
}

/// Units offered for a category, in display order.
#[tauri::command]
pub fn list_units(category: &str) -> Result<Vec<String>, String> {
    let units = catalog::units_for(category)?;
    info!("Listing {} units for category: {}", units.len(), category);
    Ok(units.iter().map(|u| u.to_string()).collect())
}
