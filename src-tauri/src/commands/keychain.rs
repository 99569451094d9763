use keyring::Entry;
use tracing::{info, warn};

use crate::config::{read_keychain, KEYCHAIN_USER};

fn entry_for(service: &str) -> Result<Entry, String> {
    Entry::new(service, KEYCHAIN_USER).map_err(|e| {
        warn!("Failed to create keyring entry for {}: {}", service, e);
        e.to_string()
    })
}

#[tauri::command]
pub fn set_api_key(service: &str, key: &str) -> Result<(), String> {
    info!("Setting API key for service: {}", service);
    if key.trim().is_empty() {
        return Err("API key must not be empty".to_string());
    }
    entry_for(service)?.set_password(key.trim()).map_err(|e| {
        warn!("Failed to set password for {}: {}", service, e);
        e.to_string()
    })
}

#[tauri::command]
pub fn get_api_key(service: &str) -> Result<Option<String>, String> {
    info!("Getting API key for service: {}", service);
    let key = read_keychain(service).map_err(|e| {
        warn!("Failed to get password for {}: {}", service, e);
        e.to_string()
    })?;
    if key.is_none() {
        info!("No API key found for service: {}", service);
    }
    Ok(key)
}

#[tauri::command]
pub fn delete_api_key(service: &str) -> Result<(), String> {
    info!("Deleting API key for service: {}", service);
    entry_for(service)?.delete_credential().map_err(|e| {
        warn!("Failed to delete credential for {}: {}", service, e);
        e.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_rejected() {
        assert!(set_api_key("unit-converter-test-empty", "   ").is_err());
    }

    #[test]
    fn test_saved_key_is_readable_from_a_fresh_entry() {
        let service = "unit-converter-test-roundtrip";
        if let Err(e) = set_api_key(service, " AIza-test ") {
            // No credential store on this host (e.g. headless CI without a secret service)
            eprintln!("skipping: keychain unavailable: {}", e);
            return;
        }
        let stored = read_keychain(service);
        let _ = delete_api_key(service);

        assert_eq!(stored.unwrap(), Some("AIza-test".to_string()));
    }
}
