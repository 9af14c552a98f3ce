//! Browser local storage helpers
//!
//! All functions are no-ops (or return `None`) when storage is unavailable,
//! e.g. in private browsing or outside a browser.

use contracts::domain::common::EntityId;
use serde::{de::DeserializeOwned, Serialize};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Key of a per-record cache entry, e.g. `client_42`
pub fn cache_key(prefix: &str, id: EntityId) -> String {
    format!("{}_{}", prefix, id)
}

/// Store a record so a detail view can be rendered without a round trip
pub fn cache_entity<T: Serialize>(prefix: &str, id: EntityId, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => set_item(&cache_key(prefix, id), &json),
        Err(e) => log::warn!("Failed to cache {}: {}", cache_key(prefix, id), e),
    }
}

/// Read back a record written by [`cache_entity`]; corrupt entries are dropped
pub fn cached_entity<T: DeserializeOwned>(prefix: &str, id: EntityId) -> Option<T> {
    let key = cache_key(prefix, id);
    let json = get_item(&key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Dropping unreadable cache entry {}: {}", key, e);
            remove_item(&key);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key() {
        assert_eq!(cache_key("client", 42), "client_42");
    }
}
