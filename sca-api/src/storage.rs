//! Browser local-storage persistence for the analysis pages.
//!
//! The keys are fixed and shared with earlier versions of the site, so
//! an analysis completed before a deploy still unlocks the dashboard
//! after it.

/// Last analyzed channel ID.
pub const KEY_LAST_CHANNEL_ID: &str = "lastChannelId";
/// "true" once a channel analysis has completed.
pub const KEY_ANALYSIS_COMPLETE: &str = "analysisComplete";
/// Cached `/api/analyze` response JSON.
pub const KEY_CACHED_API_DATA: &str = "cachedApiData";
/// Legacy CSV-workflow keys; never written here but cleared on reset so
/// stale state from older versions cannot linger.
pub const KEY_CSV_UPLOAD_COMPLETE: &str = "csvUploadComplete";
pub const KEY_CACHED_CSV_DATA: &str = "cachedCsvData";

#[cfg(feature = "browser")]
const ALL_KEYS: [&str; 5] = [
    KEY_LAST_CHANNEL_ID,
    KEY_ANALYSIS_COMPLETE,
    KEY_CACHED_API_DATA,
    KEY_CSV_UPLOAD_COMPLETE,
    KEY_CACHED_CSV_DATA,
];

#[cfg(feature = "browser")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read a stored value; `None` when absent or storage is unavailable
/// (private browsing can disable it).
#[cfg(feature = "browser")]
pub fn get(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

#[cfg(feature = "browser")]
pub fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("local storage write failed for {}", key);
        }
    }
}

#[cfg(feature = "browser")]
pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Drop every persisted key ("clear saved data").
#[cfg(feature = "browser")]
pub fn clear_saved_state() {
    for key in ALL_KEYS {
        remove(key);
    }
}
