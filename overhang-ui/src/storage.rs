//! Browser-side token persistence and origin lookup.

use overhang_core::token::{TokenStore, TOKEN_STORAGE_KEY};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Bearer token kept in `localStorage` under `authToken`.
///
/// Holds no handle: the storage object is looked up on every call, so the
/// store stays `Send + Sync` and survives page reloads.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn token(&self) -> Option<String> {
        local_storage()?
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn set_token(&self, token: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                    log::warn!("could not persist auth token");
                }
            }
            None => log::warn!("localStorage unavailable; token not persisted"),
        }
    }

    fn clear_token(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// Origin the page was served from, used as the API base URL.
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}
