//! Bearer token storage handed to the API gateway at construction.

use std::sync::RwLock;

/// Key the token is stored under in browser local storage.
pub const TOKEN_STORAGE_KEY: &str = "authToken";

/// Read/write access to the current bearer token.
///
/// Only login and logout write; everything else reads.
pub trait TokenStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str);
    fn clear_token(&self);
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn set_token(&self, token: &str) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.to_string());
        }
    }

    fn clear_token(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.token(), None);
        store.set_token("abc");
        assert_eq!(store.token().as_deref(), Some("abc"));
        store.clear_token();
        assert_eq!(store.token(), None);
        assert_eq!(MemoryTokenStore::with_token("x").token().as_deref(), Some("x"));
    }
}
