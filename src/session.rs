//! Session-token accessor
//!
//! The console keeps its bearer token in browser storage. Views never read
//! that storage directly; they go through a [`TokenStore`], so token access
//! stays in one place and tests can substitute their own.

use std::sync::Mutex;

/// Accessor contract for the session's bearer token
pub trait TokenStore: Send + Sync {
    /// The current token, if a session is active
    fn token(&self) -> Option<String>;

    /// Replace the current token after a successful login
    fn set_token(&self, token: String);

    /// Drop the current token on logout or a terminal denial
    fn clear_token(&self);

    /// Whether a session token is present
    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

/// In-memory token store
///
/// Holds a single slot behind a mutex so the store can be shared across
/// tasks of the UI runtime.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding an existing token
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.lock().clone()
    }

    fn set_token(&self, token: String) {
        *self.lock() = Some(token);
    }

    fn clear_token(&self) {
        *self.lock() = None;
    }
}

impl MemoryTokenStore {
    // A poisoned slot still holds a plain Option; keep serving it.
    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.slot
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryTokenStore, TokenStore};

    #[test]
    fn set_and_clear_round_trip() {
        let store = MemoryTokenStore::new();
        assert!(!store.has_token());

        store.set_token("tok-123".to_string());
        assert_eq!(store.token().as_deref(), Some("tok-123"));

        store.clear_token();
        assert!(store.token().is_none());
    }
}
