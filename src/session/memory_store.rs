//! In-memory session storage.
//!
//! Suitable for tests and embedded hosts without persistent storage.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::store::SessionStore;

/// In-memory session storage.
///
/// Stores values in a `HashMap` protected by a `RwLock`. Contents are lost
/// when the process exits; use [`FileSessionStore`](super::FileSessionStore)
/// for persistence across page loads.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.values.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_owned(), value.to_owned());
        } else {
            log::warn!(target: "mediboard_session", "msg=\"session store lock poisoned on set\"");
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.write() {
            values.remove(key);
        } else {
            log::warn!(target: "mediboard_session", "msg=\"session store lock poisoned on remove\"");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Role, RoleState, ROLE_KEY, TOKEN_KEY};

    #[test]
    fn test_set_get_remove() {
        let store = InMemorySessionStore::new();
        assert!(store.is_empty());

        store.set(TOKEN_KEY, "abc123");
        assert_eq!(store.get(TOKEN_KEY), Some("abc123".to_owned()));
        assert_eq!(store.len(), 1);

        store.remove(TOKEN_KEY);
        assert_eq!(store.get(TOKEN_KEY), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let store = InMemorySessionStore::new();
        store.set(ROLE_KEY, "patient");
        store.set(ROLE_KEY, "admin");
        assert_eq!(store.role_state(), RoleState::Known(Role::Admin));
    }

    #[test]
    fn test_clear_session_removes_both_keys() {
        let store = InMemorySessionStore::new();
        store.set_role(Role::Admin);
        store.set_token("tok");

        store.clear_session();

        assert_eq!(store.role_state(), RoleState::Absent);
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_snapshot() {
        let store = InMemorySessionStore::new();
        store.set_role(Role::LoggedPatient);
        store.set_token("tok");

        let session = store.snapshot();
        assert_eq!(session.role, RoleState::Known(Role::LoggedPatient));
        assert_eq!(session.token, Some("tok".to_owned()));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_clone_shares_storage() {
        let store = InMemorySessionStore::new();
        let view = store.clone();

        store.set_token("tok");
        assert_eq!(view.get(TOKEN_KEY), Some("tok".to_owned()));
    }
}
