//! Session store trait.

use super::{Role, RoleState, Session, ROLE_KEY, TOKEN_KEY};

/// Persisted key/value store for session state.
///
/// Implementations provide different storage backends:
/// - [`InMemorySessionStore`](super::InMemorySessionStore): in-memory storage for tests
/// - [`FileSessionStore`](super::FileSessionStore): file-backed storage that
///   survives restarts, the way browser local storage survives page loads
///
/// All access is synchronous; the store is only touched from the
/// single-threaded UI event loop and needs no coordination beyond interior
/// mutability. Writes are best-effort: a failing backend logs and keeps the
/// UI running rather than propagating an error.
pub trait SessionStore: Send + Sync {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Removes `key` if present.
    fn remove(&self, key: &str);

    /// The current role slot.
    fn role_state(&self) -> RoleState {
        RoleState::from_stored(self.get(ROLE_KEY))
    }

    /// The current token, if any.
    fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
    }

    fn set_role(&self, role: Role) {
        self.set(ROLE_KEY, role.as_str());
    }

    fn set_token(&self, token: &str) {
        self.set(TOKEN_KEY, token);
    }

    /// Removes both session keys.
    fn clear_session(&self) {
        self.remove(ROLE_KEY);
        self.remove(TOKEN_KEY);
    }

    /// Reads both keys into a [`Session`] snapshot.
    fn snapshot(&self) -> Session {
        Session {
            role: self.role_state(),
            token: self.token(),
        }
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}
