//! File-backed session storage.
//!
//! Persists the session as a single JSON object, the local-storage
//! equivalent for hosts that live across process restarts.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use super::store::SessionStore;

/// File-backed session storage.
///
/// The whole store is one JSON object of string keys and values, written
/// back after every mutation. Reads are served from an in-memory copy
/// loaded at construction.
pub struct FileSessionStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FileSessionStore {
    /// Opens the store at `path`, loading any existing contents.
    ///
    /// A missing file starts an empty store; an unreadable or malformed
    /// file is logged and treated as empty rather than failing the host.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(values) => values,
                Err(err) => {
                    log::warn!(
                        target: "mediboard_session",
                        "msg=\"malformed session file, starting empty\" path={:?} err={}",
                        path,
                        err
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            values: Mutex::new(values),
        }
    }

    fn persist(&self, values: &HashMap<String, String>) {
        let content = match serde_json::to_string_pretty(values) {
            Ok(content) => content,
            Err(err) => {
                log::warn!(
                    target: "mediboard_session",
                    "msg=\"failed to serialize session\" err={}",
                    err
                );
                return;
            }
        };

        if let Err(err) = std::fs::write(&self.path, content) {
            log::warn!(
                target: "mediboard_session",
                "msg=\"failed to write session file\" path={:?} err={}",
                self.path,
                err
            );
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_owned(), value.to_owned());
            self.persist(&values);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            if values.remove(key).is_some() {
                self.persist(&values);
            }
        }
    }
}
