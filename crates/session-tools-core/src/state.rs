//! Session-state access for tools.
//!
//! The session mapping is owned by the host framework; tools see it only
//! through the narrow [`SessionState`] capability. Tools never create,
//! destroy, or iterate the mapping.

use std::{collections::HashMap, sync::RwLock};

use serde_json::Value;

/// State access error.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("State error: {0}")]
    Internal(String),
}

/// Narrow view of the host-owned session mapping.
///
/// Implemented by the host; tools depend only on this capability, not on
/// the host's concrete state type. Both operations are synchronous and
/// non-suspending.
pub trait SessionState: Send + Sync {
    /// Get the value stored under `key`, if any.
    ///
    /// # Errors
    /// Returns error if the host's backing store faults.
    fn get(&self, key: &str) -> Result<Option<Value>, StateError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns error if the host's backing store faults.
    fn set(&self, key: &str, value: Value) -> Result<(), StateError>;
}

/// In-memory session state.
///
/// Useful for single-process hosts and tests. Data is lost on drop.
pub struct MemoryState {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryState {
    /// Create an empty session state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored entries.
    ///
    /// Host-side convenience; not part of the `SessionState` capability.
    ///
    /// # Errors
    /// Returns error if the underlying lock is poisoned.
    pub fn len(&self) -> Result<usize, StateError> {
        Ok(self
            .entries
            .read()
            .map_err(|e| StateError::Internal(e.to_string()))?
            .len())
    }

    /// Whether no entries are stored.
    ///
    /// # Errors
    /// Returns error if the underlying lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StateError> {
        Ok(self.len()? == 0)
    }
}

impl Default for MemoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState for MemoryState {
    fn get(&self, key: &str) -> Result<Option<Value>, StateError> {
        Ok(self
            .entries
            .read()
            .map_err(|e| StateError::Internal(e.to_string()))?
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StateError> {
        tracing::debug!(key, "session state write");

        self.entries
            .write()
            .map_err(|e| StateError::Internal(e.to_string()))?
            .insert(key.to_owned(), value);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let state = MemoryState::new();
        assert!(state.get("absent").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get() {
        let state = MemoryState::new();
        state.set("username", Value::String("alice".into())).unwrap();

        assert_eq!(
            state.get("username").unwrap(),
            Some(Value::String("alice".into()))
        );
        assert_eq!(state.len().unwrap(), 1);
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let state = MemoryState::new();
        state.set("k", Value::String("old".into())).unwrap();
        state.set("k", Value::String("new".into())).unwrap();

        assert_eq!(state.get("k").unwrap(), Some(Value::String("new".into())));
        assert_eq!(state.len().unwrap(), 1);
    }

    #[test]
    fn test_empty_key_accepted() {
        let state = MemoryState::new();
        state.set("", Value::String("v".into())).unwrap();
        assert_eq!(state.get("").unwrap(), Some(Value::String("v".into())));
    }
}
