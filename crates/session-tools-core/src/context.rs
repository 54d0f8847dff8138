//! Invocation context handed to tools by the host.

use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use crate::state::{SessionState, StateError};

/// Handle through which a tool reaches host-owned resources.
///
/// The host builds one per invocation and retains ownership of the
/// underlying session state; the context only narrows access to the
/// `SessionState` capability.
#[derive(Clone)]
pub struct ToolContext {
    invocation_id: Uuid,
    state: Arc<dyn SessionState>,
}

impl ToolContext {
    /// Create a context over host-owned session state.
    #[must_use]
    pub fn new(state: Arc<dyn SessionState>) -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
            state,
        }
    }

    /// Unique id of this tool invocation.
    #[must_use]
    pub const fn invocation_id(&self) -> Uuid {
        self.invocation_id
    }

    /// Get a session-state value by key.
    ///
    /// # Errors
    /// Returns error if the host state implementation faults.
    pub fn get(&self, key: &str) -> Result<Option<Value>, StateError> {
        self.state.get(key)
    }

    /// Set a session-state value.
    ///
    /// # Errors
    /// Returns error if the host state implementation faults.
    pub fn set(&self, key: &str, value: Value) -> Result<(), StateError> {
        self.state.set(key, value)
    }
}
