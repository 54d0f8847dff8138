//! The tool-invocation seam.
//!
//! Discovery, scheduling, and dispatch of tools belong to the host
//! framework; this crate only defines the trait the host calls through.
//! Arguments and results travel as JSON values, matching the host's
//! tool-calling convention.

use async_trait::async_trait;
use serde_json::Value;

use crate::context::ToolContext;
use crate::state::StateError;

/// Tool invocation error.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Arguments did not match the tool's expected shape.
    #[error("Invalid arguments: {0}")]
    InvalidArgs(#[from] serde_json::Error),
    /// The host state implementation faulted during the call.
    #[error(transparent)]
    State(#[from] StateError),
}

/// A callable unit registered with the host framework.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the host registers this tool under.
    fn name(&self) -> &'static str;

    /// Invoke the tool with JSON arguments.
    ///
    /// # Errors
    /// Returns `ToolError::InvalidArgs` if `args` cannot be deserialized,
    /// or propagates a `StateError` raised by the host's state.
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value, ToolError>;
}
