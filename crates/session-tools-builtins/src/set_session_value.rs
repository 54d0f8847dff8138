//! Store a key/value pair in the host-owned session state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use session_tools_core::{Tool, ToolContext, ToolError};

/// Arguments for [`set_session_value`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSessionValueArgs {
    /// Key to store under. Any string is accepted; the host contract
    /// owns naming conventions.
    pub key: String,
    /// Value to store.
    pub value: String,
}

/// Confirmation record returned to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteResult {
    /// Human-readable status, `stored '<value>' in '<key>'`.
    pub status: String,
}

/// Write `value` under `key` in the session state.
///
/// Performs exactly one keyed write; the prior value, if any, is replaced.
///
/// # Errors
/// Propagates a fault from the host's state implementation unchanged.
pub fn set_session_value(
    ctx: &ToolContext,
    key: &str,
    value: &str,
) -> Result<WriteResult, ToolError> {
    ctx.set(key, Value::String(value.to_owned()))?;

    tracing::debug!(key, invocation = %ctx.invocation_id(), "stored session value");

    Ok(WriteResult {
        status: format!("stored '{value}' in '{key}'"),
    })
}

/// Session-state writer tool.
pub struct SetSessionValue;

#[async_trait]
impl Tool for SetSessionValue {
    fn name(&self) -> &'static str {
        "set_session_value"
    }

    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value, ToolError> {
        let args: SetSessionValueArgs = serde_json::from_value(args)?;
        let result = set_session_value(ctx, &args.key, &args.value)?;
        Ok(serde_json::to_value(result)?)
    }
}
