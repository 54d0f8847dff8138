//! Minimal host application wiring the built-in tools.
//!
//! Run with: cargo run -p host-app-demo
//!
//! This plays the role of the host framework: it bootstraps the
//! environment, owns the session state, and invokes a tool through the
//! `Tool` seam with JSON arguments.

use std::sync::Arc;

use serde_json::json;
use session_tools_builtins::SetSessionValue;
use session_tools_core::{MemoryState, SessionState, Tool, ToolContext, bootstrap_env};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = bootstrap_env()?;
    tracing::info!(entries = config.len(), "environment ready");

    let state = Arc::new(MemoryState::new());
    let ctx = ToolContext::new(Arc::clone(&state) as Arc<dyn SessionState>);

    let tool = SetSessionValue;
    let result = tool
        .call(&ctx, json!({"key": "username", "value": "alice"}))
        .await?;

    println!("{} -> {result}", tool.name());
    println!("session[\"username\"] = {:?}", state.get("username")?);

    Ok(())
}
