//! Core abstractions for host-invoked session-state tools.
//!
//! This crate provides the fundamental building blocks:
//! - `SessionState` - Narrow get/set view of the host-owned session mapping
//! - `ToolContext` - Handle through which a tool reaches host resources
//! - `Tool` - The trait the host's invocation machinery calls through
//! - Environment bootstrap helpers for process startup

pub mod context;
pub mod env;
pub mod state;
pub mod tool;

pub use context::ToolContext;
pub use env::{ConfigMap, EnvError, apply_env, bootstrap_env, bootstrap_env_from, load_env_file};
pub use state::{MemoryState, SessionState, StateError};
pub use tool::{Tool, ToolError};
