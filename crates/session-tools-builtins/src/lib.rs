//! Built-in session-state tools.
//!
//! Each tool implements `session_tools_core::Tool` and is handed to the
//! host framework's invocation machinery by the embedding application.

pub mod set_session_value;

pub use set_session_value::{SetSessionValue, SetSessionValueArgs, WriteResult, set_session_value};
