//! # CLI Console
//!
//! The command dispatcher for the namespace simulator: it tokenizes input
//! lines, maps them onto engine operations, renders status lines, and holds
//! the session's current-node state.
//!
//! The engine knows nothing about this crate; the session passes the
//! current node id into every call and updates it only when a navigation
//! succeeds.

pub mod commands;
pub mod session;

pub use commands::{ShellCommand, ShellCommandError, ShellCommandParser};
pub use session::{SessionReply, ShellSession};
