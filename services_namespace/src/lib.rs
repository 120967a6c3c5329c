//! # Namespace Service
//!
//! This crate implements the operations layer of the namespace simulator:
//! one typed operation per shell command, checked preconditions, and
//! whole-tree teardown.
//!
//! ## Philosophy
//!
//! - **The engine holds no caller state**: the current node is explicit
//!   input to every operation and explicit output of navigation, never a
//!   process-wide variable
//! - **Failures never mutate**: every error path returns with the tree
//!   exactly as it was
//! - **One caller at a time**: the service is synchronous and
//!   single-threaded; callers that want to share it must put one
//!   mutual-exclusion boundary around the whole service

pub mod operations;
pub mod service;

pub use operations::{
    EntryKind, ListEntry, NamespaceOperations, OperationError, TeardownReport,
};
pub use service::NamespaceService;
