//! # Namespace Tree
//!
//! This crate provides the data model for an in-memory hierarchical
//! namespace: a bounded-capacity tree of directory-like nodes holding
//! file-like entries.
//!
//! ## Philosophy
//!
//! - **No real filesystem**: the tree lives entirely in memory and models
//!   filesystem behavior without touching disk
//! - **Ownership lives in the arena**: every node is owned by a single
//!   `NamespaceTree` registry; parent links are plain identifiers and never
//!   imply ownership, so teardown order is unambiguous and no reference
//!   cycle can form
//! - **Bounds are checked, not assumed**: entry, child, content, and path
//!   depth limits are explicit constants with observable error paths
//!
//! ## Design
//!
//! - A node owns an insertion-ordered list of [`FileEntry`] records and an
//!   insertion-ordered list of child node ids
//! - Entries and children share one name namespace per node
//! - The root node is created with the tree and carries the reserved root
//!   marker as its name; it is the only node without a parent

pub mod entry;
pub mod ids;
pub mod node;
pub mod path;
pub mod tree;

pub use entry::{FileEntry, DEFAULT_PERMISSION, MAX_CONTENT_BYTES};
pub use ids::NodeId;
pub use node::{NamespaceNode, MAX_CHILDREN, MAX_ENTRIES};
pub use path::{MAX_PATH_DEPTH, PARENT_TOKEN, SELF_TOKEN};
pub use tree::{NamespaceTree, TreeError, ROOT_NAME};
