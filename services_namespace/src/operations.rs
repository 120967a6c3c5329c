//! Namespace operations
//!
//! This module defines the operations provided by the namespace service and
//! the error taxonomy they report.

use ns_tree::{NodeId, TreeError};
use thiserror::Error;

/// Errors that can occur during namespace operations
///
/// Every variant is recoverable: the operation reports the condition and
/// leaves the tree unmodified. Usage errors (missing arguments) never reach
/// the engine; the dispatcher rejects them while parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperationError {
    /// A referenced entry does not exist in the node
    #[error("'{0}' not found")]
    EntryNotFound(String),

    /// touch: the name is already taken by an entry
    #[error("file '{0}' already exists")]
    EntryExists(String),

    /// mv: the destination name is already taken by an entry
    #[error("'{0}' already exists")]
    DestinationExists(String),

    /// The name is already taken by a child directory
    #[error("name '{0}' already used by directory")]
    NameUsedByDirectory(String),

    /// mkdir: the name is already taken by a child or an entry
    #[error("name '{0}' already exists")]
    NameInUse(String),

    /// The node is at its entry capacity
    #[error("file limit reached")]
    EntryLimitReached,

    /// The node is at its child capacity
    #[error("subdir limit reached")]
    ChildLimitReached,

    /// cd: no child directory with the given name
    #[error("no such directory")]
    NoSuchDirectory(String),

    /// Node allocation failed; the tree is unchanged
    #[error("memory error")]
    AllocationFailed,

    /// Structural error surfacing from the tree
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),
}

/// Kind of a listed item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A child namespace node
    Directory,
    /// A file entry
    File,
}

/// One row of a directory listing
///
/// Listings are ordered: all child directories in stored order, then all
/// entries in stored order. Permission and size are present for files only;
/// directories carry a synthetic marker when rendered in long form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Item name
    pub name: String,
    /// Directory or file
    pub kind: EntryKind,
    /// Permission tag, files only
    pub permission: Option<String>,
    /// Informational size, files only
    pub size: Option<u64>,
}

/// Result of tearing the tree down
///
/// The release order is post-order: every node appears after all of its
/// children and the root appears last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeardownReport {
    /// Node ids in release order
    pub released: Vec<NodeId>,
    /// Nodes allocated over the tree's lifetime
    pub nodes_created: usize,
    /// Nodes released, including this teardown
    pub nodes_released: usize,
}

impl TeardownReport {
    /// True when every allocated node was released exactly once
    pub fn is_balanced(&self) -> bool {
        self.nodes_created == self.nodes_released
    }
}

/// Namespace operations trait
///
/// One method per shell command. Every method takes the caller's current
/// node id; navigation returns the new current node and everything else
/// leaves the caller's position alone.
pub trait NamespaceOperations {
    /// Create an empty file entry (touch)
    fn create_file(&mut self, node: NodeId, name: &str) -> Result<(), OperationError>;

    /// Delete a file entry (rm)
    fn remove_file(&mut self, node: NodeId, name: &str) -> Result<(), OperationError>;

    /// Rename a file entry within the node (mv)
    fn rename_file(&mut self, node: NodeId, from: &str, to: &str) -> Result<(), OperationError>;

    /// Overwrite a file entry's permission tag (chmod)
    fn change_permission(
        &mut self,
        node: NodeId,
        mode: &str,
        name: &str,
    ) -> Result<(), OperationError>;

    /// Create a child directory (mkdir)
    fn create_directory(&mut self, node: NodeId, name: &str) -> Result<NodeId, OperationError>;

    /// Resolve a navigation target (cd)
    ///
    /// Tokens resolve in a fixed order: the root marker, the parent token
    /// (a no-op at the root), the self token, then child lookup by name.
    /// Never mutates the tree.
    fn change_directory(&self, node: NodeId, target: &str) -> Result<NodeId, OperationError>;

    /// Render the absolute path of a node (pwd)
    fn absolute_path(&self, node: NodeId) -> Result<String, OperationError>;

    /// List a node's children and entries (ls)
    fn list(&self, node: NodeId) -> Result<Vec<ListEntry>, OperationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_match_report_phrasing() {
        assert_eq!(
            OperationError::EntryExists("a".to_string()).to_string(),
            "file 'a' already exists"
        );
        assert_eq!(OperationError::EntryLimitReached.to_string(), "file limit reached");
        assert_eq!(OperationError::ChildLimitReached.to_string(), "subdir limit reached");
        assert_eq!(
            OperationError::NameUsedByDirectory("d".to_string()).to_string(),
            "name 'd' already used by directory"
        );
        assert_eq!(
            OperationError::NoSuchDirectory("x".to_string()).to_string(),
            "no such directory"
        );
        assert_eq!(OperationError::AllocationFailed.to_string(), "memory error");
    }

    #[test]
    fn test_teardown_report_balance() {
        let report = TeardownReport {
            released: vec![],
            nodes_created: 3,
            nodes_released: 3,
        };
        assert!(report.is_balanced());

        let leaky = TeardownReport {
            released: vec![],
            nodes_created: 3,
            nodes_released: 2,
        };
        assert!(!leaky.is_balanced());
    }
}
