//! Namespace service implementation
//!
//! The service owns the tree and implements every command operation with
//! the precondition ordering the commands report: touch checks entry
//! duplication, then capacity, then directory collision; mkdir checks
//! capacity, then collision, then allocation.

use crate::operations::{
    EntryKind, ListEntry, NamespaceOperations, OperationError, TeardownReport,
};
use ns_tree::{
    FileEntry, NamespaceTree, NodeId, TreeError, MAX_CHILDREN, MAX_ENTRIES, PARENT_TOKEN,
    ROOT_NAME, SELF_TOKEN,
};

/// The namespace engine
///
/// Wraps the node arena and exposes the command operations. The service is
/// consumed by [`NamespaceService::teardown`], so no operation can be issued
/// against a destroyed tree.
#[derive(Debug)]
pub struct NamespaceService {
    tree: NamespaceTree,
}

impl NamespaceService {
    /// Creates a service with a fresh tree holding only the root
    pub fn new() -> Self {
        Self {
            tree: NamespaceTree::new(),
        }
    }

    /// Returns the root node id
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Returns the underlying tree, for inspection
    pub fn tree(&self) -> &NamespaceTree {
        &self.tree
    }

    /// Returns a node's name
    pub fn node_name(&self, node: NodeId) -> Result<String, OperationError> {
        Ok(self.tree.node(node)?.name().to_string())
    }

    /// Destroys the whole tree, children before parents
    ///
    /// Consuming the service makes use-after-teardown unrepresentable;
    /// callers invoke this exactly once at end of session.
    pub fn teardown(mut self) -> TeardownReport {
        let released = self.tree.release_all();
        TeardownReport {
            released,
            nodes_created: self.tree.nodes_created(),
            nodes_released: self.tree.nodes_released(),
        }
    }
}

impl Default for NamespaceService {
    fn default() -> Self {
        Self::new()
    }
}

impl NamespaceOperations for NamespaceService {
    fn create_file(&mut self, node: NodeId, name: &str) -> Result<(), OperationError> {
        let n = self.tree.node(node)?;
        if n.find_entry(name).is_some() {
            return Err(OperationError::EntryExists(name.to_string()));
        }
        if n.entries().len() >= MAX_ENTRIES {
            return Err(OperationError::EntryLimitReached);
        }
        if self.tree.find_child(node, name)?.is_some() {
            return Err(OperationError::NameUsedByDirectory(name.to_string()));
        }

        self.tree.add_entry(node, FileEntry::new(name.to_string()))?;
        Ok(())
    }

    fn remove_file(&mut self, node: NodeId, name: &str) -> Result<(), OperationError> {
        if self.tree.node(node)?.find_entry(name).is_none() {
            return Err(OperationError::EntryNotFound(name.to_string()));
        }
        self.tree.remove_entry(node, name)?;
        Ok(())
    }

    fn rename_file(&mut self, node: NodeId, from: &str, to: &str) -> Result<(), OperationError> {
        let n = self.tree.node(node)?;
        if n.find_entry(from).is_none() {
            return Err(OperationError::EntryNotFound(from.to_string()));
        }
        if n.find_entry(to).is_some() {
            return Err(OperationError::DestinationExists(to.to_string()));
        }
        if self.tree.find_child(node, to)?.is_some() {
            return Err(OperationError::NameUsedByDirectory(to.to_string()));
        }

        self.tree.rename_entry(node, from, to)?;
        Ok(())
    }

    fn change_permission(
        &mut self,
        node: NodeId,
        mode: &str,
        name: &str,
    ) -> Result<(), OperationError> {
        if self.tree.node(node)?.find_entry(name).is_none() {
            return Err(OperationError::EntryNotFound(name.to_string()));
        }
        self.tree.set_permission(node, name, mode)?;
        Ok(())
    }

    fn create_directory(&mut self, node: NodeId, name: &str) -> Result<NodeId, OperationError> {
        if self.tree.node(node)?.children().len() >= MAX_CHILDREN {
            return Err(OperationError::ChildLimitReached);
        }
        if self.tree.name_in_use(node, name)? {
            return Err(OperationError::NameInUse(name.to_string()));
        }

        match self.tree.create_child(node, name) {
            Ok(id) => Ok(id),
            Err(TreeError::AllocationFailed) => Err(OperationError::AllocationFailed),
            Err(e) => Err(e.into()),
        }
    }

    fn change_directory(&self, node: NodeId, target: &str) -> Result<NodeId, OperationError> {
        let current = self.tree.node(node)?;

        if target == ROOT_NAME {
            return Ok(self.tree.root());
        }
        if target == PARENT_TOKEN {
            // Navigating above the root stays at the root.
            return Ok(current.parent().unwrap_or(node));
        }
        if target == SELF_TOKEN {
            return Ok(node);
        }

        match self.tree.find_child(node, target)? {
            Some(child) => Ok(child),
            None => Err(OperationError::NoSuchDirectory(target.to_string())),
        }
    }

    fn absolute_path(&self, node: NodeId) -> Result<String, OperationError> {
        Ok(self.tree.absolute_path(node)?)
    }

    fn list(&self, node: NodeId) -> Result<Vec<ListEntry>, OperationError> {
        let n = self.tree.node(node)?;
        let mut rows = Vec::with_capacity(n.children().len() + n.entries().len());

        for child_id in n.children() {
            rows.push(ListEntry {
                name: self.tree.node(*child_id)?.name().to_string(),
                kind: EntryKind::Directory,
                permission: None,
                size: None,
            });
        }
        for entry in n.entries() {
            rows.push(ListEntry {
                name: entry.name.clone(),
                kind: EntryKind::File,
                permission: Some(entry.permission.clone()),
                size: Some(entry.size),
            });
        }
        Ok(rows)
    }
}
