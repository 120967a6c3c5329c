//! The namespace tree arena
//!
//! All nodes are owned by a single registry keyed by node id. Parent links
//! and child lists carry plain ids into the registry, so the ownership
//! structure is a strict tree with no reference cycles, and releasing the
//! registry entries releases everything.

use crate::entry::FileEntry;
use crate::ids::NodeId;
use crate::node::{NamespaceNode, MAX_CHILDREN, MAX_ENTRIES};
use std::collections::HashMap;
use std::collections::HashSet;
use thiserror::Error;

/// Reserved name of the root node; also the path separator
pub const ROOT_NAME: &str = "/";

/// Structural errors raised by the tree
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// The id does not name a live node
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    /// The name is already taken by an entry or child of the node
    #[error("name '{0}' already in use")]
    DuplicateName(String),

    /// The node already holds the maximum number of entries
    #[error("entry limit reached")]
    EntryLimitReached,

    /// The node already holds the maximum number of children
    #[error("child limit reached")]
    ChildLimitReached,

    /// No entry with the given name exists in the node
    #[error("no entry named '{0}'")]
    EntryNotFound(String),

    /// A freshly allocated id collided with a live node
    #[error("node allocation failed")]
    AllocationFailed,

    /// Content write larger than the per-entry bound
    #[error("content of {0} bytes exceeds the entry bound")]
    ContentTooLarge(usize),

    /// A child's parent link does not name the node that owns it
    #[error("parent link out of sync for {0}")]
    ParentMismatch(NodeId),

    /// A registered node is not reachable from the root
    #[error("unreachable node: {0}")]
    DetachedNode(NodeId),
}

/// The arena owning every namespace node
///
/// The root is created with the tree and is the only node without a parent.
/// Child nodes are created through [`NamespaceTree::create_child`] and live
/// until the whole tree is released; there is no single-directory removal.
///
/// The tree counts allocations and releases so callers can observe that
/// teardown releases every node exactly once.
#[derive(Debug)]
pub struct NamespaceTree {
    nodes: HashMap<NodeId, NamespaceNode>,
    root: NodeId,
    nodes_created: usize,
    nodes_released: usize,
}

impl NamespaceTree {
    /// Creates a tree holding only the root node
    pub fn new() -> Self {
        let root = NodeId::new();
        let mut nodes = HashMap::new();
        nodes.insert(root, NamespaceNode::new(root, ROOT_NAME.to_string(), None));
        Self {
            nodes,
            root,
            nodes_created: 1,
            nodes_released: 0,
        }
    }

    /// Returns the root node id
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the number of live nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns how many nodes have been allocated over the tree's lifetime
    pub fn nodes_created(&self) -> usize {
        self.nodes_created
    }

    /// Returns how many nodes have been released
    pub fn nodes_released(&self) -> usize {
        self.nodes_released
    }

    /// Looks up a node by id
    pub fn node(&self, id: NodeId) -> Result<&NamespaceNode, TreeError> {
        self.nodes.get(&id).ok_or(TreeError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut NamespaceNode, TreeError> {
        self.nodes.get_mut(&id).ok_or(TreeError::UnknownNode(id))
    }

    /// Finds a child of `node` by exact name
    ///
    /// Linear scan of the child list in insertion order; child names are
    /// unique within a node, so the first match is the only match.
    pub fn find_child(&self, node: NodeId, name: &str) -> Result<Option<NodeId>, TreeError> {
        let parent = self.node(node)?;
        for child_id in parent.children() {
            if self.node(*child_id)?.name() == name {
                return Ok(Some(*child_id));
            }
        }
        Ok(None)
    }

    /// Returns true if the name is taken by an entry or child of the node
    pub fn name_in_use(&self, node: NodeId, name: &str) -> Result<bool, TreeError> {
        let n = self.node(node)?;
        if n.find_entry(name).is_some() {
            return Ok(true);
        }
        Ok(self.find_child(node, name)?.is_some())
    }

    /// Appends a file entry to a node
    ///
    /// Rejects duplicate names (entries and children share one namespace)
    /// and entries beyond the capacity bound; the node is unchanged on any
    /// failure.
    pub fn add_entry(&mut self, node: NodeId, entry: FileEntry) -> Result<(), TreeError> {
        if self.name_in_use(node, &entry.name)? {
            return Err(TreeError::DuplicateName(entry.name));
        }
        if self.node(node)?.entries().len() >= MAX_ENTRIES {
            return Err(TreeError::EntryLimitReached);
        }
        self.node_mut(node)?.entries_mut().push(entry);
        Ok(())
    }

    /// Removes the named entry from a node, preserving the order of the rest
    pub fn remove_entry(&mut self, node: NodeId, name: &str) -> Result<FileEntry, TreeError> {
        let n = self.node_mut(node)?;
        let index = n
            .find_entry(name)
            .ok_or_else(|| TreeError::EntryNotFound(name.to_string()))?;
        Ok(n.entries_mut().remove(index))
    }

    /// Renames an entry in place, keeping its position
    pub fn rename_entry(&mut self, node: NodeId, from: &str, to: &str) -> Result<(), TreeError> {
        let index = self
            .node(node)?
            .find_entry(from)
            .ok_or_else(|| TreeError::EntryNotFound(from.to_string()))?;
        if self.name_in_use(node, to)? {
            return Err(TreeError::DuplicateName(to.to_string()));
        }
        self.node_mut(node)?.entries_mut()[index].name = to.to_string();
        Ok(())
    }

    /// Overwrites an entry's permission tag verbatim
    pub fn set_permission(&mut self, node: NodeId, name: &str, mode: &str) -> Result<(), TreeError> {
        let n = self.node_mut(node)?;
        let index = n
            .find_entry(name)
            .ok_or_else(|| TreeError::EntryNotFound(name.to_string()))?;
        n.entries_mut()[index].permission = mode.to_string();
        Ok(())
    }

    /// Allocates a child node under `parent`
    ///
    /// Rejects duplicate names and children beyond the capacity bound. An id
    /// collision in the registry is reported as `AllocationFailed`; every
    /// failure leaves the tree unchanged.
    pub fn create_child(&mut self, parent: NodeId, name: &str) -> Result<NodeId, TreeError> {
        if self.node(parent)?.children().len() >= MAX_CHILDREN {
            return Err(TreeError::ChildLimitReached);
        }
        if self.name_in_use(parent, name)? {
            return Err(TreeError::DuplicateName(name.to_string()));
        }

        let id = NodeId::new();
        if self.nodes.contains_key(&id) {
            return Err(TreeError::AllocationFailed);
        }

        self.nodes
            .insert(id, NamespaceNode::new(id, name.to_string(), Some(parent)));
        self.node_mut(parent)?.children_mut().push(id);
        self.nodes_created += 1;
        Ok(id)
    }

    /// Releases every node, children before parents
    ///
    /// Returns the release order. The tree is empty afterwards; callers are
    /// expected to drop it and never issue another operation against it.
    pub fn release_all(&mut self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        self.collect_post_order(self.root, &mut order);
        for id in &order {
            if self.nodes.remove(id).is_some() {
                self.nodes_released += 1;
            }
        }
        order
    }

    fn collect_post_order(&self, node: NodeId, order: &mut Vec<NodeId>) {
        if let Ok(n) = self.node(node) {
            for child in n.children() {
                self.collect_post_order(*child, order);
            }
            order.push(node);
        }
    }

    /// Checks the structural invariants
    ///
    /// 1. names are unique per node across entries and children jointly;
    /// 2. entry and child counts are within their bounds;
    /// 3. every node is reachable from the single parentless root;
    /// 4. every child's parent link names the node owning it.
    pub fn verify(&self) -> Result<(), TreeError> {
        let mut reachable = HashSet::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let node = self.node(id)?;
            reachable.insert(id);

            let mut names: HashSet<&str> = HashSet::new();
            for entry in node.entries() {
                if !names.insert(&entry.name) {
                    return Err(TreeError::DuplicateName(entry.name.clone()));
                }
            }
            for child_id in node.children() {
                let child = self.node(*child_id)?;
                if child.parent() != Some(id) {
                    return Err(TreeError::ParentMismatch(*child_id));
                }
                if !names.insert(child.name()) {
                    return Err(TreeError::DuplicateName(child.name().to_string()));
                }
                stack.push(*child_id);
            }

            if node.entries().len() > MAX_ENTRIES {
                return Err(TreeError::EntryLimitReached);
            }
            if node.children().len() > MAX_CHILDREN {
                return Err(TreeError::ChildLimitReached);
            }
        }

        if self.node(self.root)?.parent().is_some() {
            return Err(TreeError::ParentMismatch(self.root));
        }
        for id in self.nodes.keys() {
            if !reachable.contains(id) {
                return Err(TreeError::DetachedNode(*id));
            }
        }
        Ok(())
    }
}

impl Default for NamespaceTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tree_has_only_root() {
        let tree = NamespaceTree::new();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.nodes_created(), 1);
        assert_eq!(tree.nodes_released(), 0);

        let root = tree.node(tree.root()).unwrap();
        assert!(root.is_root());
        assert_eq!(root.name(), ROOT_NAME);
    }

    #[test]
    fn test_unknown_node_lookup() {
        let tree = NamespaceTree::new();
        let result = tree.node(NodeId::new());
        assert!(matches!(result, Err(TreeError::UnknownNode(_))));
    }

    #[test]
    fn test_add_and_find_entry() {
        let mut tree = NamespaceTree::new();
        let root = tree.root();

        tree.add_entry(root, FileEntry::new("a".to_string())).unwrap();
        assert_eq!(tree.node(root).unwrap().find_entry("a"), Some(0));
    }

    #[test]
    fn test_add_entry_duplicate_rejected() {
        let mut tree = NamespaceTree::new();
        let root = tree.root();

        tree.add_entry(root, FileEntry::new("a".to_string())).unwrap();
        let result = tree.add_entry(root, FileEntry::new("a".to_string()));
        assert!(matches!(result, Err(TreeError::DuplicateName(_))));
        assert_eq!(tree.node(root).unwrap().entries().len(), 1);
    }

    #[test]
    fn test_add_entry_clashing_with_child_rejected() {
        let mut tree = NamespaceTree::new();
        let root = tree.root();

        tree.create_child(root, "docs").unwrap();
        let result = tree.add_entry(root, FileEntry::new("docs".to_string()));
        assert!(matches!(result, Err(TreeError::DuplicateName(_))));
    }

    #[test]
    fn test_add_entry_capacity_bound() {
        let mut tree = NamespaceTree::new();
        let root = tree.root();

        for i in 0..MAX_ENTRIES {
            tree.add_entry(root, FileEntry::new(format!("f{}", i))).unwrap();
        }
        let result = tree.add_entry(root, FileEntry::new("overflow".to_string()));
        assert!(matches!(result, Err(TreeError::EntryLimitReached)));
        assert_eq!(tree.node(root).unwrap().entries().len(), MAX_ENTRIES);
    }

    #[test]
    fn test_remove_entry_preserves_order() {
        let mut tree = NamespaceTree::new();
        let root = tree.root();

        for name in ["a", "b", "c"] {
            tree.add_entry(root, FileEntry::new(name.to_string())).unwrap();
        }
        let removed = tree.remove_entry(root, "b").unwrap();
        assert_eq!(removed.name, "b");

        let names: Vec<&str> = tree
            .node(root)
            .unwrap()
            .entries()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_missing_entry() {
        let mut tree = NamespaceTree::new();
        let root = tree.root();
        let result = tree.remove_entry(root, "ghost");
        assert!(matches!(result, Err(TreeError::EntryNotFound(_))));
    }

    #[test]
    fn test_rename_entry_in_place() {
        let mut tree = NamespaceTree::new();
        let root = tree.root();

        for name in ["a", "b", "c"] {
            tree.add_entry(root, FileEntry::new(name.to_string())).unwrap();
        }
        tree.rename_entry(root, "b", "renamed").unwrap();

        let names: Vec<&str> = tree
            .node(root)
            .unwrap()
            .entries()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "renamed", "c"]);
    }

    #[test]
    fn test_rename_entry_collision_rejected() {
        let mut tree = NamespaceTree::new();
        let root = tree.root();

        tree.add_entry(root, FileEntry::new("a".to_string())).unwrap();
        tree.create_child(root, "docs").unwrap();

        let result = tree.rename_entry(root, "a", "docs");
        assert!(matches!(result, Err(TreeError::DuplicateName(_))));
        assert_eq!(tree.node(root).unwrap().find_entry("a"), Some(0));
    }

    #[test]
    fn test_set_permission() {
        let mut tree = NamespaceTree::new();
        let root = tree.root();

        tree.add_entry(root, FileEntry::new("a".to_string())).unwrap();
        tree.set_permission(root, "a", "r--").unwrap();
        assert_eq!(tree.node(root).unwrap().entry("a").unwrap().permission, "r--");
    }

    #[test]
    fn test_create_child_links_parent() {
        let mut tree = NamespaceTree::new();
        let root = tree.root();

        let child = tree.create_child(root, "docs").unwrap();
        assert_eq!(tree.node(child).unwrap().parent(), Some(root));
        assert_eq!(tree.node(root).unwrap().children(), &[child]);
        assert_eq!(tree.nodes_created(), 2);
    }

    #[test]
    fn test_create_child_capacity_bound() {
        let mut tree = NamespaceTree::new();
        let root = tree.root();

        for i in 0..MAX_CHILDREN {
            tree.create_child(root, &format!("d{}", i)).unwrap();
        }
        let result = tree.create_child(root, "overflow");
        assert!(matches!(result, Err(TreeError::ChildLimitReached)));
        assert_eq!(tree.node(root).unwrap().children().len(), MAX_CHILDREN);
    }

    #[test]
    fn test_create_child_duplicate_rejected() {
        let mut tree = NamespaceTree::new();
        let root = tree.root();

        tree.add_entry(root, FileEntry::new("taken".to_string())).unwrap();
        let result = tree.create_child(root, "taken");
        assert!(matches!(result, Err(TreeError::DuplicateName(_))));
    }

    #[test]
    fn test_find_child() {
        let mut tree = NamespaceTree::new();
        let root = tree.root();

        let docs = tree.create_child(root, "docs").unwrap();
        assert_eq!(tree.find_child(root, "docs").unwrap(), Some(docs));
        assert_eq!(tree.find_child(root, "missing").unwrap(), None);
    }

    #[test]
    fn test_release_all_is_post_order() {
        let mut tree = NamespaceTree::new();
        let root = tree.root();

        let a = tree.create_child(root, "a").unwrap();
        let b = tree.create_child(a, "b").unwrap();

        let order = tree.release_all();
        assert_eq!(order, vec![b, a, root]);
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.nodes_released(), 3);
        assert_eq!(tree.nodes_created(), tree.nodes_released());
    }

    #[test]
    fn test_verify_clean_tree() {
        let mut tree = NamespaceTree::new();
        let root = tree.root();

        let docs = tree.create_child(root, "docs").unwrap();
        tree.create_child(docs, "notes").unwrap();
        tree.add_entry(docs, FileEntry::new("todo.txt".to_string())).unwrap();

        assert!(tree.verify().is_ok());
    }
}
