//! Absolute path rendering
//!
//! A node's absolute path is reconstructed by walking parent links up to the
//! root. The walk is bounded: a tree that satisfies the structural
//! invariants can never exceed the bound, so running past it means the
//! parent chain is cyclic and the process aborts rather than emit a
//! misleading path.

use crate::ids::NodeId;
use crate::tree::{NamespaceTree, TreeError, ROOT_NAME};

/// Maximum number of nodes on any root-to-leaf path
pub const MAX_PATH_DEPTH: usize = 64;

/// Navigation token naming the parent node
pub const PARENT_TOKEN: &str = "..";

/// Navigation token naming the current node
pub const SELF_TOKEN: &str = ".";

impl NamespaceTree {
    /// Renders the absolute path of a node
    ///
    /// The root renders as the bare root marker. Every other path lists the
    /// node names from the root down, each followed by the separator; the
    /// root marker, being the separator itself, appears once and is never
    /// duplicated. A node one below the root named `x` therefore renders as
    /// `/x/`.
    ///
    /// # Panics
    ///
    /// Panics if the upward walk exceeds [`MAX_PATH_DEPTH`] steps, which can
    /// only happen when the parent chain is cyclic. That is a violated
    /// structural invariant, not a user error.
    pub fn absolute_path(&self, id: NodeId) -> Result<String, TreeError> {
        let mut node = self.node(id)?;
        if node.is_root() {
            return Ok(ROOT_NAME.to_string());
        }

        let mut names: Vec<&str> = Vec::new();
        let mut steps = 0;
        loop {
            if steps >= MAX_PATH_DEPTH {
                panic!("path walk exceeded {} steps: parent chain is cyclic", MAX_PATH_DEPTH);
            }
            steps += 1;

            names.push(node.name());
            match node.parent() {
                Some(parent) => node = self.node(parent)?,
                None => break,
            }
        }

        // The last collected name is the root marker; the separator joining
        // takes its place.
        names.pop();
        names.reverse();

        let mut path = String::from(ROOT_NAME);
        for name in names {
            path.push_str(name);
            path.push_str(ROOT_NAME);
        }
        Ok(path)
    }
}
