//! File entry records
//!
//! An entry is the file-equivalent leaf of the namespace: a name, an
//! informational size, a permission tag, and a bounded content buffer.

use crate::tree::TreeError;
use serde::{Deserialize, Serialize};

/// Permission tag given to newly created entries
pub const DEFAULT_PERMISSION: &str = "rw-";

/// Maximum number of content bytes an entry may hold
pub const MAX_CONTENT_BYTES: usize = 512;

/// A single file entry inside a namespace node
///
/// The size field is informational only: it is set to zero at creation and
/// never recomputed from the content buffer. The permission tag is stored
/// verbatim and never enforced against any operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Name of this entry, unique within its node
    pub name: String,
    /// Informational byte size
    pub size: u64,
    /// Permission tag, arbitrary text
    pub permission: String,
    /// Content buffer, bounded to `MAX_CONTENT_BYTES`
    content: Vec<u8>,
}

impl FileEntry {
    /// Creates a new empty entry with the default permission tag
    pub fn new(name: String) -> Self {
        Self {
            name,
            size: 0,
            permission: DEFAULT_PERMISSION.to_string(),
            content: Vec::new(),
        }
    }

    /// Returns the content buffer
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Replaces the content buffer
    ///
    /// Rejects writes larger than `MAX_CONTENT_BYTES` without modifying the
    /// existing content. The size field is not updated; size is decoupled
    /// from content throughout the simulator.
    pub fn write_content(&mut self, bytes: &[u8]) -> Result<(), TreeError> {
        if bytes.len() > MAX_CONTENT_BYTES {
            return Err(TreeError::ContentTooLarge(bytes.len()));
        }
        self.content = bytes.to_vec();
        Ok(())
    }
}
