//! Data structures for forest nodes.

use serde::{Deserialize, Serialize};

/// Handle to a node in a [`Forest`](super::Forest).
///
/// Handles are arena indexes: equal handles are the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node stored in a forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestNode {
    /// Unique name within the forest.
    pub name: String,
    /// Parent node, `None` for a root.
    pub parent: Option<NodeId>,
    /// Capability names this node itself exposes, in declaration order.
    pub capabilities: Vec<String>,
}

impl ForestNode {
    /// Whether this node is a root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Whether this node itself exposes `name`.
    pub fn has_own(&self, name: &str) -> bool {
        self.capabilities.iter().any(|c| c == name)
    }
}
