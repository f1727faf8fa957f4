//! Forest arena — node storage, name lookups, host trait impls.

use std::collections::HashMap;

use crate::error::{AncestryError, Result};
use crate::host::{CapabilityTest, ParentAccessor};

use super::node::{ForestNode, NodeId};

/// Arena of named nodes linked by single parent references.
///
/// Nodes are never removed, so a [`NodeId`] stays valid for the life of
/// the forest.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    /// Primary store, indexed by `NodeId`.
    nodes: Vec<ForestNode>,
    /// Secondary index: node name → handle.
    by_name: HashMap<String, NodeId>,
}

impl Forest {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node named `name` under `parent` (a root when `None`).
    ///
    /// Fails with `DuplicateNode` if the name is taken and `NodeNotFound`
    /// if `parent` does not name an existing node.
    pub fn insert<I, S>(
        &mut self,
        name: &str,
        parent: Option<&str>,
        capabilities: I,
    ) -> Result<NodeId>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.by_name.contains_key(name) {
            return Err(AncestryError::DuplicateNode(name.to_string()));
        }

        let parent = parent.map(|p| self.id_of(p)).transpose()?;
        let id = NodeId(
            u32::try_from(self.nodes.len())
                .map_err(|_| AncestryError::CapacityExceeded(u32::MAX))?,
        );

        self.nodes.push(ForestNode {
            name: name.to_string(),
            parent,
            capabilities: capabilities.into_iter().map(Into::into).collect(),
        });
        self.by_name.insert(name.to_string(), id);

        log::debug!(
            "inserted node {name} ({id}) under {}",
            parent.map_or_else(|| "<root>".to_string(), |p| p.to_string())
        );
        Ok(id)
    }

    /// Look up a node by handle.
    pub fn get(&self, id: NodeId) -> Option<&ForestNode> {
        self.nodes.get(id.index())
    }

    /// Resolve a node name to its handle.
    pub fn id_of(&self, name: &str) -> Result<NodeId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| AncestryError::NodeNotFound(name.to_string()))
    }

    /// Name of the node behind `id`.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.name.as_str())
    }

    /// Names for a sequence of handles, e.g. the output of
    /// [`chain`](crate::chain::chain).
    pub fn names<'a>(&'a self, ids: &[NodeId]) -> Vec<&'a str> {
        ids.iter().filter_map(|id| self.name_of(*id)).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handles of all root nodes, in insertion order.
    pub fn roots(&self) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, node)| node.is_root())
            .map(|(id, _)| id)
            .collect()
    }

    /// All nodes with their handles, in insertion order.
    ///
    /// Parents always come before their children.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ForestNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }
}

impl ParentAccessor for Forest {
    type Node = NodeId;

    fn parent_of(&self, node: &NodeId) -> Option<NodeId> {
        self.get(*node).and_then(|n| n.parent)
    }
}

impl CapabilityTest<NodeId> for Forest {
    fn has_capability_own(&self, node: &NodeId, name: &str) -> bool {
        self.get(*node).is_some_and(|n| n.has_own(name))
    }

    fn own_capability_names(&self, node: &NodeId) -> Vec<String> {
        self.get(*node)
            .map(|n| n.capabilities.clone())
            .unwrap_or_default()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
