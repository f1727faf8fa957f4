//! Forest persistence — store and retrieve a [`Forest`] as JSON.
//!
//! File format:
//! ```json
//! {
//!     "version": 1,
//!     "nodes": [
//!         { "name": "root", "parent": null, "capabilities": ["describe"] },
//!         { "name": "child", "parent": "root", "capabilities": [] }
//!     ]
//! }
//! ```
//!
//! Nodes are written in insertion order, so every parent precedes its
//! children. Loading replays the records through [`Forest::insert`], which
//! rejects forward or dangling parent references.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AncestryError, Result};
use crate::forest::Forest;

// ── File format constants ─────────────────────────────────────────────────────

const FOREST_FILE_VERSION: u32 = 1;

// ── On-disk structure ─────────────────────────────────────────────────────────

/// One node as written to disk. Parents are referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub name: String,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
}

/// Wrapper written to disk for a forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestFile {
    /// Format version number.
    pub version: u32,
    /// Nodes in insertion order.
    pub nodes: Vec<NodeRecord>,
}

impl ForestFile {
    /// Snapshot a forest into its on-disk form.
    pub fn from_forest(forest: &Forest) -> Self {
        let nodes = forest
            .iter()
            .map(|(_, node)| NodeRecord {
                name: node.name.clone(),
                parent: node
                    .parent
                    .and_then(|p| forest.name_of(p))
                    .map(str::to_string),
                capabilities: node.capabilities.clone(),
            })
            .collect();

        Self {
            version: FOREST_FILE_VERSION,
            nodes,
        }
    }

    /// Rebuild the forest described by this file.
    pub fn into_forest(self) -> Result<Forest> {
        if self.version != FOREST_FILE_VERSION {
            return Err(AncestryError::InvalidFileFormat(format!(
                "unsupported forest file version {} (expected {FOREST_FILE_VERSION})",
                self.version
            )));
        }

        let mut forest = Forest::new();
        for record in self.nodes {
            let parent = record.parent.as_deref();
            forest.insert(&record.name, parent, record.capabilities)?;
        }
        Ok(forest)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Serialize a forest to pretty-printed JSON bytes.
pub fn write_forest(forest: &Forest) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(&ForestFile::from_forest(forest))
        .map_err(|e| AncestryError::SerializationError(e.to_string()))
}

/// Parse a forest from JSON bytes.
pub fn read_forest(bytes: &[u8]) -> Result<Forest> {
    let file: ForestFile = serde_json::from_slice(bytes)
        .map_err(|e| AncestryError::InvalidFileFormat(format!("failed to parse forest: {e}")))?;
    file.into_forest()
}

/// Save a forest to `path`, creating parent directories as needed.
///
/// Any existing file is overwritten.
pub fn save_forest(path: &Path, forest: &Forest) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = write_forest(forest)?;
    std::fs::write(path, json)?;

    log::info!(
        "saved forest with {} nodes to {}",
        forest.len(),
        path.display()
    );
    Ok(())
}

/// Load a forest from `path`.
pub fn load_forest(path: &Path) -> Result<Forest> {
    if !path.exists() {
        return Err(AncestryError::NotFound(format!(
            "forest file not found: {}",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)?;
    let forest = read_forest(&bytes).map_err(|e| match e {
        AncestryError::InvalidFileFormat(msg) => {
            AncestryError::InvalidFileFormat(format!("{}: {msg}", path.display()))
        }
        other => other,
    })?;

    log::debug!(
        "loaded forest with {} nodes from {}",
        forest.len(),
        path.display()
    );
    Ok(forest)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
