//! Error types for the ancestry engine.
//!
//! Most "nothing found" outcomes are `None`, not errors. The variants here
//! cover caller mistakes (usage errors), exceeded walk bounds, and the
//! host-side forest and storage layers.

/// Ancestry error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum AncestryError {
    #[error("Negative distance: {0} (ancestor distance must be >= 0)")]
    NegativeDistance(i64),

    #[error("Chain exceeds the maximum length of {limit} nodes")]
    ChainTooDeep { limit: usize },

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Duplicate node name: {0}")]
    DuplicateNode(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Forest is full: at most {0} nodes")]
    CapacityExceeded(u32),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid file format: {0}")]
    InvalidFileFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, AncestryError>;
