//! Ancestry — query engine for linear ancestry chains.
//!
//! A chain is a node followed by its parent, its parent's parent, and so
//! on up to a root. This crate answers structural questions about such
//! chains: enumeration, capability lookup along the chain, depth,
//! ancestor-at-depth, and the lowest common ancestor of two chains.
//!
//! The engine is generic over the host: anything implementing
//! [`ParentAccessor`] (and [`CapabilityTest`] for the capability queries)
//! can be walked. [`Forest`] is the in-memory host used by the `anc` CLI.

pub mod chain;
pub mod config;
pub mod error;
pub mod forest;
pub mod host;
pub mod storage;

// Re-export primary types
pub use config::QueryLimits;
pub use error::{AncestryError, Result};
pub use forest::{Forest, ForestNode, NodeId};
pub use host::{CapabilityTest, FnParent, NodeRef, ParentAccessor};

// Re-export the query operations
pub use chain::{
    all_capability_names, ancestor_at_depth, ancestors, chain, checked_distance,
    closest_ancestor_with, depth, depth_bounded, has_capability, is_ancestor_of,
    lowest_common_ancestor, lowest_common_ancestor_bounded, walk, Ancestors, Chain,
};
