//! Chain traversal engine.
//!
//! All queries are pure functions of their inputs and the host's
//! [`ParentAccessor`](crate::host::ParentAccessor) /
//! [`CapabilityTest`](crate::host::CapabilityTest). Nothing is cached
//! between calls and nodes are never created or mutated.
//!
//! - [`walk`] — enumeration, membership, depth, ancestor-at-depth
//! - [`capability`] — capability lookup along a chain
//! - [`lca`] — lowest common ancestor of two chains

pub mod capability;
pub mod lca;
pub mod walk;

pub use capability::{all_capability_names, closest_ancestor_with, has_capability};
pub use lca::{lowest_common_ancestor, lowest_common_ancestor_bounded};
pub use walk::{
    ancestor_at_depth, ancestors, chain, checked_distance, depth, depth_bounded, is_ancestor_of,
    walk, Ancestors, Chain,
};
