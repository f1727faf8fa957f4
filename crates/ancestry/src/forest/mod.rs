//! In-memory ancestry forest — a concrete host for the chain engine.
//!
//! The forest module provides:
//! - Named nodes with an optional parent and their own capability names
//! - Arena-index handles ([`NodeId`]) compared by identity
//! - [`ParentAccessor`](crate::host::ParentAccessor) and
//!   [`CapabilityTest`](crate::host::CapabilityTest) implementations
//!
//! Parents must exist before their children are inserted, so a forest
//! built through [`Forest::insert`] is always acyclic.

pub mod arena;
pub mod node;

pub use arena::Forest;
pub use node::{ForestNode, NodeId};
