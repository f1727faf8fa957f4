//! Capability queries along a chain.
//!
//! The host reports capabilities per node; these functions compose them
//! along the chain. [`closest_ancestor_with`] skips the start node and
//! [`has_capability`] includes it. They are kept as two functions so the
//! caller always states which one they mean.

use crate::host::{CapabilityTest, ParentAccessor};

use super::walk::{ancestors, walk};

/// The nearest strict ancestor of `start` that itself exposes `name`.
///
/// `start` is never tested. Returns `None` for a root.
pub fn closest_ancestor_with<P, C>(
    parents: &P,
    caps: &C,
    start: &P::Node,
    name: &str,
) -> Option<P::Node>
where
    P: ParentAccessor + ?Sized,
    C: CapabilityTest<P::Node> + ?Sized,
{
    ancestors(parents, start).find(|node| caps.has_capability_own(node, name))
}

/// Whether `start` or any of its ancestors exposes `name`.
pub fn has_capability<P, C>(parents: &P, caps: &C, start: &P::Node, name: &str) -> bool
where
    P: ParentAccessor + ?Sized,
    C: CapabilityTest<P::Node> + ?Sized,
{
    walk(parents, start).any(|node| caps.has_capability_own(&node, name))
}

/// Every node's own capability names, concatenated from `start` to root.
///
/// Names repeated at different depths are all kept: a descendant's entry
/// comes before the ancestor entry it shadows.
pub fn all_capability_names<P, C>(parents: &P, caps: &C, start: &P::Node) -> Vec<String>
where
    P: ParentAccessor + ?Sized,
    C: CapabilityTest<P::Node> + ?Sized,
{
    walk(parents, start)
        .flat_map(|node| caps.own_capability_names(&node))
        .collect()
}
