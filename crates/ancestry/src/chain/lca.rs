//! Lowest common ancestor of two chains.
//!
//! The chain of `a` is materialized into a membership set, then the chain
//! of `b` is scanned from `b` toward its root. The first node of `b`'s
//! chain that is already in the set is the lowest common ancestor: `b`'s
//! chain is scanned most-specific first, so nothing deeper can follow.
//!
//! Conventions:
//! - `lowest_common_ancestor(a, a) == Some(a)`.
//! - If `a` is an ancestor of `b` the answer is `a` (and vice versa). No
//!   special case handles this; the membership test finds it.
//! - Chains ending at different roots have no common ancestor (`None`).
//!
//! Both sets double as visited sets, so a walk that revisits a node
//! stops there instead of looping.

use std::collections::HashSet;

use crate::error::{AncestryError, Result};
use crate::host::ParentAccessor;

use super::walk::walk;

/// The deepest node present in both the chain of `a` and the chain of `b`.
///
/// O(len(a) + len(b)) time. The chain of `a` must be finite.
pub fn lowest_common_ancestor<P: ParentAccessor + ?Sized>(
    parents: &P,
    a: &P::Node,
    b: &P::Node,
) -> Option<P::Node> {
    let mut seen_from_a = HashSet::new();
    for node in walk(parents, a) {
        if !seen_from_a.insert(node) {
            break;
        }
    }
    match first_shared(parents, b, &seen_from_a, None) {
        Scan::Shared(node) => Some(node),
        Scan::Root | Scan::Stopped => None,
    }
}

/// Like [`lowest_common_ancestor`], but either chain longer than
/// `max_len` nodes fails with [`AncestryError::ChainTooDeep`].
///
/// Use this when the parent relation is untrusted or possibly cyclic.
pub fn lowest_common_ancestor_bounded<P: ParentAccessor + ?Sized>(
    parents: &P,
    a: &P::Node,
    b: &P::Node,
    max_len: usize,
) -> Result<Option<P::Node>> {
    let mut seen_from_a = HashSet::new();
    for node in walk(parents, a) {
        if seen_from_a.len() == max_len || !seen_from_a.insert(node) {
            return Err(AncestryError::ChainTooDeep { limit: max_len });
        }
    }
    match first_shared(parents, b, &seen_from_a, Some(max_len)) {
        Scan::Shared(node) => Ok(Some(node)),
        Scan::Root => Ok(None),
        Scan::Stopped => Err(AncestryError::ChainTooDeep { limit: max_len }),
    }
}

/// How a scan of `b`'s chain ended.
enum Scan<N> {
    /// First node of `b`'s chain that is also on `a`'s chain.
    Shared(N),
    /// Reached `b`'s root without meeting `a`'s chain.
    Root,
    /// Revisited a node, or hit the length limit.
    Stopped,
}

/// Scan the chain of `b` for the first node in `seen_from_a`.
fn first_shared<P: ParentAccessor + ?Sized>(
    parents: &P,
    b: &P::Node,
    seen_from_a: &HashSet<P::Node>,
    max_len: Option<usize>,
) -> Scan<P::Node> {
    let mut seen_from_b = HashSet::new();
    for node in walk(parents, b) {
        if max_len == Some(seen_from_b.len()) {
            return Scan::Stopped;
        }
        if seen_from_a.contains(&node) {
            return Scan::Shared(node);
        }
        if !seen_from_b.insert(node) {
            // b's chain loops without meeting a's chain.
            return Scan::Stopped;
        }
    }
    Scan::Root
}
