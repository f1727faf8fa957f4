//! Chain walking — enumeration, membership, depth, ancestor-at-depth.
//!
//! Every query here is a fold over [`Chain`], the iterator that yields a
//! node and then each successive parent until a root is passed.

use std::iter::FusedIterator;

use crate::error::{AncestryError, Result};
use crate::host::ParentAccessor;

// ── Chain iterator ────────────────────────────────────────────────────────────

/// Iterator over `start, parent(start), parent(parent(start)), …`.
///
/// Ends after yielding the root. On a cyclic parent relation it never
/// ends; bound it with [`Iterator::take`] or use the `_bounded` queries.
pub struct Chain<'p, P: ParentAccessor + ?Sized> {
    parents: &'p P,
    next: Option<P::Node>,
}

impl<P: ParentAccessor + ?Sized> Iterator for Chain<'_, P> {
    type Item = P::Node;

    fn next(&mut self) -> Option<P::Node> {
        let current = self.next.take()?;
        self.next = self.parents.parent_of(&current);
        Some(current)
    }
}

impl<P: ParentAccessor + ?Sized> FusedIterator for Chain<'_, P> {}

/// Iterator over the strict ancestors of a node (the node itself excluded).
pub struct Ancestors<'p, P: ParentAccessor + ?Sized> {
    inner: Chain<'p, P>,
}

impl<P: ParentAccessor + ?Sized> Iterator for Ancestors<'_, P> {
    type Item = P::Node;

    fn next(&mut self) -> Option<P::Node> {
        self.inner.next()
    }
}

impl<P: ParentAccessor + ?Sized> FusedIterator for Ancestors<'_, P> {}

/// Walk the chain starting at (and including) `start`.
pub fn walk<'p, P: ParentAccessor + ?Sized>(parents: &'p P, start: &P::Node) -> Chain<'p, P> {
    Chain {
        parents,
        next: Some(start.clone()),
    }
}

/// Walk the strict ancestors of `start`, nearest first.
pub fn ancestors<'p, P: ParentAccessor + ?Sized>(
    parents: &'p P,
    start: &P::Node,
) -> Ancestors<'p, P> {
    Ancestors {
        inner: Chain {
            parents,
            next: parents.parent_of(start),
        },
    }
}

// ── Enumeration ───────────────────────────────────────────────────────────────

/// Enumerate the chain from `start` toward its root.
///
/// With `limit`, the result is truncated once it holds `limit` nodes.
/// The result always contains at least `start`, even for `Some(0)`.
pub fn chain<P: ParentAccessor + ?Sized>(
    parents: &P,
    start: &P::Node,
    limit: Option<usize>,
) -> Vec<P::Node> {
    match limit {
        Some(limit) => walk(parents, start).take(limit.max(1)).collect(),
        None => walk(parents, start).collect(),
    }
}

// ── Membership and depth ──────────────────────────────────────────────────────

/// Whether `candidate` is a strict ancestor of `start`.
pub fn is_ancestor_of<P: ParentAccessor + ?Sized>(
    parents: &P,
    start: &P::Node,
    candidate: &P::Node,
) -> bool {
    ancestors(parents, start).any(|node| node == *candidate)
}

/// Number of nodes from `start` to its root, both ends included.
///
/// A root has depth 1.
pub fn depth<P: ParentAccessor + ?Sized>(parents: &P, start: &P::Node) -> usize {
    walk(parents, start).count()
}

/// Like [`depth`], but fails with [`AncestryError::ChainTooDeep`] once the
/// chain grows past `max_len` nodes instead of walking on.
pub fn depth_bounded<P: ParentAccessor + ?Sized>(
    parents: &P,
    start: &P::Node,
    max_len: usize,
) -> Result<usize> {
    let seen = walk(parents, start).take(max_len.saturating_add(1)).count();
    if seen > max_len {
        return Err(AncestryError::ChainTooDeep { limit: max_len });
    }
    Ok(seen)
}

/// The ancestor `distance` parent-steps above `start`.
///
/// `distance == 0` is `start` itself. Returns `None` when a root is
/// reached before `distance` steps have been taken.
pub fn ancestor_at_depth<P: ParentAccessor + ?Sized>(
    parents: &P,
    start: &P::Node,
    distance: usize,
) -> Option<P::Node> {
    walk(parents, start).nth(distance)
}

/// Validate a signed distance coming from an untrusted surface.
///
/// Negative distances are rejected. A distance too large for `usize`
/// saturates to `usize::MAX`: no chain is that long, so
/// [`ancestor_at_depth`] answers `None` for it, same as any other
/// distance past the root.
pub fn checked_distance(distance: i64) -> Result<usize> {
    if distance < 0 {
        return Err(AncestryError::NegativeDistance(distance));
    }
    Ok(usize::try_from(distance).unwrap_or(usize::MAX))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
