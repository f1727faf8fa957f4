//! Collaborator contracts between the engine and its host.
//!
//! The engine never builds or mutates nodes. It only needs two things
//! from the host object model:
//!
//! - [`ParentAccessor`] — the single-parent link, `None` at a root.
//! - [`CapabilityTest`] — whether a node *itself* exposes a capability.
//!
//! Node handles are compared by identity. `Eq` and `Hash` on
//! [`ParentAccessor::Node`] must mean "same underlying value" (an arena
//! index, an address), never structural equality. [`NodeRef`] provides
//! that for borrowed values.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

// ── ParentAccessor ────────────────────────────────────────────────────────────

/// Read-only access to the parent relation of a host structure.
pub trait ParentAccessor {
    /// Identity handle for a node in the host structure.
    type Node: Clone + Eq + Hash;

    /// Return the parent of `node`, or `None` if `node` is a root.
    ///
    /// Must be a pure lookup with no side effects.
    fn parent_of(&self, node: &Self::Node) -> Option<Self::Node>;
}

impl<P: ParentAccessor + ?Sized> ParentAccessor for &P {
    type Node = P::Node;

    fn parent_of(&self, node: &Self::Node) -> Option<Self::Node> {
        (**self).parent_of(node)
    }
}

// ── CapabilityTest ────────────────────────────────────────────────────────────

/// Per-node capability lookup.
///
/// Both methods report only the node's *own* capabilities. Inheritance
/// along the chain is composed by the engine.
pub trait CapabilityTest<N> {
    /// Whether `node` itself exposes the capability `name`.
    fn has_capability_own(&self, node: &N, name: &str) -> bool;

    /// The capability names `node` itself exposes, in host order.
    fn own_capability_names(&self, node: &N) -> Vec<String>;
}

impl<N, C: CapabilityTest<N> + ?Sized> CapabilityTest<N> for &C {
    fn has_capability_own(&self, node: &N, name: &str) -> bool {
        (**self).has_capability_own(node, name)
    }

    fn own_capability_names(&self, node: &N) -> Vec<String> {
        (**self).own_capability_names(node)
    }
}

// ── FnParent ──────────────────────────────────────────────────────────────────

/// Adapter turning a closure into a [`ParentAccessor`].
///
/// ```
/// use ancestry::{chain, FnParent};
///
/// // 5 -> 2 -> 1 -> 0 (halving down to zero)
/// let halving = FnParent::new(|n: &u32| if *n == 0 { None } else { Some(n / 2) });
/// assert_eq!(chain(&halving, &5, None), vec![5, 2, 1, 0]);
/// ```
pub struct FnParent<N, F> {
    f: F,
    _node: PhantomData<fn(&N) -> Option<N>>,
}

impl<N, F> FnParent<N, F>
where
    F: Fn(&N) -> Option<N>,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _node: PhantomData,
        }
    }
}

impl<N, F> ParentAccessor for FnParent<N, F>
where
    N: Clone + Eq + Hash,
    F: Fn(&N) -> Option<N>,
{
    type Node = N;

    fn parent_of(&self, node: &N) -> Option<N> {
        (self.f)(node)
    }
}

// ── NodeRef ───────────────────────────────────────────────────────────────────

/// Identity handle over a borrowed value.
///
/// Two `NodeRef`s are equal iff they point at the same value, regardless
/// of what that value contains.
pub struct NodeRef<'a, T: ?Sized>(pub &'a T);

impl<'a, T: ?Sized> NodeRef<'a, T> {
    /// The referenced value.
    pub fn get(&self) -> &'a T {
        self.0
    }
}

impl<T: ?Sized> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NodeRef<'_, T> {}

impl<T: ?Sized> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl<T: ?Sized> Eq for NodeRef<'_, T> {}

impl<T: ?Sized> Hash for NodeRef<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.0, state);
    }
}

impl<T: ?Sized> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeRef({:p})", self.0)
    }
}

impl<T: ?Sized> std::ops::Deref for NodeRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
