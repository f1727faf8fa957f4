//! Query limits for walking untrusted parent relations.
//!
//! The engine is unbounded by default. A bound turns a runaway walk
//! (cyclic or absurdly deep relation) into
//! [`AncestryError::ChainTooDeep`](crate::AncestryError::ChainTooDeep).

use std::env::VarError;

use serde::{Deserialize, Serialize};

use crate::error::{AncestryError, Result};
use crate::host::ParentAccessor;

/// Environment variable holding the default maximum chain length.
pub const MAX_CHAIN_ENV: &str = "ANCESTRY_MAX_CHAIN";

/// Bounds applied to depth and LCA queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryLimits {
    /// Maximum number of nodes a single chain may have. `None` = unbounded.
    pub max_chain_len: Option<usize>,
}

impl QueryLimits {
    /// No bounds.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Bound every chain to `max_chain_len` nodes.
    pub fn bounded(max_chain_len: usize) -> Self {
        Self {
            max_chain_len: Some(max_chain_len),
        }
    }

    /// Read limits from [`MAX_CHAIN_ENV`]. Unset means unbounded; a value
    /// that is not valid UTF-8 is rejected like any other malformed value.
    pub fn from_env() -> Result<Self> {
        Self::from_var(std::env::var(MAX_CHAIN_ENV))
    }

    fn from_var(var: std::result::Result<String, VarError>) -> Result<Self> {
        match var {
            Ok(raw) => Self::parse(&raw),
            Err(VarError::NotPresent) => Ok(Self::unbounded()),
            Err(VarError::NotUnicode(raw)) => {
                let reason = format!("{MAX_CHAIN_ENV}={raw:?}: not valid UTF-8");
                Err(AncestryError::InvalidConfig(reason))
            }
        }
    }

    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().parse::<usize>() {
            Ok(value) => Ok(Self::bounded(value)),
            Err(e) => {
                let reason = format!("{MAX_CHAIN_ENV}={raw:?}: {e}");
                Err(AncestryError::InvalidConfig(reason))
            }
        }
    }

    /// Replace the bound when `max_chain_len` is given.
    pub fn with_override(self, max_chain_len: Option<usize>) -> Self {
        match max_chain_len {
            Some(n) => Self::bounded(n),
            None => self,
        }
    }

    /// Depth of `start`, honouring the bound.
    pub fn depth<P: ParentAccessor + ?Sized>(&self, parents: &P, start: &P::Node) -> Result<usize> {
        match self.max_chain_len {
            Some(limit) => crate::chain::depth_bounded(parents, start, limit),
            None => Ok(crate::chain::depth(parents, start)),
        }
    }

    /// Lowest common ancestor of `a` and `b`, honouring the bound.
    pub fn lowest_common_ancestor<P: ParentAccessor + ?Sized>(
        &self,
        parents: &P,
        a: &P::Node,
        b: &P::Node,
    ) -> Result<Option<P::Node>> {
        match self.max_chain_len {
            Some(limit) => crate::chain::lowest_common_ancestor_bounded(parents, a, b, limit),
            None => Ok(crate::chain::lowest_common_ancestor(parents, a, b)),
        }
    }
}
