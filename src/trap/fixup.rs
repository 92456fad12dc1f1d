/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Fixup Table
//!
//! Maps a fault site to the continuation that takes over once the fault has
//! been raised. The host builds a table once and installs it with
//! [`install`](super::install); the fault path only ever looks entries up.
//!
//! # Author
//!
//! Haixing Hu

use std::collections::HashMap;
use std::fmt;

use super::event::{
    FaultSite,
    OverflowEvent,
};
use crate::atomic::Width;

/// Safe continuation of a fault. Never returns to the faulting operation.
pub type Continuation = fn(&OverflowEvent) -> !;

/// Lookup capability the fault path consults to route a fault.
pub trait FixupLookup: Send + Sync {
    /// Returns the continuation registered for `site`, if any.
    fn lookup(&self, site: FaultSite) -> Option<Continuation>;
}

/// Static routing table from fault sites to continuations.
///
/// Lookups try an exact site entry first, then a per-width entry, then the
/// table-wide fallback.
///
/// # Example
///
/// ```rust
/// use hardened_atomic::trap::{self, FixupTable};
/// use hardened_atomic::Width;
///
/// let table = FixupTable::new()
///     .route_width(Width::W64, trap::halt_system)
///     .route_all(trap::terminate_context);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct FixupTable {
    exact: HashMap<FaultSite, Continuation>,
    by_width: HashMap<Width, Continuation>,
    fallback: Option<Continuation>,
}

impl FixupTable {
    /// Creates an empty table. Every lookup misses until routes are added.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The table used when the host installs nothing: every site is routed
    /// to [`terminate_context`](super::terminate_context).
    pub fn with_default_routes() -> Self {
        Self::new().route_all(super::terminate_context)
    }

    /// Routes a single site.
    pub fn route(mut self, site: FaultSite, continuation: Continuation) -> Self {
        self.exact.insert(site, continuation);
        self
    }

    /// Routes every site of one width.
    pub fn route_width(mut self, width: Width, continuation: Continuation) -> Self {
        self.by_width.insert(width, continuation);
        self
    }

    /// Routes every site not matched by a narrower entry.
    pub fn route_all(mut self, continuation: Continuation) -> Self {
        self.fallback = Some(continuation);
        self
    }

    /// Number of registered entries, the fallback included.
    pub fn len(&self) -> usize {
        self.exact.len() + self.by_width.len() + usize::from(self.fallback.is_some())
    }

    /// Returns `true` if no entry is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FixupLookup for FixupTable {
    fn lookup(&self, site: FaultSite) -> Option<Continuation> {
        self.exact
            .get(&site)
            .or_else(|| self.by_width.get(&site.width))
            .copied()
            .or(self.fallback)
    }
}

impl fmt::Debug for FixupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixupTable")
            .field("exact", &self.exact.keys().collect::<Vec<_>>())
            .field("by_width", &self.by_width.keys().collect::<Vec<_>>())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}
