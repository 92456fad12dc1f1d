/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Overflow Trap
//!
//! The fault path of checked counters. When a checked operation sees the
//! overflow flag after computing its candidate value, it calls [`raise`]
//! instead of committing. The event then moves through four states:
//!
//! 1. **Detected**: the overflow flag was set, nothing was stored.
//! 2. **Faulted**: [`raise`] runs in place of the store.
//! 3. **Routed**: the installed [`FixupLookup`] picks a continuation for the
//!    fault site. A site with no entry is an unhandled fault and aborts.
//! 4. **Fatal**: the continuation ends the calling context.
//!
//! Two continuations are provided. [`terminate_context`] unwinds the
//! calling thread with a [`SecurityViolation`] payload and is the default
//! route. [`halt_system`] aborts the process. Unwinding requires the binary
//! to be built with `panic = "unwind"`; with `panic = "abort"` both behave
//! as a halt.
//!
//! # Author
//!
//! Haixing Hu

mod event;
mod fixup;

use std::sync::atomic::{
    AtomicU64,
    Ordering,
};
use std::sync::OnceLock;

use thiserror::Error;

use crate::error::{
    AtomicError,
    AtomicResult,
};

pub use event::{
    FaultSite,
    Operation,
    OverflowEvent,
    OverflowKind,
};
pub use fixup::{
    Continuation,
    FixupLookup,
    FixupTable,
};

/// Whether the trap is compiled in. When `false`, checked counters wrap.
pub const HARDENED: bool = cfg!(feature = "hardened");

static FIXUPS: OnceLock<Box<dyn FixupLookup>> = OnceLock::new();

static FAULTS: AtomicU64 = AtomicU64::new(0);

/// Installs the fixup lookup consulted by every subsequent fault.
///
/// Installation happens once. It fails if a table is already installed, or
/// if a fault has already occurred and the default table was put in place.
///
/// # Errors
///
/// Returns [`AtomicError::FixupsAlreadyInstalled`] on a second call.
pub fn install<L>(lookup: L) -> AtomicResult<()>
where
    L: FixupLookup + 'static,
{
    FIXUPS
        .set(Box::new(lookup))
        .map_err(|_| AtomicError::FixupsAlreadyInstalled)
}

/// Number of faults raised by this process so far.
pub fn fault_count() -> u64 {
    FAULTS.load(Ordering::Relaxed)
}

fn fixups() -> &'static dyn FixupLookup {
    FIXUPS
        .get_or_init(|| Box::new(FixupTable::with_default_routes()) as Box<dyn FixupLookup>)
        .as_ref()
}

/// Raises the fault for a detected overflow and hands it to its
/// continuation.
#[cold]
#[inline(never)]
pub(crate) fn raise(event: OverflowEvent) -> ! {
    FAULTS.fetch_add(1, Ordering::Relaxed);
    tracing::trace!(site = %event.site, kind = %event.kind, "hardened atomic fault raised");
    match fixups().lookup(event.site) {
        Some(continuation) => {
            tracing::debug!(site = %event.site, "routing hardened atomic fault");
            continuation(&event)
        }
        None => {
            tracing::error!(site = %event.site, "unhandled hardened atomic fault");
            std::process::abort()
        }
    }
}

/// An overflow treated as an integrity violation.
///
/// This is the panic payload [`terminate_context`] unwinds with.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("refcount {event}")]
pub struct SecurityViolation {
    /// The event that triggered the violation.
    pub event: OverflowEvent,
}

fn report(event: &OverflowEvent, action: &'static str) {
    tracing::error!(
        width = %event.site.width,
        op = %event.site.op,
        kind = %event.kind,
        observed = event.observed,
        operand = event.operand,
        action,
        "refcount overflow detected"
    );
}

/// Continuation that terminates the calling thread.
///
/// Unwinds with a [`SecurityViolation`] payload, so a supervisor joining or
/// catching the thread can tell a trap apart from any other panic.
pub fn terminate_context(event: &OverflowEvent) -> ! {
    report(event, "terminate");
    std::panic::panic_any(SecurityViolation { event: *event })
}

/// Continuation that halts the whole process.
pub fn halt_system(event: &OverflowEvent) -> ! {
    report(event, "halt");
    std::process::abort()
}
