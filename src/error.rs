/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Errors
//!
//! Recoverable configuration errors. Overflow itself is never reported
//! through these types: a checked counter that overflows does not return.
//!
//! # Author
//!
//! Haixing Hu

use thiserror::Error;

use crate::trap::OverflowEvent;

/// Errors raised while configuring the atomic layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AtomicError {
    /// The fixup table was already installed, or already defaulted by an
    /// earlier fault.
    #[error("fixup table already installed")]
    FixupsAlreadyInstalled,

    /// The interrupt-masking tier only protects a single CPU.
    #[error("critical-section tier cannot serve {cpus} CPUs")]
    MultiCoreUnsupported {
        /// The CPU count the configuration claimed.
        cpus: usize,
    },
}

/// Result alias for [`AtomicError`].
pub type AtomicResult<T> = Result<T, AtomicError>;

/// Failures of a boundary test run.
///
/// A checked run passes only when the crossing step traps and leaves the
/// counter untouched; every other outcome maps to one of these variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// No catalog entry has this name.
    #[error("unknown boundary test `{0}`")]
    UnknownTest(String),

    /// The configured delta is not positive.
    #[error("harness delta must be positive, got {0}")]
    InvalidDelta(i32),

    /// The active exclusive-update tier rejected the configuration.
    #[error(transparent)]
    Tier(#[from] AtomicError),

    /// The warm-up sequence did not return.
    #[error("{test}: warm-up faulted: {detail}")]
    WarmupFaulted {
        /// Catalog name.
        test: &'static str,
        /// Rendered panic payload.
        detail: String,
    },

    /// The boundary crossing returned: the counter wrapped silently.
    #[error("{test}: boundary crossing returned, counter holds {value}")]
    MissedTrap {
        /// Catalog name.
        test: &'static str,
        /// Value after the crossing.
        value: i64,
    },

    /// The trap fired but the counter changed anyway.
    #[error("{test}: trap fired but counter moved from {before} to {after}")]
    TornCommit {
        /// Catalog name.
        test: &'static str,
        /// Value before the crossing.
        before: i64,
        /// Value after the trap.
        after: i64,
    },

    /// The crossing panicked with something other than a trap.
    #[error("{test}: boundary crossing panicked without a trap: {detail}")]
    UnexpectedPanic {
        /// Catalog name.
        test: &'static str,
        /// Rendered panic payload.
        detail: String,
    },

    /// A wrapping counter trapped.
    #[error("{test}: wrapping counter trapped: {event}")]
    UnexpectedTrap {
        /// Catalog name.
        test: &'static str,
        /// The event raised.
        event: OverflowEvent,
    },

    /// A wrapping counter ended on the wrong value.
    #[error("{test}: wrapped to {actual}, expected {expected}")]
    WrongWrap {
        /// Catalog name.
        test: &'static str,
        /// Two's-complement result of the crossing.
        expected: i64,
        /// Value the counter holds.
        actual: i64,
    },
}

/// Result alias for [`HarnessError`].
pub type HarnessResult<T> = Result<T, HarnessError>;
