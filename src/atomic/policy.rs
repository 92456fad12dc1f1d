/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Overflow Policies
//!
//! A policy decides what happens when an add or subtract leaves the signed
//! range: [`Checked`] raises the trap before anything is committed,
//! [`Wrapping`] keeps the two's-complement result.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::word::Word;
use crate::trap::{
    self,
    FaultSite,
    Operation,
    OverflowEvent,
    OverflowKind,
};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Checked {}
    impl Sealed for super::Wrapping {}
}

/// Arithmetic policy of a counter.
pub trait OverflowPolicy: sealed::Sealed + Send + Sync + 'static {
    /// Whether overflow diverts into the trap under this build.
    const TRAPS: bool;

    /// Computes `current + delta` for `op`.
    fn add<W: Word>(op: Operation, current: W, delta: W) -> W;

    /// Computes `current - delta` for `op`.
    fn sub<W: Word>(op: Operation, current: W, delta: W) -> W;
}

/// Overflow traps. Degrades to [`Wrapping`] when the `hardened` feature is
/// off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Checked;

/// Overflow wraps modulo 2^width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Wrapping;

#[cold]
fn overflow<W: Word>(op: Operation, kind: OverflowKind, current: W, delta: W) -> ! {
    trap::raise(OverflowEvent {
        site: FaultSite {
            width: W::WIDTH,
            op,
        },
        kind,
        observed: current.into(),
        operand: delta.into(),
    })
}

impl OverflowPolicy for Checked {
    const TRAPS: bool = trap::HARDENED;

    #[inline]
    fn add<W: Word>(op: Operation, current: W, delta: W) -> W {
        let (result, overflowed) = current.overflowing_add(delta);
        if Self::TRAPS && overflowed {
            overflow(op, OverflowKind::of_add(delta < W::ZERO), current, delta);
        }
        result
    }

    #[inline]
    fn sub<W: Word>(op: Operation, current: W, delta: W) -> W {
        let (result, overflowed) = current.overflowing_sub(delta);
        if Self::TRAPS && overflowed {
            overflow(op, OverflowKind::of_sub(delta < W::ZERO), current, delta);
        }
        result
    }
}

impl OverflowPolicy for Wrapping {
    const TRAPS: bool = false;

    #[inline]
    fn add<W: Word>(_op: Operation, current: W, delta: W) -> W {
        current.overflowing_add(delta).0
    }

    #[inline]
    fn sub<W: Word>(_op: Operation, current: W, delta: W) -> W {
        current.overflowing_sub(delta).0
    }
}
