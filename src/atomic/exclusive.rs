/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Exclusive Update
//!
//! The read-compute-commit primitive every counter operation is built on.
//! One attempt reads the cell, asks the caller for a [`Pending`] update and
//! commits it only if no other writer got in between. Callers retry on
//! [`Contended`] until the update lands.
//!
//! Two tiers implement the primitive:
//!
//! - [`LockFree`]: a weak compare-exchange, the equivalent of a
//!   load-linked/store-conditional pair. Serves any number of CPUs.
//! - [`CriticalSection`]: masks interrupts for the duration of the
//!   read-modify-write. Only sound on a single CPU, which
//!   [`ExclusiveUpdate::validate`] enforces.
//!
//! A build uses exactly one of them, [`ActiveTier`], chosen by the
//! `single-core` feature.
//!
//! # Author
//!
//! Haixing Hu

use std::num::NonZeroUsize;
use std::sync::atomic::AtomicBool;

use thiserror::Error;

use crate::atomic::word::Word;
use crate::error::{
    AtomicError,
    AtomicResult,
};
use crate::sync::{
    spin_loop,
    Ordering,
};

/// The value a writer intends to commit during one attempt.
///
/// Computed from the value read by that attempt and thrown away if the
/// attempt is contended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending<W> {
    /// Store this value.
    Commit(W),
    /// Leave the cell as it is.
    Keep,
}

/// Outcome of a finished update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Update<W> {
    /// The value the successful attempt read.
    pub old: W,
    /// The value the cell holds after the attempt. Equals `old` when the
    /// attempt kept the cell.
    pub new: W,
    /// Whether a store took place.
    pub committed: bool,
}

impl<W: Copy> Update<W> {
    #[inline]
    fn committed(old: W, new: W) -> Self {
        Self {
            old,
            new,
            committed: true,
        }
    }

    #[inline]
    fn kept(old: W) -> Self {
        Self {
            old,
            new: old,
            committed: false,
        }
    }
}

/// Another writer touched the cell between the read and the store.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("exclusive update contended")]
pub struct Contended;

/// The exclusive-update primitive.
pub trait ExclusiveUpdate {
    /// Tier name, for diagnostics.
    const NAME: &'static str;

    /// Makes one attempt to replace the cell's value with the pending
    /// update `f` computes from it.
    ///
    /// # Parameters
    ///
    /// * `cell` - The atomic cell.
    /// * `order` - Ordering of a successful store.
    /// * `f` - Computes the pending update from the value read.
    ///
    /// # Returns
    ///
    /// The update on success, or `Err(Contended)` if another writer
    /// intervened. Nothing is stored in the latter case.
    fn try_update<W, F>(cell: &W::Cell, order: Ordering, f: F) -> Result<Update<W>, Contended>
    where
        W: Word,
        F: FnOnce(W) -> Pending<W>;

    /// Retries [`try_update`](Self::try_update) until an attempt is not
    /// contended. `f` is called afresh on every attempt.
    ///
    /// The retry count is unbounded; the loop spins and never blocks.
    #[inline]
    fn update<W, F>(cell: &W::Cell, order: Ordering, mut f: F) -> Update<W>
    where
        W: Word,
        F: FnMut(W) -> Pending<W>,
    {
        loop {
            match Self::try_update(cell, order, &mut f) {
                Ok(update) => return update,
                Err(Contended) => spin_loop(),
            }
        }
    }

    /// Checks that the tier can serve `cpus` CPUs.
    ///
    /// # Errors
    ///
    /// Returns [`AtomicError::MultiCoreUnsupported`] if it cannot.
    fn validate(cpus: NonZeroUsize) -> AtomicResult<()>;
}

/// Lock-free tier built on weak compare-exchange.
#[derive(Debug, Clone, Copy, Default)]
pub struct LockFree;

impl ExclusiveUpdate for LockFree {
    const NAME: &'static str = "lock-free";

    #[inline]
    fn try_update<W, F>(cell: &W::Cell, order: Ordering, f: F) -> Result<Update<W>, Contended>
    where
        W: Word,
        F: FnOnce(W) -> Pending<W>,
    {
        let current = W::load(cell, Ordering::Relaxed);
        match f(current) {
            Pending::Keep => Ok(Update::kept(current)),
            Pending::Commit(new) => {
                match W::compare_exchange_weak(cell, current, new, order, Ordering::Relaxed) {
                    Ok(_) => Ok(Update::committed(current, new)),
                    Err(_) => Err(Contended),
                }
            }
        }
    }

    #[inline]
    fn validate(_cpus: NonZeroUsize) -> AtomicResult<()> {
        Ok(())
    }
}

/// Interrupt-masking tier for single-CPU targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct CriticalSection;

static IRQ_MASKED: AtomicBool = AtomicBool::new(false);

/// Local interrupt mask, restored on drop.
///
/// Dropping also runs when a trap unwinds out of the masked region.
struct IrqGuard;

impl IrqGuard {
    #[inline]
    fn save() -> Self {
        while IRQ_MASKED
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            std::hint::spin_loop();
        }
        IrqGuard
    }
}

impl Drop for IrqGuard {
    #[inline]
    fn drop(&mut self) {
        IRQ_MASKED.store(false, Ordering::Release);
    }
}

/// Strongest ordering a plain store can carry for a read-modify-write
/// ordering.
#[inline]
fn store_order(order: Ordering) -> Ordering {
    match order {
        Ordering::Release | Ordering::AcqRel => Ordering::Release,
        Ordering::SeqCst => Ordering::SeqCst,
        _ => Ordering::Relaxed,
    }
}

impl ExclusiveUpdate for CriticalSection {
    const NAME: &'static str = "critical-section";

    #[inline]
    fn try_update<W, F>(cell: &W::Cell, order: Ordering, f: F) -> Result<Update<W>, Contended>
    where
        W: Word,
        F: FnOnce(W) -> Pending<W>,
    {
        let _irq = IrqGuard::save();
        let current = W::load(cell, Ordering::Relaxed);
        match f(current) {
            Pending::Keep => Ok(Update::kept(current)),
            Pending::Commit(new) => {
                W::store(cell, new, store_order(order));
                Ok(Update::committed(current, new))
            }
        }
    }

    fn validate(cpus: NonZeroUsize) -> AtomicResult<()> {
        if cpus.get() > 1 {
            return Err(AtomicError::MultiCoreUnsupported { cpus: cpus.get() });
        }
        Ok(())
    }
}

/// The tier counters use in this build.
#[cfg(not(feature = "single-core"))]
pub type ActiveTier = LockFree;

/// The tier counters use in this build.
#[cfg(feature = "single-core")]
pub type ActiveTier = CriticalSection;
