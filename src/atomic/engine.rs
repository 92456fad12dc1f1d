/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Counter Engine
//!
//! Generic read-modify-retry operations shared by every counter type. Each
//! function is parameterized by the word and, for arithmetic, by the
//! overflow policy. The counter macro instantiates them per type.
//!
//! Operations are `Relaxed` unless noted. `add_unless` and
//! `dec_if_positive` are fully ordered because their callers decide object
//! lifetime on the result.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::exclusive::{
    ActiveTier,
    ExclusiveUpdate,
    Pending,
    Update,
};
use crate::atomic::policy::OverflowPolicy;
use crate::atomic::word::Word;
use crate::sync::{
    fence,
    Ordering,
};
use crate::trap::Operation;

#[inline]
fn commit<W, F>(cell: &W::Cell, f: F) -> Update<W>
where
    W: Word,
    F: FnMut(W) -> Pending<W>,
{
    ActiveTier::update(cell, Ordering::Relaxed, f)
}

/// Bare load. Never retried.
#[inline]
pub(crate) fn read<W: Word>(cell: &W::Cell) -> W {
    W::load(cell, Ordering::Relaxed)
}

#[inline]
pub(crate) fn set<W: Word>(cell: &W::Cell, value: W) {
    W::store(cell, value, Ordering::Relaxed);
}

#[inline]
pub(crate) fn add_return<W, P>(cell: &W::Cell, op: Operation, delta: W) -> W
where
    W: Word,
    P: OverflowPolicy,
{
    commit(cell, |current| Pending::Commit(P::add(op, current, delta))).new
}

#[inline]
pub(crate) fn sub_return<W, P>(cell: &W::Cell, op: Operation, delta: W) -> W
where
    W: Word,
    P: OverflowPolicy,
{
    commit(cell, |current| Pending::Commit(P::sub(op, current, delta))).new
}

#[inline]
pub(crate) fn fetch_add<W, P>(cell: &W::Cell, op: Operation, delta: W) -> W
where
    W: Word,
    P: OverflowPolicy,
{
    commit(cell, |current| Pending::Commit(P::add(op, current, delta))).old
}

#[inline]
pub(crate) fn fetch_sub<W, P>(cell: &W::Cell, op: Operation, delta: W) -> W
where
    W: Word,
    P: OverflowPolicy,
{
    commit(cell, |current| Pending::Commit(P::sub(op, current, delta))).old
}

/// Adds `a` unless the counter holds `u`. Returns the value read.
///
/// The add, and so the overflow check, only happens when the counter
/// differs from `u`. Fenced on entry, and on exit when the add happened.
pub(crate) fn add_unless<W, P>(cell: &W::Cell, a: W, u: W) -> W
where
    W: Word,
    P: OverflowPolicy,
{
    fence(Ordering::SeqCst);
    let update = commit(cell, |current| {
        if current == u {
            Pending::Keep
        } else {
            Pending::Commit(P::add(Operation::AddUnless, current, a))
        }
    });
    if update.old != u {
        fence(Ordering::SeqCst);
    }
    update.old
}

/// Decrements the counter if it is positive.
///
/// Returns the decremented value, or `old - 1` clamped to the minimum when
/// the counter was not positive and was left alone. A negative result
/// therefore always means nothing was stored.
pub(crate) fn dec_if_positive<W, P>(cell: &W::Cell) -> W
where
    W: Word,
    P: OverflowPolicy,
{
    fence(Ordering::SeqCst);
    let update = commit(cell, |current| {
        if current <= W::ZERO {
            Pending::Keep
        } else {
            Pending::Commit(P::sub(Operation::DecIfPositive, current, W::ONE))
        }
    });
    fence(Ordering::SeqCst);
    if update.committed {
        update.new
    } else {
        update.old.saturating_sub(W::ONE)
    }
}

/// Applies a bitwise update and returns the previous value. Never checked.
#[inline]
pub(crate) fn fetch_bitwise<W, F>(cell: &W::Cell, f: F) -> W
where
    W: Word,
    F: Fn(W) -> W,
{
    commit(cell, |current| Pending::Commit(f(current))).old
}

#[inline]
pub(crate) fn xchg<W: Word>(cell: &W::Cell, value: W) -> W {
    commit(cell, |_| Pending::Commit(value)).old
}

/// Stores `new` if the counter holds `old`. Returns the value read, whether
/// or not the store happened.
#[inline]
pub(crate) fn cmpxchg<W: Word>(cell: &W::Cell, old: W, new: W) -> W {
    commit(cell, |current| {
        if current == old {
            Pending::Commit(new)
        } else {
            Pending::Keep
        }
    })
    .old
}
