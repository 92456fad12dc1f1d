/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Local Wrapping Counter
//!
//! A pointer-width wrapping counter meant to be updated by a single context,
//! such as a per-CPU statistic. It is always available, whether or not the
//! `hardened` feature is on, so code that genuinely wants modular counting
//! never depends on the build's hardening choice.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::AtomicLongWrap;

/// The word a [`LocalWrap`] holds.
#[cfg(target_pointer_width = "64")]
pub type LocalValue = i64;

/// The word a [`LocalWrap`] holds.
#[cfg(not(target_pointer_width = "64"))]
pub type LocalValue = i32;

/// Single-context wrapping long.
///
/// A thin shell over [`AtomicLongWrap`] exposing only the operations a
/// per-CPU counter needs.
#[derive(Default)]
#[repr(transparent)]
pub struct LocalWrap {
    a: AtomicLongWrap,
}

impl LocalWrap {
    /// Creates a counter holding `value`.
    #[cfg(not(loom))]
    #[inline]
    pub const fn new(value: LocalValue) -> Self {
        Self {
            a: AtomicLongWrap::new(value),
        }
    }

    /// Creates a counter holding `value`.
    #[cfg(loom)]
    pub fn new(value: LocalValue) -> Self {
        Self {
            a: AtomicLongWrap::new(value),
        }
    }

    /// Reads the current value.
    #[inline]
    pub fn read(&self) -> LocalValue {
        self.a.read()
    }

    /// Overwrites the current value.
    #[inline]
    pub fn set(&self, value: LocalValue) {
        self.a.set(value);
    }

    /// Adds one.
    #[inline]
    pub fn inc(&self) {
        self.a.inc();
    }

    /// Subtracts one.
    #[inline]
    pub fn dec(&self) {
        self.a.dec();
    }

    /// Adds `delta`.
    #[inline]
    pub fn add(&self, delta: LocalValue) {
        self.a.add(delta);
    }

    /// Subtracts `delta`.
    #[inline]
    pub fn sub(&self, delta: LocalValue) {
        self.a.sub(delta);
    }

    /// Subtracts `delta`; `true` if the result is zero.
    #[inline]
    pub fn sub_and_test(&self, delta: LocalValue) -> bool {
        self.a.sub_and_test(delta)
    }

    /// Adds `delta`, returning the new value.
    #[inline]
    pub fn add_return(&self, delta: LocalValue) -> LocalValue {
        self.a.add_return(delta)
    }

    /// Replaces the value with `new` if it equals `old`; returns the value
    /// observed.
    #[inline]
    pub fn cmpxchg(&self, old: LocalValue, new: LocalValue) -> LocalValue {
        self.a.cmpxchg(old, new)
    }
}

impl fmt::Debug for LocalWrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalWrap")
            .field("value", &self.read())
            .finish()
    }
}
