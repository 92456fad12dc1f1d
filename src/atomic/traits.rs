/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines common traits for the counter types, providing a unified
//! interface over both widths and both overflow policies.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::policy::OverflowPolicy;
use crate::atomic::word::Word;

/// Common trait for all counter types.
///
/// Provides the operations that never check for overflow: loads, stores,
/// exchanges and bitwise updates.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The word stored in the counter.
    type Value: Word;

    /// Creates a counter holding `value`.
    fn with_value(value: Self::Value) -> Self
    where
        Self: Sized;

    /// Reads the current value with a bare load.
    fn read(&self) -> Self::Value;

    /// Overwrites the current value.
    fn set(&self, value: Self::Value);

    /// Replaces the value unconditionally, returning the previous one.
    fn xchg(&self, value: Self::Value) -> Self::Value;

    /// Replaces the value with `new` if it equals `old`.
    ///
    /// # Returns
    ///
    /// The value observed before the attempt. It equals `old` exactly when
    /// the replacement happened.
    fn cmpxchg(&self, old: Self::Value, new: Self::Value) -> Self::Value;

    /// Bitwise AND, returning the previous value.
    fn fetch_and(&self, mask: Self::Value) -> Self::Value;

    /// Bitwise AND with the complement of `mask`, returning the previous
    /// value.
    fn fetch_andnot(&self, mask: Self::Value) -> Self::Value;

    /// Bitwise OR, returning the previous value.
    fn fetch_or(&self, mask: Self::Value) -> Self::Value;

    /// Bitwise XOR, returning the previous value.
    fn fetch_xor(&self, mask: Self::Value) -> Self::Value;
}

/// Trait for counter arithmetic.
///
/// Every method here goes through the counter's [`OverflowPolicy`]: a
/// checked counter that would leave its signed range does not return.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicCounter: Atomic {
    /// The overflow policy of the counter.
    type Policy: OverflowPolicy;

    /// Adds `delta`.
    fn add(&self, delta: Self::Value);

    /// Subtracts `delta`.
    fn sub(&self, delta: Self::Value);

    /// Adds `delta`, returning the new value.
    fn add_return(&self, delta: Self::Value) -> Self::Value;

    /// Subtracts `delta`, returning the new value.
    fn sub_return(&self, delta: Self::Value) -> Self::Value;

    /// Adds one.
    fn inc(&self);

    /// Subtracts one.
    fn dec(&self);

    /// Adds one, returning the new value.
    fn inc_return(&self) -> Self::Value;

    /// Subtracts one, returning the new value.
    fn dec_return(&self) -> Self::Value;

    /// Adds `delta`, returning the previous value.
    fn fetch_add(&self, delta: Self::Value) -> Self::Value;

    /// Subtracts `delta`, returning the previous value.
    fn fetch_sub(&self, delta: Self::Value) -> Self::Value;

    /// Adds one; `true` if the result is zero.
    fn inc_and_test(&self) -> bool;

    /// Subtracts one; `true` if the result is zero.
    fn dec_and_test(&self) -> bool;

    /// Subtracts `delta`; `true` if the result is zero.
    fn sub_and_test(&self, delta: Self::Value) -> bool;

    /// Adds `delta`; `true` if the result is zero.
    fn add_and_test(&self, delta: Self::Value) -> bool;

    /// Adds `delta`; `true` if the result is negative.
    fn add_negative(&self, delta: Self::Value) -> bool;

    /// Adds `a` unless the value equals `u`, returning the previous value.
    fn add_unless(&self, a: Self::Value, u: Self::Value) -> Self::Value;

    /// Decrements if positive, returning the decremented value.
    fn dec_if_positive(&self) -> Self::Value;
}
