/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Counter Words
//!
//! The signed machine words a counter can hold, together with the atomic
//! cell that stores them. The engine is generic over [`Word`] so the same
//! retry loop serves both widths.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::sync::{
    AtomicI32,
    AtomicI64,
    Ordering,
};

/// Bit width of a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 32-bit counters (`AtomicI32`, `AtomicWrapI32`).
    W32,
    /// 64-bit counters (`AtomicI64`, `AtomicWrapI64`).
    W64,
}

impl Width {
    /// Number of bits in the word.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{}", self.bits())
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// A signed word stored in an atomic cell.
///
/// Sealed: only `i32` and `i64` are counter words.
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + fmt::Debug
    + fmt::Display
    + From<i32>
    + Into<i64>
    + Send
    + Sync
    + 'static
{
    /// The atomic cell holding this word.
    type Cell: Send + Sync;

    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;
    /// Zero.
    const ZERO: Self;
    /// One.
    const ONE: Self;
    /// Width tag used when reporting faults.
    const WIDTH: Width;

    /// Plain load from the cell.
    fn load(cell: &Self::Cell, order: Ordering) -> Self;

    /// Plain store to the cell.
    fn store(cell: &Self::Cell, value: Self, order: Ordering);

    /// Conditional store: commits `new` only if the cell still holds
    /// `current`. May fail spuriously.
    fn compare_exchange_weak(
        cell: &Self::Cell,
        current: Self,
        new: Self,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self, Self>;

    /// Addition returning the two's-complement result and the overflow flag.
    fn overflowing_add(self, rhs: Self) -> (Self, bool);

    /// Subtraction returning the two's-complement result and the overflow
    /// flag.
    fn overflowing_sub(self, rhs: Self) -> (Self, bool);

    /// Subtraction clamped to the representable range.
    fn saturating_sub(self, rhs: Self) -> Self;

    /// Bitwise AND.
    fn bit_and(self, rhs: Self) -> Self;

    /// Bitwise OR.
    fn bit_or(self, rhs: Self) -> Self;

    /// Bitwise XOR.
    fn bit_xor(self, rhs: Self) -> Self;

    /// Bitwise NOT.
    fn bit_not(self) -> Self;
}

macro_rules! impl_word {
    ($value_type:ty, $cell_type:ty, $width:expr) => {
        impl Word for $value_type {
            type Cell = $cell_type;

            const MIN: Self = <$value_type>::MIN;
            const MAX: Self = <$value_type>::MAX;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const WIDTH: Width = $width;

            #[inline]
            fn load(cell: &Self::Cell, order: Ordering) -> Self {
                cell.load(order)
            }

            #[inline]
            fn store(cell: &Self::Cell, value: Self, order: Ordering) {
                cell.store(value, order);
            }

            #[inline]
            fn compare_exchange_weak(
                cell: &Self::Cell,
                current: Self,
                new: Self,
                success: Ordering,
                failure: Ordering,
            ) -> Result<Self, Self> {
                cell.compare_exchange_weak(current, new, success, failure)
            }

            #[inline]
            fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                <$value_type>::overflowing_add(self, rhs)
            }

            #[inline]
            fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
                <$value_type>::overflowing_sub(self, rhs)
            }

            #[inline]
            fn saturating_sub(self, rhs: Self) -> Self {
                <$value_type>::saturating_sub(self, rhs)
            }

            #[inline]
            fn bit_and(self, rhs: Self) -> Self {
                self & rhs
            }

            #[inline]
            fn bit_or(self, rhs: Self) -> Self {
                self | rhs
            }

            #[inline]
            fn bit_xor(self, rhs: Self) -> Self {
                self ^ rhs
            }

            #[inline]
            fn bit_not(self) -> Self {
                !self
            }
        }
    };
}

impl_word!(i32, AtomicI32, Width::W32);
impl_word!(i64, AtomicI64, Width::W64);
