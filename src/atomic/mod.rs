/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Hardened Atomic Counters
//!
//! Signed atomic counters in two flavours that cannot be confused at compile
//! time:
//!
//! - **Checked** (`AtomicI32`, `AtomicI64`): arithmetic that would leave
//!   the signed range raises the overflow trap instead of committing.
//! - **Wrapping** (`AtomicWrapI32`, `AtomicWrapI64`): the same operations
//!   with two's-complement wraparound.
//!
//! Every mutation is a read-modify-retry cycle over the
//! [`ExclusiveUpdate`] primitive.
//!
//! # Author
//!
//! Haixing Hu

#[macro_use]
mod atomic_counter_macro;

mod atomic_i32;
mod atomic_i64;
mod atomic_wrap_i32;
mod atomic_wrap_i64;
mod engine;
mod exclusive;
mod local_wrap;
mod policy;
mod traits;
mod word;

pub use atomic_i32::AtomicI32;
pub use atomic_i64::AtomicI64;
pub use atomic_wrap_i32::AtomicWrapI32;
pub use atomic_wrap_i64::AtomicWrapI64;
pub use exclusive::{
    ActiveTier,
    Contended,
    CriticalSection,
    ExclusiveUpdate,
    LockFree,
    Pending,
    Update,
};
pub use local_wrap::{
    LocalValue,
    LocalWrap,
};
pub use policy::{
    Checked,
    OverflowPolicy,
    Wrapping,
};
pub use traits::{
    Atomic,
    AtomicCounter,
};
pub use word::{
    Width,
    Word,
};

/// Checked counter of pointer width.
#[cfg(target_pointer_width = "64")]
pub type AtomicLong = AtomicI64;

/// Wrapping counter of pointer width.
#[cfg(target_pointer_width = "64")]
pub type AtomicLongWrap = AtomicWrapI64;

/// Checked counter of pointer width.
#[cfg(not(target_pointer_width = "64"))]
pub type AtomicLong = AtomicI32;

/// Wrapping counter of pointer width.
#[cfg(not(target_pointer_width = "64"))]
pub type AtomicLongWrap = AtomicWrapI32;
