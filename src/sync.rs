/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! Atomic cell and fence shims.
//!
//! Under `--cfg loom` the counters are built on loom's model-checked cells so
//! every interleaving of the retry loop can be explored.
//!
//! # Author
//!
//! Haixing Hu

#[cfg(loom)]
pub(crate) use loom::hint::spin_loop;
#[cfg(loom)]
pub(crate) use loom::sync::atomic::{
    fence,
    AtomicI32,
    AtomicI64,
};

#[cfg(not(loom))]
pub(crate) use std::hint::spin_loop;
#[cfg(not(loom))]
pub(crate) use std::sync::atomic::{
    fence,
    AtomicI32,
    AtomicI64,
};

pub use std::sync::atomic::Ordering;
