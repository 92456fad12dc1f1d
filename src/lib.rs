/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # hardened-atomic
//!
//! Signed atomic counters that refuse to overflow.
//!
//! Reference counts that wrap turn into use-after-free. The checked counters
//! in this crate detect the overflow flag of every arithmetic step before
//! committing, and hand the fault to a trap that ends the offending context
//! instead. Counters that legitimately wrap use the separate wrapping types,
//! so the choice is visible in the type.
//!
//! ## Features
//!
//! - Checked counters: `AtomicI32`, `AtomicI64`, `AtomicLong`
//! - Wrapping counters: `AtomicWrapI32`, `AtomicWrapI64`, `AtomicLongWrap`,
//!   and the single-context `LocalWrap`
//! - An exclusive-update primitive with a lock-free tier and an
//!   interrupt-masking tier for single-CPU builds (`single-core` feature)
//! - An overflow trap with a pluggable fixup table
//! - A boundary test harness covering every checked operation
//!
//! With the `hardened` feature off, checked counters compile to wrapping
//! arithmetic.
//!
//! ## Example
//!
//! ```rust
//! use hardened_atomic::{AtomicI32, AtomicCounter};
//! use std::sync::Arc;
//! use std::thread;
//!
//! let refs = Arc::new(AtomicI32::new(1));
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let refs = refs.clone();
//!     handles.push(thread::spawn(move || {
//!         refs.inc();
//!         refs.dec();
//!     }));
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert!(refs.dec_and_test());
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;
pub mod error;
pub mod harness;
pub(crate) mod sync;
pub mod trap;

pub use atomic::{
    Atomic,
    AtomicCounter,
    AtomicI32,
    AtomicI64,
    AtomicLong,
    AtomicLongWrap,
    AtomicWrapI32,
    AtomicWrapI64,
    LocalWrap,
    Width,
};
pub use error::{
    AtomicError,
    AtomicResult,
    HarnessError,
    HarnessResult,
};
pub use harness::{
    Harness,
    HarnessConfig,
};
pub use trap::{
    OverflowEvent,
    SecurityViolation,
};
