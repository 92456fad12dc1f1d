/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Wrapping 32-bit Counter
//!
//! For sequence numbers and free-running ticks, where overflow is modular by intent.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::marker::PhantomData;

use crate::atomic::atomic_counter_macro::impl_atomic_counter;
use crate::atomic::engine;
use crate::atomic::policy::Wrapping;
use crate::atomic::word::Word;
use crate::trap::Operation;

impl_atomic_counter!(
    AtomicWrapI32,
    crate::sync::AtomicI32,
    i32,
    Wrapping,
    "32-bit signed counter with wrapping arithmetic"
);
