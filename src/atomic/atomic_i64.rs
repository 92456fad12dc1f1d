/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Checked 64-bit Counter
//!
//! A 64-bit signed counter whose arithmetic traps instead of wrapping.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::marker::PhantomData;

use crate::atomic::atomic_counter_macro::impl_atomic_counter;
use crate::atomic::engine;
use crate::atomic::policy::Checked;
use crate::atomic::word::Word;
use crate::trap::Operation;

impl_atomic_counter!(
    AtomicI64,
    crate::sync::AtomicI64,
    i64,
    Checked,
    "64-bit signed counter that traps on overflow"
);
