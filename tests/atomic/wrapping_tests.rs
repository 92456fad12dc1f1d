/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use hardened_atomic::atomic::{
    AtomicWrapI32,
    AtomicWrapI64,
};

#[test]
fn test_inc_at_max_wraps_to_min() {
    let atomic = AtomicWrapI32::new(i32::MAX);
    atomic.inc();
    assert_eq!(atomic.read(), i32::MIN);
}

#[test]
fn test_dec_at_min_wraps_to_max() {
    let atomic = AtomicWrapI64::new(i64::MIN);
    assert_eq!(atomic.dec_return(), i64::MAX);
}

#[test]
fn test_add_wraps_modulo_width() {
    let atomic = AtomicWrapI32::new(i32::MAX - 5);
    assert_eq!(atomic.add_return(10), i32::MIN + 4);
    assert_eq!(atomic.fetch_sub(10), i32::MIN + 4);
    assert_eq!(atomic.read(), i32::MAX - 5);
}

#[test]
fn test_add_negative_after_wrap() {
    let atomic = AtomicWrapI64::new(i64::MAX);
    assert!(atomic.add_negative(1));
}

#[test]
fn test_add_unless_wraps_when_it_adds() {
    let atomic = AtomicWrapI32::new(i32::MAX);
    assert_eq!(atomic.add_unless(1, 0), i32::MAX);
    assert_eq!(atomic.read(), i32::MIN);
}

#[test]
fn test_wrap_around_back_to_start() {
    let atomic = AtomicWrapI32::new(i32::MAX);
    atomic.inc();
    atomic.dec();
    assert_eq!(atomic.read(), i32::MAX);
}
