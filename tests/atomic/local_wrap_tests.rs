/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use hardened_atomic::atomic::{
    LocalValue,
    LocalWrap,
};

#[test]
fn test_local_wrap_counts() {
    let local = LocalWrap::new(0);
    local.inc();
    local.add(9);
    local.dec();
    local.sub(2);
    assert_eq!(local.read(), 7);
    assert_eq!(local.add_return(3), 10);
    assert!(local.sub_and_test(10));
}

#[test]
fn test_local_wrap_wraps_regardless_of_hardening() {
    let local = LocalWrap::new(LocalValue::MAX);
    local.inc();
    assert_eq!(local.read(), LocalValue::MIN);
}

#[test]
fn test_local_wrap_cmpxchg_and_set() {
    let local = LocalWrap::default();
    assert_eq!(local.cmpxchg(0, 5), 0);
    assert_eq!(local.cmpxchg(0, 6), 5);
    local.set(-1);
    assert_eq!(local.read(), -1);
    assert!(format!("{:?}", local).contains("-1"));
}
