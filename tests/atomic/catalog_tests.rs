/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use std::collections::HashSet;

use hardened_atomic::atomic::Width;
use hardened_atomic::harness::{
    self,
    Boundary,
    Probe,
    CATALOG,
};
use hardened_atomic::trap::Operation;

#[test]
fn test_catalog_covers_every_probe_at_both_widths() {
    assert_eq!(CATALOG.len(), 32);
    let pairs: HashSet<_> = CATALOG.iter().map(|t| (t.width, t.probe)).collect();
    assert_eq!(pairs.len(), CATALOG.len());
}

#[test]
fn test_catalog_names_are_unique_and_prefixed() {
    let names: HashSet<_> = CATALOG.iter().map(|t| t.name).collect();
    assert_eq!(names.len(), CATALOG.len());
    for test in CATALOG {
        match test.width {
            Width::W32 => assert!(test.name.starts_with("ATOMIC_"), "{}", test.name),
            Width::W64 => assert!(test.name.starts_with("ATOMIC64_"), "{}", test.name),
        }
    }
}

#[test]
fn test_find() {
    let test = harness::find("ATOMIC_UNDERFLOW").unwrap();
    assert_eq!(test.width, Width::W32);
    assert_eq!(test.probe, Probe::Dec);
    assert_eq!(test.boundary(), Boundary::Min);

    let test = harness::find("ATOMIC64_ADD_UNLESS_OVERFLOW").unwrap();
    assert_eq!(test.width, Width::W64);
    assert_eq!(test.probe.operation(), Operation::AddUnless);
    assert_eq!(test.boundary(), Boundary::Max);

    assert!(harness::find("ATOMIC_DEC_IF_POSITIVE").is_none());
}

#[test]
fn test_probe_boundaries() {
    assert_eq!(Probe::SubAndTest.boundary(), Boundary::Min);
    assert_eq!(Probe::AddNegative.boundary(), Boundary::Max);
    assert!(Probe::Sub.uses_delta());
    assert!(!Probe::IncAndTest.uses_delta());
}
