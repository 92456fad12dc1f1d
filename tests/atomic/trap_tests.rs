/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use hardened_atomic::atomic::Width;
use hardened_atomic::error::AtomicError;
use hardened_atomic::trap::{
    self,
    FaultSite,
    FixupLookup,
    FixupTable,
    Operation,
    OverflowEvent,
    OverflowKind,
    SecurityViolation,
};

fn sample_event() -> OverflowEvent {
    OverflowEvent {
        site: FaultSite {
            width: Width::W32,
            op: Operation::Inc,
        },
        kind: OverflowKind::Overflow,
        observed: i64::from(i32::MAX),
        operand: 1,
    }
}

#[test]
fn test_install_happens_once() {
    // Another test may already have faulted and defaulted the table.
    let first = trap::install(FixupTable::with_default_routes());
    assert!(first.is_ok() || first == Err(AtomicError::FixupsAlreadyInstalled));

    let second = trap::install(FixupTable::with_default_routes());
    assert_eq!(second, Err(AtomicError::FixupsAlreadyInstalled));
}

#[test]
fn test_terminate_context_unwinds_with_violation() {
    let event = sample_event();
    let payload = std::panic::catch_unwind(|| trap::terminate_context(&event)).unwrap_err();
    let violation = payload.downcast_ref::<SecurityViolation>().unwrap();
    assert_eq!(violation.event, event);
}

#[test]
fn test_default_routes_terminate() {
    let table = FixupTable::with_default_routes();
    let continuation = table
        .lookup(FaultSite {
            width: Width::W64,
            op: Operation::DecIfPositive,
        })
        .unwrap();
    let event = sample_event();
    let payload = std::panic::catch_unwind(|| continuation(&event)).unwrap_err();
    assert!(payload.is::<SecurityViolation>());
}

#[test]
fn test_event_display() {
    assert_eq!(
        sample_event().to_string(),
        "overflow in i32::inc: observed 2147483647, operand 1"
    );
    assert_eq!(
        SecurityViolation {
            event: sample_event()
        }
        .to_string(),
        "refcount overflow in i32::inc: observed 2147483647, operand 1"
    );
}

#[test]
fn test_operation_names_are_unique() {
    let mut names: Vec<_> = Operation::ALL.iter().map(|op| op.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Operation::ALL.len());
}

#[test]
fn test_overflow_kind_classification() {
    assert_eq!(OverflowKind::of_add(false), OverflowKind::Overflow);
    assert_eq!(OverflowKind::of_add(true), OverflowKind::Underflow);
    assert_eq!(OverflowKind::of_sub(false), OverflowKind::Underflow);
    assert_eq!(OverflowKind::of_sub(true), OverflowKind::Overflow);
}

#[test]
fn test_hardened_flag_matches_feature() {
    assert_eq!(trap::HARDENED, cfg!(feature = "hardened"));
}
