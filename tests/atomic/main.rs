/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

#[macro_use]
mod integer_test_macro;

mod catalog_tests;
mod concurrent_tests;
mod counter_tests;
mod local_wrap_tests;
mod trap_tests;
mod wrapping_tests;

#[cfg(feature = "hardened")]
use std::panic::{
    self,
    AssertUnwindSafe,
};

#[cfg(feature = "hardened")]
use hardened_atomic::SecurityViolation;

/// Runs `f`, which must end in an overflow trap, and returns the violation.
#[cfg(feature = "hardened")]
pub(crate) fn expect_trap<F: FnOnce()>(f: F) -> SecurityViolation {
    let payload = match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => panic!("operation returned instead of trapping"),
        Err(payload) => payload,
    };
    match payload.downcast::<SecurityViolation>() {
        Ok(violation) => *violation,
        Err(_) => panic!("operation panicked without a trap"),
    }
}
