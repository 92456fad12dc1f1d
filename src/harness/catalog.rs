/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Boundary Test Catalog
//!
//! One named test per checked operation and width. Underflow-class tests
//! seed the counter at the minimum, overflow-class tests at the maximum.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::{
    AtomicCounter,
    Width,
    Word,
};
use crate::trap::Operation;

/// The end of the signed range a test starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// The minimum value; the probe moves the counter down.
    Min,
    /// The maximum value; the probe moves the counter up.
    Max,
}

/// The checked operation a boundary test repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Probe {
    /// `dec`
    Dec,
    /// `dec_return`
    DecReturn,
    /// `sub(delta)`
    Sub,
    /// `sub_return(delta)`
    SubReturn,
    /// `fetch_sub(delta)`
    FetchSub,
    /// `dec_and_test`
    DecAndTest,
    /// `sub_and_test(delta)`
    SubAndTest,
    /// `inc`
    Inc,
    /// `inc_return`
    IncReturn,
    /// `add(delta)`
    Add,
    /// `add_return(delta)`
    AddReturn,
    /// `fetch_add(delta)`
    FetchAdd,
    /// `inc_and_test`
    IncAndTest,
    /// `add_and_test(delta)`
    AddAndTest,
    /// `add_negative(delta)`
    AddNegative,
    /// `add_unless(delta, MIN)`
    ///
    /// The sentinel sits below the walk from the maximum, so the add is
    /// attempted for every positive delta.
    AddUnless,
}

impl Probe {
    /// The boundary this probe crosses.
    pub const fn boundary(self) -> Boundary {
        match self {
            Probe::Dec
            | Probe::DecReturn
            | Probe::Sub
            | Probe::SubReturn
            | Probe::FetchSub
            | Probe::DecAndTest
            | Probe::SubAndTest => Boundary::Min,
            _ => Boundary::Max,
        }
    }

    /// The counter operation the probe calls.
    pub const fn operation(self) -> Operation {
        match self {
            Probe::Dec => Operation::Dec,
            Probe::DecReturn => Operation::DecReturn,
            Probe::Sub => Operation::Sub,
            Probe::SubReturn => Operation::SubReturn,
            Probe::FetchSub => Operation::FetchSub,
            Probe::DecAndTest => Operation::DecAndTest,
            Probe::SubAndTest => Operation::SubAndTest,
            Probe::Inc => Operation::Inc,
            Probe::IncReturn => Operation::IncReturn,
            Probe::Add => Operation::Add,
            Probe::AddReturn => Operation::AddReturn,
            Probe::FetchAdd => Operation::FetchAdd,
            Probe::IncAndTest => Operation::IncAndTest,
            Probe::AddAndTest => Operation::AddAndTest,
            Probe::AddNegative => Operation::AddNegative,
            Probe::AddUnless => Operation::AddUnless,
        }
    }

    /// Whether the probe applies the configured delta rather than one.
    pub const fn uses_delta(self) -> bool {
        !matches!(
            self,
            Probe::Dec
                | Probe::DecReturn
                | Probe::DecAndTest
                | Probe::Inc
                | Probe::IncReturn
                | Probe::IncAndTest
        )
    }

    /// Runs the probe once against `counter`.
    pub(crate) fn apply<C: AtomicCounter>(self, counter: &C, delta: C::Value) {
        match self {
            Probe::Dec => counter.dec(),
            Probe::DecReturn => {
                counter.dec_return();
            }
            Probe::Sub => counter.sub(delta),
            Probe::SubReturn => {
                counter.sub_return(delta);
            }
            Probe::FetchSub => {
                counter.fetch_sub(delta);
            }
            Probe::DecAndTest => {
                counter.dec_and_test();
            }
            Probe::SubAndTest => {
                counter.sub_and_test(delta);
            }
            Probe::Inc => counter.inc(),
            Probe::IncReturn => {
                counter.inc_return();
            }
            Probe::Add => counter.add(delta),
            Probe::AddReturn => {
                counter.add_return(delta);
            }
            Probe::FetchAdd => {
                counter.fetch_add(delta);
            }
            Probe::IncAndTest => {
                counter.inc_and_test();
            }
            Probe::AddAndTest => {
                counter.add_and_test(delta);
            }
            Probe::AddNegative => {
                counter.add_negative(delta);
            }
            Probe::AddUnless => {
                counter.add_unless(delta, <C::Value as Word>::MIN);
            }
        }
    }
}

/// A named boundary test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryTest {
    /// Catalog name, e.g. `ATOMIC_UNDERFLOW`.
    pub name: &'static str,
    /// Width of the counter under test.
    pub width: Width,
    /// The operation repeated across the boundary.
    pub probe: Probe,
}

impl BoundaryTest {
    /// The boundary the counter is seeded at.
    #[inline]
    pub const fn boundary(&self) -> Boundary {
        self.probe.boundary()
    }
}

macro_rules! catalog {
    ($($name32:literal, $name64:literal => $probe:ident;)*) => {
        &[
            $(
                BoundaryTest { name: $name32, width: Width::W32, probe: Probe::$probe },
                BoundaryTest { name: $name64, width: Width::W64, probe: Probe::$probe },
            )*
        ]
    };
}

/// Every boundary test, both widths.
pub static CATALOG: &[BoundaryTest] = catalog! {
    "ATOMIC_UNDERFLOW", "ATOMIC64_UNDERFLOW" => Dec;
    "ATOMIC_DEC_RETURN_UNDERFLOW", "ATOMIC64_DEC_RETURN_UNDERFLOW" => DecReturn;
    "ATOMIC_SUB_UNDERFLOW", "ATOMIC64_SUB_UNDERFLOW" => Sub;
    "ATOMIC_SUB_RETURN_UNDERFLOW", "ATOMIC64_SUB_RETURN_UNDERFLOW" => SubReturn;
    "ATOMIC_FETCH_SUB_UNDERFLOW", "ATOMIC64_FETCH_SUB_UNDERFLOW" => FetchSub;
    "ATOMIC_DEC_AND_TEST_UNDERFLOW", "ATOMIC64_DEC_AND_TEST_UNDERFLOW" => DecAndTest;
    "ATOMIC_SUB_AND_TEST", "ATOMIC64_SUB_AND_TEST" => SubAndTest;
    "ATOMIC_OVERFLOW", "ATOMIC64_OVERFLOW" => Inc;
    "ATOMIC_INC_RETURN_OVERFLOW", "ATOMIC64_INC_RETURN_OVERFLOW" => IncReturn;
    "ATOMIC_ADD_OVERFLOW", "ATOMIC64_ADD_OVERFLOW" => Add;
    "ATOMIC_ADD_RETURN_OVERFLOW", "ATOMIC64_ADD_RETURN_OVERFLOW" => AddReturn;
    "ATOMIC_FETCH_ADD_OVERFLOW", "ATOMIC64_FETCH_ADD_OVERFLOW" => FetchAdd;
    "ATOMIC_INC_AND_TEST_OVERFLOW", "ATOMIC64_INC_AND_TEST_OVERFLOW" => IncAndTest;
    "ATOMIC_ADD_AND_TEST_OVERFLOW", "ATOMIC64_ADD_AND_TEST_OVERFLOW" => AddAndTest;
    "ATOMIC_ADD_NEGATIVE_OVERFLOW", "ATOMIC64_ADD_NEGATIVE_OVERFLOW" => AddNegative;
    "ATOMIC_ADD_UNLESS_OVERFLOW", "ATOMIC64_ADD_UNLESS_OVERFLOW" => AddUnless;
};

/// Looks a test up by catalog name.
pub fn find(name: &str) -> Option<&'static BoundaryTest> {
    CATALOG.iter().find(|test| test.name == name)
}
