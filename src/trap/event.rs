/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Overflow Events
//!
//! Describes a single detected overflow: which operation, at which width,
//! from which observed value.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::atomic::Width;

/// A checked arithmetic operation that can fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `add`
    Add,
    /// `sub`
    Sub,
    /// `add_return`
    AddReturn,
    /// `sub_return`
    SubReturn,
    /// `inc`
    Inc,
    /// `dec`
    Dec,
    /// `inc_return`
    IncReturn,
    /// `dec_return`
    DecReturn,
    /// `fetch_add`
    FetchAdd,
    /// `fetch_sub`
    FetchSub,
    /// `inc_and_test`
    IncAndTest,
    /// `dec_and_test`
    DecAndTest,
    /// `sub_and_test`
    SubAndTest,
    /// `add_and_test`
    AddAndTest,
    /// `add_negative`
    AddNegative,
    /// `add_unless`
    AddUnless,
    /// `dec_if_positive`
    DecIfPositive,
}

impl Operation {
    /// Every faultable operation.
    pub const ALL: [Operation; 17] = [
        Operation::Add,
        Operation::Sub,
        Operation::AddReturn,
        Operation::SubReturn,
        Operation::Inc,
        Operation::Dec,
        Operation::IncReturn,
        Operation::DecReturn,
        Operation::FetchAdd,
        Operation::FetchSub,
        Operation::IncAndTest,
        Operation::DecAndTest,
        Operation::SubAndTest,
        Operation::AddAndTest,
        Operation::AddNegative,
        Operation::AddUnless,
        Operation::DecIfPositive,
    ];

    /// The method name of the operation.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::AddReturn => "add_return",
            Operation::SubReturn => "sub_return",
            Operation::Inc => "inc",
            Operation::Dec => "dec",
            Operation::IncReturn => "inc_return",
            Operation::DecReturn => "dec_return",
            Operation::FetchAdd => "fetch_add",
            Operation::FetchSub => "fetch_sub",
            Operation::IncAndTest => "inc_and_test",
            Operation::DecAndTest => "dec_and_test",
            Operation::SubAndTest => "sub_and_test",
            Operation::AddAndTest => "add_and_test",
            Operation::AddNegative => "add_negative",
            Operation::AddUnless => "add_unless",
            Operation::DecIfPositive => "dec_if_positive",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction in which the signed range was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowKind {
    /// The result would have exceeded the maximum.
    Overflow,
    /// The result would have fallen below the minimum.
    Underflow,
}

impl OverflowKind {
    /// Classifies an overflowing addition of a delta with the given sign.
    #[inline]
    pub const fn of_add(delta_negative: bool) -> Self {
        if delta_negative {
            OverflowKind::Underflow
        } else {
            OverflowKind::Overflow
        }
    }

    /// Classifies an overflowing subtraction of a delta with the given sign.
    #[inline]
    pub const fn of_sub(delta_negative: bool) -> Self {
        if delta_negative {
            OverflowKind::Overflow
        } else {
            OverflowKind::Underflow
        }
    }
}

impl fmt::Display for OverflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowKind::Overflow => f.write_str("overflow"),
            OverflowKind::Underflow => f.write_str("underflow"),
        }
    }
}

/// The location of a faulting operation: the key of the fixup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaultSite {
    /// Counter width.
    pub width: Width,
    /// Faulting operation.
    pub op: Operation,
}

impl fmt::Display for FaultSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.width, self.op)
    }
}

/// One detected overflow, captured before anything was committed.
///
/// Values are widened to `i64` so both widths report uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowEvent {
    /// Where the fault happened.
    pub site: FaultSite,
    /// Overflow or underflow.
    pub kind: OverflowKind,
    /// The counter value the failed attempt read. The counter still holds
    /// it, unless another writer has since moved it.
    pub observed: i64,
    /// The delta the operation tried to apply.
    pub operand: i64,
}

impl fmt::Display for OverflowEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {}: observed {}, operand {}",
            self.kind, self.site, self.observed, self.operand
        )
    }
}
