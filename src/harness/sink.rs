/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Diagnostic Sinks
//!
//! Where the harness records which phase it is about to attempt. A passing
//! checked run records the good and the bad attempt but never the
//! completion of the bad one.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::sync::{
    Arc,
    Mutex,
    PoisonError,
};

use crate::atomic::Width;
use crate::trap::Operation;

/// Harness phase a diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// About to run the warm-up sequence.
    Good,
    /// About to cross the boundary.
    Bad,
    /// The boundary crossing returned control.
    Completed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Good => f.write_str("attempting good"),
            Phase::Bad => f.write_str("attempting bad"),
            Phase::Completed => f.write_str("completed bad"),
        }
    }
}

/// One harness diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    /// The phase.
    pub phase: Phase,
    /// Catalog name of the test.
    pub test: &'static str,
    /// Width of the counter under test.
    pub width: Width,
    /// Operation under test.
    pub op: Operation,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let family = match self.width {
            Width::W32 => "atomic",
            Width::W64 => "atomic64",
        };
        write!(f, "{} {}_{}", self.phase, family, self.op)
    }
}

/// Receives harness diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Records one diagnostic.
    fn record(&self, diagnostic: &Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
    fn record(&self, diagnostic: &Diagnostic) {
        (**self).record(diagnostic);
    }
}

/// Emits diagnostics as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: &Diagnostic) {
        match diagnostic.phase {
            Phase::Completed => {
                tracing::warn!(test = diagnostic.test, "{}", diagnostic)
            }
            Phase::Good | Phase::Bad => {
                tracing::info!(test = diagnostic.test, "{}", diagnostic)
            }
        }
    }
}

/// Keeps diagnostics in memory for later inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the recorded diagnostics rendered as lines.
    pub fn lines(&self) -> Vec<String> {
        self.diagnostics().iter().map(ToString::to_string).collect()
    }

    /// Drains the sink.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(
            &mut *self
                .diagnostics
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, diagnostic: &Diagnostic) {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*diagnostic);
    }
}
