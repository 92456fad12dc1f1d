/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Verification Harness
//!
//! Drives a counter to one end of its range and checks that the next step
//! across that end traps. Every test has the same three-step shape:
//!
//! 1. Seed the counter at the boundary and record the *good* phase.
//! 2. Move one step away and back, which must not fault.
//! 3. Record the *bad* phase and step across the boundary.
//!
//! A checked run passes when step 3 ends in a [`SecurityViolation`] and the
//! counter still holds the boundary value. Reaching the *completed* phase
//! means the step returned and the counter wrapped.
//!
//! The harness observes traps by catching the unwind of
//! [`terminate_context`](crate::trap::terminate_context), so it only works
//! while that continuation is routed for the probed sites and the binary
//! unwinds on panic.
//!
//! # Author
//!
//! Haixing Hu

mod catalog;
mod sink;

use std::any::Any;
use std::num::NonZeroUsize;
use std::panic::{
    self,
    AssertUnwindSafe,
};

use crate::atomic::{
    ActiveTier,
    AtomicCounter,
    AtomicI32,
    AtomicI64,
    AtomicWrapI32,
    AtomicWrapI64,
    ExclusiveUpdate,
    Width,
    Word,
};
use crate::error::{
    HarnessError,
    HarnessResult,
};
use crate::trap::{
    OverflowEvent,
    SecurityViolation,
};

pub use catalog::{
    find,
    Boundary,
    BoundaryTest,
    Probe,
    CATALOG,
};
pub use sink::{
    Diagnostic,
    DiagnosticSink,
    MemorySink,
    Phase,
    TracingSink,
};

/// Harness configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Step applied by the delta-taking probes. Must be positive.
    pub delta: i32,
    /// CPUs the counters will be shared across.
    pub cpus: NonZeroUsize,
}

impl HarnessConfig {
    /// Sets the probe step.
    pub fn with_delta(mut self, delta: i32) -> Self {
        self.delta = delta;
        self
    }

    /// Sets the CPU count.
    pub fn with_cpus(mut self, cpus: NonZeroUsize) -> Self {
        self.cpus = cpus;
        self
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            delta: 1,
            cpus: default_cpus(),
        }
    }
}

#[cfg(feature = "single-core")]
fn default_cpus() -> NonZeroUsize {
    NonZeroUsize::MIN
}

#[cfg(not(feature = "single-core"))]
fn default_cpus() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Outcome of a passing checked run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapReport {
    /// Catalog name.
    pub test: &'static str,
    /// The event the trap carried.
    pub event: OverflowEvent,
    /// Counter value after the trap; always the boundary.
    pub value: i64,
}

/// Outcome of a passing wrapping run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapReport {
    /// Catalog name.
    pub test: &'static str,
    /// Value the counter wrapped to.
    pub value: i64,
}

/// Result of [`Harness::run_all`].
#[derive(Debug, Default)]
pub struct HarnessSummary {
    /// Tests that trapped as expected.
    pub passed: Vec<TrapReport>,
    /// Tests that did not.
    pub failed: Vec<HarnessError>,
}

impl HarnessSummary {
    /// `true` when no test failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs boundary tests and reports each phase to a [`DiagnosticSink`].
pub struct Harness {
    config: HarnessConfig,
    sink: Box<dyn DiagnosticSink>,
}

impl Harness {
    /// Creates a harness that logs diagnostics through `tracing`.
    ///
    /// # Errors
    ///
    /// See [`Harness::with_sink`].
    pub fn new(config: HarnessConfig) -> HarnessResult<Self> {
        Self::with_sink(config, TracingSink)
    }

    /// Creates a harness recording into `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::InvalidDelta`] for a non-positive delta, and
    /// [`HarnessError::Tier`] when the active update tier cannot serve the
    /// configured CPU count.
    pub fn with_sink<S>(config: HarnessConfig, sink: S) -> HarnessResult<Self>
    where
        S: DiagnosticSink + 'static,
    {
        if config.delta <= 0 {
            return Err(HarnessError::InvalidDelta(config.delta));
        }
        ActiveTier::validate(config.cpus)?;
        tracing::debug!(
            delta = config.delta,
            cpus = config.cpus.get(),
            tier = ActiveTier::NAME,
            "harness configured"
        );
        Ok(Self {
            config,
            sink: Box::new(sink),
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Every known test.
    pub fn catalog(&self) -> &'static [BoundaryTest] {
        CATALOG
    }

    /// Looks a test up by name.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::UnknownTest`] if no entry has this name.
    pub fn find(&self, name: &str) -> HarnessResult<&'static BoundaryTest> {
        find(name).ok_or_else(|| HarnessError::UnknownTest(name.to_owned()))
    }

    /// Runs the named test against a checked counter.
    ///
    /// # Errors
    ///
    /// See [`Harness::run`].
    pub fn run_named(&self, name: &str) -> HarnessResult<TrapReport> {
        let test = self.find(name)?;
        self.run(test)
    }

    /// Runs one test against a checked counter of the test's width.
    ///
    /// # Errors
    ///
    /// Any [`HarnessError`] naming the test: the warm-up faulted, the
    /// crossing returned, the crossing trapped but moved the counter, or it
    /// panicked with something other than a trap.
    pub fn run(&self, test: &BoundaryTest) -> HarnessResult<TrapReport> {
        match test.width {
            Width::W32 => self.drive::<AtomicI32>(test),
            Width::W64 => self.drive::<AtomicI64>(test),
        }
    }

    /// Runs the whole catalog, collecting every outcome.
    pub fn run_all(&self) -> HarnessSummary {
        let mut summary = HarnessSummary::default();
        for test in CATALOG {
            match self.run(test) {
                Ok(report) => summary.passed.push(report),
                Err(err) => {
                    tracing::warn!(test = test.name, error = %err, "boundary test failed");
                    summary.failed.push(err);
                }
            }
        }
        tracing::info!(
            passed = summary.passed.len(),
            failed = summary.failed.len(),
            "boundary catalog finished"
        );
        summary
    }

    /// Runs one test against a wrapping counter, which must wrap instead of
    /// trapping.
    ///
    /// # Errors
    ///
    /// [`HarnessError::UnexpectedTrap`] if the counter trapped and
    /// [`HarnessError::WrongWrap`] if it ended anywhere but the
    /// two's-complement result.
    pub fn run_wrapping(&self, test: &BoundaryTest) -> HarnessResult<WrapReport> {
        match test.width {
            Width::W32 => self.drive_wrapping::<AtomicWrapI32>(test),
            Width::W64 => self.drive_wrapping::<AtomicWrapI64>(test),
        }
    }

    fn record(&self, phase: Phase, test: &BoundaryTest) {
        self.sink.record(&Diagnostic {
            phase,
            test: test.name,
            width: test.width,
            op: test.probe.operation(),
        });
    }

    fn step<W: Word>(&self, probe: Probe) -> W {
        if probe.uses_delta() {
            W::from(self.config.delta)
        } else {
            W::ONE
        }
    }

    fn warm_up<C: AtomicCounter>(&self, test: &BoundaryTest) -> HarnessResult<C> {
        let (seed, away) = match test.boundary() {
            Boundary::Min => (<C::Value as Word>::MIN, Probe::Add),
            Boundary::Max => (<C::Value as Word>::MAX, Probe::Sub),
        };
        let counter = C::with_value(seed);
        self.record(Phase::Good, test);
        let step = self.step::<C::Value>(test.probe);
        panic::catch_unwind(AssertUnwindSafe(|| {
            away.apply(&counter, step);
            test.probe.apply(&counter, step);
        }))
        .map_err(|payload| HarnessError::WarmupFaulted {
            test: test.name,
            detail: describe(payload.as_ref()),
        })?;
        Ok(counter)
    }

    fn drive<C: AtomicCounter>(&self, test: &BoundaryTest) -> HarnessResult<TrapReport> {
        let counter = self.warm_up::<C>(test)?;
        let step = self.step::<C::Value>(test.probe);
        let before: i64 = counter.read().into();
        self.record(Phase::Bad, test);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            test.probe.apply(&counter, step);
        }));
        let after: i64 = counter.read().into();
        match outcome {
            Ok(()) => {
                self.record(Phase::Completed, test);
                Err(HarnessError::MissedTrap {
                    test: test.name,
                    value: after,
                })
            }
            Err(payload) => match payload.downcast_ref::<SecurityViolation>() {
                Some(_) if after != before => Err(HarnessError::TornCommit {
                    test: test.name,
                    before,
                    after,
                }),
                Some(violation) => {
                    tracing::debug!(test = test.name, event = %violation.event, "trap observed");
                    Ok(TrapReport {
                        test: test.name,
                        event: violation.event,
                        value: after,
                    })
                }
                None => Err(HarnessError::UnexpectedPanic {
                    test: test.name,
                    detail: describe(payload.as_ref()),
                }),
            },
        }
    }

    fn drive_wrapping<C: AtomicCounter>(&self, test: &BoundaryTest) -> HarnessResult<WrapReport> {
        let counter = self.warm_up::<C>(test)?;
        let step = self.step::<C::Value>(test.probe);
        let expected: i64 = match test.boundary() {
            Boundary::Min => counter.read().overflowing_sub(step).0,
            Boundary::Max => counter.read().overflowing_add(step).0,
        }
        .into();
        self.record(Phase::Bad, test);
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            test.probe.apply(&counter, step);
        }));
        match outcome {
            Ok(()) => {
                self.record(Phase::Completed, test);
                let actual: i64 = counter.read().into();
                if actual == expected {
                    Ok(WrapReport {
                        test: test.name,
                        value: actual,
                    })
                } else {
                    Err(HarnessError::WrongWrap {
                        test: test.name,
                        expected,
                        actual,
                    })
                }
            }
            Err(payload) => match payload.downcast_ref::<SecurityViolation>() {
                Some(violation) => Err(HarnessError::UnexpectedTrap {
                    test: test.name,
                    event: violation.event,
                }),
                None => Err(HarnessError::UnexpectedPanic {
                    test: test.name,
                    detail: describe(payload.as_ref()),
                }),
            },
        }
    }
}

impl std::fmt::Debug for Harness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn describe(payload: &(dyn Any + Send)) -> String {
    if let Some(violation) = payload.downcast_ref::<SecurityViolation>() {
        violation.to_string()
    } else if let Some(message) = payload.downcast_ref::<&'static str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}
