//! Audit run counters.
//!
//! Each [`PageAuditor`](super::PageAuditor) owns one [`AuditMetrics`]; the
//! counters are atomic so an auditor can be shared across threads.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct AuditMetrics {
    /// Individual checks performed (one price, one date, one keyword...)
    checks_run: AtomicUsize,

    /// Checks whose result was valid
    checks_passed: AtomicUsize,

    /// Checks whose result was invalid
    checks_failed: AtomicUsize,

    /// Advisory findings, whether or not they became errors
    warnings: AtomicUsize,
}

impl AuditMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one check and its outcome.
    pub fn record_check(&self, passed: bool, warned: bool) {
        self.checks_run.fetch_add(1, Ordering::Relaxed);
        if passed {
            self.checks_passed.fetch_add(1, Ordering::Relaxed);
        } else {
            self.checks_failed.fetch_add(1, Ordering::Relaxed);
        }
        if warned {
            self.warnings.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn checks_run(&self) -> usize {
        self.checks_run.load(Ordering::Relaxed)
    }

    pub fn checks_passed(&self) -> usize {
        self.checks_passed.load(Ordering::Relaxed)
    }

    pub fn checks_failed(&self) -> usize {
        self.checks_failed.load(Ordering::Relaxed)
    }

    pub fn warnings(&self) -> usize {
        self.warnings.load(Ordering::Relaxed)
    }

    /// Snapshot of the counters.
    pub fn report(&self) -> MetricsReport {
        let run = self.checks_run();
        let passed = self.checks_passed();
        let pass_rate = if run > 0 {
            (passed as f64 / run as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            checks_run: run,
            checks_passed: passed,
            checks_failed: self.checks_failed(),
            warnings: self.warnings(),
            pass_rate,
        }
    }

    /// Zero every counter.
    #[cfg(test)]
    pub fn reset(&self) {
        self.checks_run.store(0, Ordering::Relaxed);
        self.checks_passed.store(0, Ordering::Relaxed);
        self.checks_failed.store(0, Ordering::Relaxed);
        self.warnings.store(0, Ordering::Relaxed);
    }
}

/// Counters at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub checks_run: usize,
    pub checks_passed: usize,
    pub checks_failed: usize,
    pub warnings: usize,

    /// Passed checks as a percentage (0-100), 0 when nothing ran
    pub pass_rate: f64,
}
