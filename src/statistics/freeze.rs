//! Shared accumulate-then-freeze contract and rollup totals.
//!
//! Every level follows the same lifecycle: an accumulator is created empty
//! when the driver enters a scope, appended to while the scope is traversed,
//! and frozen exactly once when the scope closes. `freeze` takes the
//! accumulator by value, so the `Accumulating -> Frozen` transition is
//! enforced by ownership:
//!
//! ```compile_fail
//! use weave_stats::statistics::{Freeze, MethodAccumulator, WeavingOutcome, WeavingRecorder};
//!
//! let mut method = MethodAccumulator::new("Run");
//! let stats = method.freeze();
//! // The accumulator was moved into `freeze`
//! method.record_attempt("Run", &["Log"], WeavingOutcome::Succeeded);
//! ```
//!
//! Snapshots expose no mutating operations:
//!
//! ```compile_fail
//! use weave_stats::statistics::{Freeze, MethodAccumulator, WeavingOutcome, WeavingRecorder};
//!
//! let stats = MethodAccumulator::new("Run").freeze();
//! stats.record_attempt("Run", &["Log"], WeavingOutcome::Succeeded);
//! ```

use super::record::{WeavingOutcome, WeavingRecord};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// One-way conversion from a mutable accumulator to its immutable snapshot
pub trait Freeze {
    type Snapshot;

    /// Consume the accumulator and produce its snapshot
    fn freeze(self) -> Self::Snapshot;
}

/// Sink for weaving records (the leaf capability)
pub trait WeavingRecorder {
    /// Append an already-built record
    fn add_record(&mut self, record: WeavingRecord);

    /// Build and append a record for one attempt
    ///
    /// Each call appends a distinct record; repeated attempts against the
    /// same target are never merged.
    fn record_attempt<S: AsRef<str>>(
        &mut self,
        target: &str,
        advice: &[S],
        outcome: WeavingOutcome,
    ) {
        self.add_record(WeavingRecord::new(target, advice, outcome));
    }
}

/// Attempt counts rolled up over any part of the tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeavingTotals {
    pub attempts: usize,
    pub successes: usize,
    pub failures: usize,
}

impl WeavingTotals {
    /// Count the outcomes of a slice of records
    pub fn from_records(records: &[WeavingRecord]) -> Self {
        let successes = records.iter().filter(|r| r.is_success()).count();
        Self {
            attempts: records.len(),
            successes,
            failures: records.len() - successes,
        }
    }

    /// Success percentage, 0.0 when nothing was attempted
    pub fn success_rate(&self) -> f64 {
        if self.attempts > 0 {
            (self.successes as f64 / self.attempts as f64) * 100.0
        } else {
            0.0
        }
    }
}

impl Add for WeavingTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            attempts: self.attempts + other.attempts,
            successes: self.successes + other.successes,
            failures: self.failures + other.failures,
        }
    }
}

impl AddAssign for WeavingTotals {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for WeavingTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Read side shared by every snapshot level
pub trait WeavingSummary {
    /// Totals over every record below this node
    fn totals(&self) -> WeavingTotals;

    /// True if anything below this node failed
    ///
    /// Defaults to "any record failed"; levels that own another failure
    /// source (the assembly's fatal cause) override it.
    fn has_failures(&self) -> bool {
        self.totals().failures > 0
    }
}
