//! Method level: records for one method or accessor.

use super::freeze::{Freeze, WeavingRecorder, WeavingSummary, WeavingTotals};
use super::record::WeavingRecord;
use log::debug;
use serde::{Deserialize, Serialize};

/// Collects records while the driver is inside one method
#[derive(Debug)]
pub struct MethodAccumulator {
    name: String,
    records: Vec<WeavingRecord>,
}

impl MethodAccumulator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records appended so far
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl WeavingRecorder for MethodAccumulator {
    fn add_record(&mut self, record: WeavingRecord) {
        self.records.push(record);
    }
}

impl Freeze for MethodAccumulator {
    type Snapshot = MethodStatistics;

    fn freeze(self) -> MethodStatistics {
        let stats = MethodStatistics {
            name: self.name,
            records: self.records,
        };
        debug!(
            "Froze method {}: {} records, {} failed",
            stats.name,
            stats.total_attempts(),
            stats.failure_count()
        );
        stats
    }
}

/// Read-only records of one method, in append order
///
/// Counts are derived from the records on every read, so they always add up
/// to the record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodStatistics {
    name: String,
    records: Vec<WeavingRecord>,
}

impl MethodStatistics {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[WeavingRecord] {
        &self.records
    }

    pub fn total_attempts(&self) -> usize {
        self.records.len()
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.total_attempts() - self.success_count()
    }

    /// At least one attempt against this method succeeded
    pub fn is_woven(&self) -> bool {
        self.records.iter().any(|r| r.is_success())
    }

    /// Failed records only, in append order
    pub fn failures(&self) -> impl Iterator<Item = &WeavingRecord> {
        self.records.iter().filter(|r| !r.is_success())
    }
}

impl WeavingSummary for MethodStatistics {
    fn totals(&self) -> WeavingTotals {
        WeavingTotals::from_records(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistics::record::WeavingOutcome;

    #[test]
    fn test_freeze_keeps_append_order() {
        let mut method = MethodAccumulator::new("Service::Run");
        method.record_attempt("Service::Run", &["Log"], WeavingOutcome::Succeeded);
        method.record_attempt("Service::Run", &["Retry"], WeavingOutcome::failed("no slot"));
        method.record_attempt("Service::Run", &["Cache"], WeavingOutcome::Succeeded);

        let stats = method.freeze();

        let advice: Vec<&str> = stats.records().iter().map(|r| r.advice()[0].as_str()).collect();
        assert_eq!(advice, vec!["Log", "Retry", "Cache"]);
        assert_eq!(stats.total_attempts(), 3);
        assert_eq!(stats.success_count(), 2);
        assert_eq!(stats.failure_count(), 1);
    }

    #[test]
    fn test_repeated_attempts_are_not_deduplicated() {
        let mut method = MethodAccumulator::new("Service::Run");
        for _ in 0..3 {
            method.record_attempt("Service::Run", &["Log"], WeavingOutcome::Succeeded);
        }

        assert_eq!(method.len(), 3);
        assert_eq!(method.freeze().total_attempts(), 3);
    }

    #[test]
    fn test_empty_method() {
        let stats = MethodAccumulator::new("Service::Idle").freeze();

        assert_eq!(stats.total_attempts(), 0);
        assert!(!stats.is_woven());
        assert!(!stats.has_failures());
    }

    #[test]
    fn test_failures_iterator() {
        let mut method = MethodAccumulator::new("m");
        method.record_attempt("m", &["A"], WeavingOutcome::Succeeded);
        method.record_attempt("m", &["B"], WeavingOutcome::failed("boom"));

        let stats = method.freeze();
        let failed: Vec<_> = stats.failures().collect();

        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].advice(), &["B"]);
        assert!(stats.is_woven());
        assert!(stats.has_failures());
    }

    #[test]
    fn test_cloned_snapshot_is_identical() {
        let mut method = MethodAccumulator::new("m");
        method.record_attempt("m", &["A"], WeavingOutcome::failed("boom"));

        let stats = method.freeze();
        assert_eq!(stats.clone(), stats);
    }
}
