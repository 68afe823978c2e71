//! Serialized append point for drivers that weave modules in parallel.
//!
//! Each worker owns its own module accumulator and only touches the shared
//! assembly when it hands over a frozen module. That hand-over (and the fatal
//! slot) is the only place a lock is taken.

use super::assembly::{AssemblyAccumulator, AssemblyStatistics};
use super::freeze::Freeze;
use super::module::ModuleStatistics;
use super::record::FailureCause;
use crate::utils::error::StatisticsError;
use parking_lot::Mutex;

#[derive(Debug)]
pub struct SharedAssemblyAccumulator {
    inner: Mutex<AssemblyAccumulator>,
}

impl SharedAssemblyAccumulator {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from(AssemblyAccumulator::new(name))
    }

    pub fn add_module_statistics(&self, stats: ModuleStatistics) {
        self.inner.lock().add_module_statistics(stats);
    }

    /// Same write-once policy as [`AssemblyAccumulator::set_fatal_exception`]
    pub fn set_fatal_exception(
        &self,
        cause: impl Into<FailureCause>,
    ) -> Result<(), StatisticsError> {
        self.inner.lock().set_fatal_exception(cause)
    }

    /// Hand the accumulator back to a single owner
    pub fn into_inner(self) -> AssemblyAccumulator {
        self.inner.into_inner()
    }
}

impl From<AssemblyAccumulator> for SharedAssemblyAccumulator {
    fn from(accumulator: AssemblyAccumulator) -> Self {
        Self {
            inner: Mutex::new(accumulator),
        }
    }
}

impl Freeze for SharedAssemblyAccumulator {
    type Snapshot = AssemblyStatistics;

    fn freeze(self) -> AssemblyStatistics {
        self.into_inner().freeze()
    }
}
