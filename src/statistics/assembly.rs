//! Assembly level: the whole weaving pass.
//!
//! Besides the frozen modules, the assembly owns the single fatal-exception
//! slot of the pass. A fatal cause means the pass itself could not complete
//! (the binary could not be loaded or saved); it is independent of how many
//! join points were recorded as failed.

use super::freeze::{Freeze, WeavingSummary, WeavingTotals};
use super::module::ModuleStatistics;
use super::record::FailureCause;
use crate::utils::error::StatisticsError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct AssemblyAccumulator {
    name: String,
    modules: Vec<ModuleStatistics>,
    fatal_exception: Option<FailureCause>,
}

impl AssemblyAccumulator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modules: Vec::new(),
            fatal_exception: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_module_statistics(&mut self, stats: ModuleStatistics) {
        self.modules.push(stats);
    }

    /// Record the cause that aborted the weaving pass
    ///
    /// The slot is write-once. A second call is rejected and the first cause
    /// is kept, since it is the one that stopped the pass.
    ///
    /// # Errors
    /// * `StatisticsError::FatalExceptionAlreadySet` - a cause was already recorded
    pub fn set_fatal_exception(
        &mut self,
        cause: impl Into<FailureCause>,
    ) -> Result<(), StatisticsError> {
        let cause = cause.into();
        if let Some(existing) = &self.fatal_exception {
            warn!(
                "Ignoring fatal exception for {} ({}): already set to {}",
                self.name, cause, existing
            );
            return Err(StatisticsError::FatalExceptionAlreadySet {
                existing: existing.clone(),
            });
        }

        debug!("Fatal exception for {}: {}", self.name, cause);
        self.fatal_exception = Some(cause);
        Ok(())
    }

    pub fn fatal_exception(&self) -> Option<&FailureCause> {
        self.fatal_exception.as_ref()
    }
}

impl Freeze for AssemblyAccumulator {
    type Snapshot = AssemblyStatistics;

    fn freeze(self) -> AssemblyStatistics {
        let stats = AssemblyStatistics {
            name: self.name,
            modules: self.modules,
            fatal_exception: self.fatal_exception,
        };
        debug!(
            "Froze assembly {}: {} modules, fatal: {}",
            stats.name,
            stats.module_count(),
            stats.fatal_exception.is_some()
        );
        stats
    }
}

/// The final, immutable weaving report
///
/// Holds no interior mutability, so it can be shared across threads and read
/// concurrently without synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyStatistics {
    name: String,
    modules: Vec<ModuleStatistics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fatal_exception: Option<FailureCause>,
}

impl AssemblyStatistics {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modules(&self) -> &[ModuleStatistics] {
        &self.modules
    }

    pub fn fatal_exception(&self) -> Option<&FailureCause> {
        self.fatal_exception.as_ref()
    }

    /// The pass ran to completion (no fatal cause)
    pub fn is_complete(&self) -> bool {
        self.fatal_exception.is_none()
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn class_count(&self) -> usize {
        self.modules.iter().map(|m| m.class_count()).sum()
    }

    pub fn method_count(&self) -> usize {
        self.modules.iter().map(|m| m.method_count()).sum()
    }

    pub fn property_count(&self) -> usize {
        self.modules.iter().map(|m| m.property_count()).sum()
    }
}

impl WeavingSummary for AssemblyStatistics {
    fn totals(&self) -> WeavingTotals {
        self.modules.iter().map(|m| m.totals()).sum()
    }

    /// Also true when only a fatal cause is set and every record succeeded
    fn has_failures(&self) -> bool {
        self.fatal_exception.is_some() || self.modules.iter().any(|m| m.has_failures())
    }
}
