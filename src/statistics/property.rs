//! Property level: a getter and a setter reported as one unit.
//!
//! The two accessors are woven as independent join points, so the
//! accumulator hands out two independent method accumulators. Both slots
//! always exist; an accessor the property does not declare just freezes to
//! an empty `MethodStatistics`.

use super::freeze::{Freeze, WeavingSummary, WeavingTotals};
use super::method::{MethodAccumulator, MethodStatistics};
use crate::utils::config::{GETTER_SUFFIX, SETTER_SUFFIX};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct PropertyAccumulator {
    name: String,
    getter: MethodAccumulator,
    setter: MethodAccumulator,
}

impl PropertyAccumulator {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            getter: MethodAccumulator::new(format!("{name}{GETTER_SUFFIX}")),
            setter: MethodAccumulator::new(format!("{name}{SETTER_SUFFIX}")),
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records for the getter
    pub fn getter_container(&mut self) -> &mut MethodAccumulator {
        &mut self.getter
    }

    /// Records for the setter
    pub fn setter_container(&mut self) -> &mut MethodAccumulator {
        &mut self.setter
    }
}

impl Freeze for PropertyAccumulator {
    type Snapshot = PropertyStatistics;

    fn freeze(self) -> PropertyStatistics {
        let stats = PropertyStatistics {
            name: self.name,
            getter: self.getter.freeze(),
            setter: self.setter.freeze(),
        };
        debug!(
            "Froze property {}: getter {} records, setter {} records",
            stats.name,
            stats.getter.total_attempts(),
            stats.setter.total_attempts()
        );
        stats
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyStatistics {
    name: String,
    getter: MethodStatistics,
    setter: MethodStatistics,
}

impl PropertyStatistics {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn getter(&self) -> &MethodStatistics {
        &self.getter
    }

    pub fn setter(&self) -> &MethodStatistics {
        &self.setter
    }

    /// Either accessor has at least one successful attempt
    pub fn is_woven(&self) -> bool {
        self.getter.is_woven() || self.setter.is_woven()
    }
}

impl WeavingSummary for PropertyStatistics {
    fn totals(&self) -> WeavingTotals {
        self.getter.totals() + self.setter.totals()
    }

    fn has_failures(&self) -> bool {
        self.getter.has_failures() || self.setter.has_failures()
    }
}
