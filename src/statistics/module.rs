//! Module level: frozen classes of one module.

use super::class::ClassStatistics;
use super::freeze::{Freeze, WeavingSummary, WeavingTotals};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub struct ModuleAccumulator {
    name: String,
    classes: Vec<ClassStatistics>,
}

impl ModuleAccumulator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_class_statistics(&mut self, stats: ClassStatistics) {
        self.classes.push(stats);
    }
}

impl Freeze for ModuleAccumulator {
    type Snapshot = ModuleStatistics;

    fn freeze(self) -> ModuleStatistics {
        let stats = ModuleStatistics {
            name: self.name,
            classes: self.classes,
        };
        debug!("Froze module {}: {} classes", stats.name, stats.class_count());
        stats
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleStatistics {
    name: String,
    classes: Vec<ClassStatistics>,
}

impl ModuleStatistics {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &[ClassStatistics] {
        &self.classes
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn method_count(&self) -> usize {
        self.classes.iter().map(|c| c.method_count()).sum()
    }

    pub fn property_count(&self) -> usize {
        self.classes.iter().map(|c| c.property_count()).sum()
    }
}

impl WeavingSummary for ModuleStatistics {
    fn totals(&self) -> WeavingTotals {
        self.classes.iter().map(|c| c.totals()).sum()
    }

    fn has_failures(&self) -> bool {
        self.classes.iter().any(|c| c.has_failures())
    }
}
