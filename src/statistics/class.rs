//! Class level: frozen methods and properties of one class.

use super::freeze::{Freeze, WeavingSummary, WeavingTotals};
use super::method::MethodStatistics;
use super::property::PropertyStatistics;
use log::debug;
use serde::{Deserialize, Serialize};

/// Collects frozen member snapshots while the driver is inside one class
///
/// Members arrive already frozen; the class never touches a method's records.
#[derive(Debug)]
pub struct ClassAccumulator {
    name: String,
    methods: Vec<MethodStatistics>,
    properties: Vec<PropertyStatistics>,
}

impl ClassAccumulator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_method_statistics(&mut self, stats: MethodStatistics) {
        self.methods.push(stats);
    }

    pub fn add_property_statistics(&mut self, stats: PropertyStatistics) {
        self.properties.push(stats);
    }
}

impl Freeze for ClassAccumulator {
    type Snapshot = ClassStatistics;

    fn freeze(self) -> ClassStatistics {
        let stats = ClassStatistics {
            name: self.name,
            methods: self.methods,
            properties: self.properties,
        };
        debug!(
            "Froze class {}: {} methods, {} properties",
            stats.name,
            stats.method_count(),
            stats.property_count()
        );
        stats
    }
}

/// Read-only statistics of one class
///
/// A class with no members is a valid, empty aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassStatistics {
    name: String,
    methods: Vec<MethodStatistics>,
    properties: Vec<PropertyStatistics>,
}

impl ClassStatistics {
    /// Fully qualified class name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Methods in declaration order
    pub fn methods(&self) -> &[MethodStatistics] {
        &self.methods
    }

    pub fn properties(&self) -> &[PropertyStatistics] {
        &self.properties
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    pub fn woven_method_count(&self) -> usize {
        self.methods.iter().filter(|m| m.is_woven()).count()
    }

    pub fn woven_property_count(&self) -> usize {
        self.properties.iter().filter(|p| p.is_woven()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty() && self.properties.is_empty()
    }
}

impl WeavingSummary for ClassStatistics {
    fn totals(&self) -> WeavingTotals {
        let methods: WeavingTotals = self.methods.iter().map(|m| m.totals()).sum();
        let properties: WeavingTotals = self.properties.iter().map(|p| p.totals()).sum();
        methods + properties
    }

    fn has_failures(&self) -> bool {
        self.methods.iter().any(|m| m.has_failures())
            || self.properties.iter().any(|p| p.has_failures())
    }
}
