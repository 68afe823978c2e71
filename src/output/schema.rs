//! Report envelope written to JSON.
//!
//! Schema is versioned to allow future evolution.

use crate::statistics::AssemblyStatistics;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeavingReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated (RFC 3339, UTC)
    pub generated_at: String,

    /// Frozen statistics of the weaving pass
    pub statistics: AssemblyStatistics,
}

impl WeavingReport {
    /// Wrap frozen statistics with the current schema version and time
    pub fn new(statistics: AssemblyStatistics) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            statistics,
        }
    }
}
