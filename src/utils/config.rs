//! Configuration and constants for the CLI.

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default location of a weaving report
pub const DEFAULT_REPORT_PATH: &str = "weaving-report.json";

/// Failed records listed in a text summary unless overridden
pub const DEFAULT_MAX_FAILURES: usize = 20;

/// Suffixes appended to a property name to label its accessors
pub const GETTER_SUFFIX: &str = ".get";
pub const SETTER_SUFFIX: &str = ".set";
