//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod summary;
pub mod utils;

// Re-export main command functions
pub use summary::{execute_summary, render_summary, validate_args, SummaryArgs};
pub use utils::{display_schema, display_version, validate_report_file};
