//! Output writers for weaving reports.
//!
//! This module handles rendering frozen statistics:
//! - JSON reports (versioned envelope)
//! - Text summaries

pub mod json;
pub mod schema;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, validate_path, write_report};
pub use schema::WeavingReport;
pub use text::generate_text_summary;
