//! Weave Stats CLI
//!
//! Inspects weaving reports produced by an aspect weaving pass.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use weave_stats::commands::{
    display_schema, display_version, execute_summary, validate_report_file, SummaryArgs,
};
use weave_stats::utils::config::{DEFAULT_MAX_FAILURES, DEFAULT_REPORT_PATH};

/// Weave Stats - weaving statistics reports
#[derive(Parser, Debug)]
#[command(name = "weave-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a text summary of a weaving report
    Summary {
        /// Path to report JSON file
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        file: PathBuf,

        /// Number of failed join points to list
        #[arg(long, default_value_t = DEFAULT_MAX_FAILURES)]
        max_failures: usize,
    },

    /// Validate a weaving report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Summary { file, max_failures } => {
            execute_summary(SummaryArgs {
                report: file,
                max_failures,
            })?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
