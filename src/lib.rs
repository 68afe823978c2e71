//! Weave Stats
//!
//! Records what happened during one pass of binary aspect weaving, at every
//! structural level of the target (assembly, module, class, method and
//! property), and exposes the result as an immutable report once the pass
//! finishes.
//!
//! ## Getting Started
//!
//! A weaving driver walks the target depth-first, records each attempt into
//! the innermost accumulator, and freezes scopes as it leaves them:
//!
//! ```
//! use weave_stats::statistics::*;
//!
//! let mut method = MethodAccumulator::new("Run");
//! method.record_attempt("App.Job::Run", &["Logging"], WeavingOutcome::Succeeded);
//!
//! let mut class = ClassAccumulator::new("App.Job");
//! class.add_method_statistics(method.freeze());
//!
//! let mut module = ModuleAccumulator::new("App.Core");
//! module.add_class_statistics(class.freeze());
//!
//! let mut assembly = AssemblyAccumulator::new("App");
//! assembly.add_module_statistics(module.freeze());
//!
//! let report = assembly.freeze();
//! assert_eq!(report.totals().successes, 1);
//! assert!(!report.has_failures());
//! ```

pub mod commands;
pub mod output;
pub mod statistics;
pub mod utils;

pub use statistics::{AssemblyStatistics, Freeze, WeavingOutcome, WeavingRecorder, WeavingSummary};
