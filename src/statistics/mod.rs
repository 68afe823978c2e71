//! Weaving statistics: accumulators and their frozen snapshots.
//!
//! Levels, leaves first:
//! - Record: one weaving attempt
//! - Method: records of one method or accessor
//! - Property: a getter and a setter method
//! - Class: methods and properties of one class
//! - Module: classes of one module
//! - Assembly: modules of the binary plus the fatal-exception slot
//!
//! The driver walks the target depth-first. When a scope closes it freezes
//! that scope's accumulator and appends the snapshot to the parent.

pub mod assembly;
pub mod class;
pub mod freeze;
pub mod method;
pub mod module;
pub mod property;
pub mod record;
pub mod shared;

// Re-export main types
pub use assembly::{AssemblyAccumulator, AssemblyStatistics};
pub use class::{ClassAccumulator, ClassStatistics};
pub use freeze::{Freeze, WeavingRecorder, WeavingSummary, WeavingTotals};
pub use method::{MethodAccumulator, MethodStatistics};
pub use module::{ModuleAccumulator, ModuleStatistics};
pub use property::{PropertyAccumulator, PropertyStatistics};
pub use record::{FailureCause, WeavingOutcome, WeavingRecord};
pub use shared::SharedAssemblyAccumulator;
