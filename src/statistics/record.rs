//! Leaf records: one weaving attempt against a single method or accessor.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Why a join point (or the whole pass) failed
///
/// `message` is the top-level description; `chain` holds the messages of the
/// underlying error sources, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureCause {
    message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    chain: Vec<String>,
}

impl FailureCause {
    /// Create a cause from a plain message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            chain: Vec::new(),
        }
    }

    /// Capture an error and every `source()` below it
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        let mut chain = Vec::new();
        let mut source = error.source();
        while let Some(inner) = source {
            chain.push(inner.to_string());
            source = inner.source();
        }

        Self {
            message: error.to_string(),
            chain,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn chain(&self) -> &[String] {
        &self.chain
    }
}

impl fmt::Display for FailureCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for inner in &self.chain {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}

impl From<&str> for FailureCause {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for FailureCause {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

/// Outcome of a single weaving attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "cause", rename_all = "snake_case")]
pub enum WeavingOutcome {
    Succeeded,
    Failed(FailureCause),
}

impl WeavingOutcome {
    /// Shorthand for `Failed` from anything convertible to a cause
    pub fn failed(cause: impl Into<FailureCause>) -> Self {
        WeavingOutcome::Failed(cause.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, WeavingOutcome::Succeeded)
    }

    pub fn cause(&self) -> Option<&FailureCause> {
        match self {
            WeavingOutcome::Succeeded => None,
            WeavingOutcome::Failed(cause) => Some(cause),
        }
    }
}

/// One instrumentation attempt
///
/// Immutable once created: there are no setters, and the advice list is
/// copied in at construction so the caller's buffer can be reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeavingRecord {
    target: String,
    advice: Vec<String>,
    outcome: WeavingOutcome,
}

impl WeavingRecord {
    /// Create a record
    ///
    /// # Arguments
    /// * `target` - Qualified name of the method or accessor touched
    /// * `advice` - Advice names in application order
    /// * `outcome` - Result of the attempt
    pub fn new<S: AsRef<str>>(
        target: impl Into<String>,
        advice: &[S],
        outcome: WeavingOutcome,
    ) -> Self {
        Self {
            target: target.into(),
            advice: advice.iter().map(|a| a.as_ref().to_string()).collect(),
            outcome,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Advice names, in the order they were applied
    pub fn advice(&self) -> &[String] {
        &self.advice
    }

    pub fn outcome(&self) -> &WeavingOutcome {
        &self.outcome
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}
