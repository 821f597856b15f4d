//! Result types for auxiliary checks

use serde::Serialize;
use std::time::Duration;

use crate::report::percent;

/// Outcome of one auxiliary check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckStatus {
    Passed,
    Failed { diagnostics: Vec<String> },
    /// Could not reach a verdict (timed out, tool missing, spawn failure)
    Skipped { reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    #[serde(flatten)]
    pub status: CheckStatus,
    pub duration_seconds: f64,
}

impl CheckResult {
    pub fn new(name: impl Into<String>, status: CheckStatus, duration: Duration) -> Self {
        Self {
            name: name.into(),
            status,
            duration_seconds: duration.as_secs_f64(),
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self.status, CheckStatus::Passed)
    }

    pub fn skipped(&self) -> bool {
        matches!(self.status, CheckStatus::Skipped { .. })
    }

    pub fn label(&self) -> &'static str {
        match self.status {
            CheckStatus::Passed => "PASSED",
            CheckStatus::Failed { .. } => "FAILED",
            CheckStatus::Skipped { .. } => "SKIPPED",
        }
    }
}

/// All auxiliary checks of one invocation
#[derive(Debug, Clone, Serialize)]
pub struct CheckSummary {
    pub timestamp: String,
    pub results: Vec<CheckResult>,
}

impl CheckSummary {
    pub fn new(timestamp: impl Into<String>, results: Vec<CheckResult>) -> Self {
        Self {
            timestamp: timestamp.into(),
            results,
        }
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.status, CheckStatus::Failed { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.results.iter().filter(|r| r.skipped()).count()
    }

    /// Checks that reached a verdict; skipped ones are left out
    pub fn decided_count(&self) -> usize {
        self.results.len() - self.skipped_count()
    }

    /// Passed over decided checks
    pub fn success_rate(&self) -> f64 {
        percent(self.passed_count(), self.decided_count())
    }

    /// Nothing failed and at least one check reached a verdict
    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0 && self.decided_count() > 0
    }
}
