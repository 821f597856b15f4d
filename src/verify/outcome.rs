//! Per-route accumulators produced while probing

use serde::Serialize;

use crate::detect::ErrorFinding;
use crate::probe::ProbeResult;

/// Result of probing one expected API
#[derive(Debug, Clone, Serialize)]
pub struct ApiOutcome {
    pub api: String,
    #[serde(flatten)]
    pub result: ProbeResult,
}

impl ApiOutcome {
    pub fn passed(&self) -> bool {
        self.result.success
    }
}

/// Everything observed for one route.
///
/// Routes are independent, so each gets its own outcome and the engine
/// merges them only when aggregating.
#[derive(Debug, Clone, Serialize)]
pub struct RouteOutcome {
    pub route: String,
    pub page: ProbeResult,
    pub findings: Vec<ErrorFinding>,
    pub apis: Vec<ApiOutcome>,
}

impl RouteOutcome {
    /// Page answered 200. Findings do not affect this.
    pub fn page_passed(&self) -> bool {
        self.page.success
    }

    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    pub fn apis_passed(&self) -> usize {
        self.apis.iter().filter(|a| a.passed()).count()
    }

    pub fn failed_apis(&self) -> impl Iterator<Item = &ApiOutcome> {
        self.apis.iter().filter(|a| !a.passed())
    }
}
