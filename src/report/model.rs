//! The structured record produced at the end of a run

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::detect::ErrorFinding;
use crate::registry::RouteSpec;
use crate::verify::{RouteOutcome, RunMode};

/// Percentage of `part` in `whole`; an empty denominator counts as 100%
pub fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        100.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Summary of one verification run.
///
/// Counts are taken from the route outcomes and every rate is derived from
/// those counts in [`RunReport::from_outcomes`]; nothing is set by hand.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    timestamp: String,
    mode: RunMode,
    total_routes: usize,
    total_apis: usize,
    successful_routes: usize,
    successful_apis: usize,
    routes_with_findings: usize,
    total_findings: usize,
    page_success_rate: f64,
    error_free_rate: f64,
    api_success_rate: f64,
    findings: Vec<ErrorFinding>,
    url_api_mapping: Vec<RouteSpec>,
    route_results: Vec<RouteOutcome>,
}

impl RunReport {
    pub fn from_outcomes(
        timestamp: DateTime<Local>,
        mode: RunMode,
        mapping: &[RouteSpec],
        outcomes: Vec<RouteOutcome>,
    ) -> Self {
        let total_routes = outcomes.len();
        let total_apis = outcomes.iter().map(|o| o.apis.len()).sum();
        let successful_routes = outcomes.iter().filter(|o| o.page_passed()).count();
        let successful_apis = outcomes.iter().map(RouteOutcome::apis_passed).sum();
        let routes_with_findings = outcomes.iter().filter(|o| o.has_findings()).count();
        let findings: Vec<ErrorFinding> = outcomes
            .iter()
            .flat_map(|o| o.findings.iter().cloned())
            .collect();

        Self {
            timestamp: timestamp.to_rfc3339(),
            mode,
            total_routes,
            total_apis,
            successful_routes,
            successful_apis,
            routes_with_findings,
            total_findings: findings.len(),
            page_success_rate: percent(successful_routes, total_routes),
            error_free_rate: percent(total_routes - routes_with_findings, total_routes),
            api_success_rate: percent(successful_apis, total_apis),
            findings,
            url_api_mapping: mapping.to_vec(),
            route_results: outcomes,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn total_routes(&self) -> usize {
        self.total_routes
    }

    pub fn total_apis(&self) -> usize {
        self.total_apis
    }

    pub fn successful_routes(&self) -> usize {
        self.successful_routes
    }

    pub fn successful_apis(&self) -> usize {
        self.successful_apis
    }

    pub fn routes_with_findings(&self) -> usize {
        self.routes_with_findings
    }

    pub fn total_findings(&self) -> usize {
        self.total_findings
    }

    pub fn page_success_rate(&self) -> f64 {
        self.page_success_rate
    }

    pub fn error_free_rate(&self) -> f64 {
        self.error_free_rate
    }

    pub fn api_success_rate(&self) -> f64 {
        self.api_success_rate
    }

    pub fn findings(&self) -> &[ErrorFinding] {
        &self.findings
    }

    pub fn mapping(&self) -> &[RouteSpec] {
        &self.url_api_mapping
    }

    pub fn route_results(&self) -> &[RouteOutcome] {
        &self.route_results
    }

    /// Every page answered 200, every API below 300 and nothing was detected
    pub fn all_passed(&self) -> bool {
        self.successful_routes == self.total_routes
            && self.successful_apis == self.total_apis
            && self.total_findings == 0
    }
}
