//! Type-check, build and endpoint checks

use regex::Regex;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use super::executor::run_process;
use super::result::{CheckResult, CheckStatus};
use crate::auth::{authenticate, Credentials};
use crate::config::EndpointCheck;
use crate::probe::{join_url, probe, HttpTransport, ProbeRequest, SuccessPolicy};

/// Most diagnostic lines kept for a failed process check
const MAX_DIAGNOSTICS: usize = 20;

/// Most error lines kept from a failed build
const MAX_BUILD_ERRORS: usize = 5;

/// How diagnostics are pulled out of a failed process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticStyle {
    /// Every non-empty output line
    AllLines,
    /// Only `Error:` / `Failed to compile` lines
    BuildErrors,
}

/// A process check: exit 0 passes, non-zero fails, no verdict is a skip
#[derive(Debug, Clone)]
pub struct ProcessCheck {
    pub name: String,
    pub command: Vec<String>,
    pub timeout: Duration,
    pub diagnostics: DiagnosticStyle,
}

pub fn run_process_check(check: &ProcessCheck, working_dir: &Path) -> CheckResult {
    let start = Instant::now();

    let Some(program) = check.command.first() else {
        return CheckResult::new(
            &check.name,
            CheckStatus::Skipped {
                reason: "no command configured".to_string(),
            },
            start.elapsed(),
        );
    };
    if which::which(program).is_err() {
        debug!(check = %check.name, program = %program, "program not found");
        return CheckResult::new(
            &check.name,
            CheckStatus::Skipped {
                reason: format!("{program} not found on PATH"),
            },
            start.elapsed(),
        );
    }

    let output = match run_process(&check.command, working_dir, check.timeout) {
        Ok(output) => output,
        Err(err) => {
            debug!(check = %check.name, error = %err, "could not run check");
            return CheckResult::new(
                &check.name,
                CheckStatus::Skipped {
                    reason: format!("{err:#}"),
                },
                start.elapsed(),
            );
        }
    };

    let status = if output.timed_out {
        CheckStatus::Skipped {
            reason: format!("timed out after {}s", check.timeout.as_secs()),
        }
    } else if output.success {
        CheckStatus::Passed
    } else {
        let combined = output.combined();
        let diagnostics = match check.diagnostics {
            DiagnosticStyle::AllLines => non_empty_lines(&combined, MAX_DIAGNOSTICS),
            DiagnosticStyle::BuildErrors => build_errors(&combined, MAX_BUILD_ERRORS),
        };
        CheckStatus::Failed { diagnostics }
    };
    info!(check = %check.name, status = ?status, "process check finished");

    CheckResult::new(&check.name, status, output.duration)
}

/// GET each endpoint with a fresh login; passes only when all answer 200
pub fn run_endpoint_check<T: HttpTransport + ?Sized>(
    transport: &T,
    backend_url: &str,
    credentials: &Credentials,
    endpoints: &[EndpointCheck],
) -> CheckResult {
    let start = Instant::now();

    let credential = match authenticate(transport, backend_url, credentials) {
        Ok(credential) => credential,
        Err(err) => {
            return CheckResult::new(
                "api_endpoints",
                CheckStatus::Failed {
                    diagnostics: vec![err.to_string()],
                },
                start.elapsed(),
            );
        }
    };

    let diagnostics: Vec<String> = endpoints
        .iter()
        .filter_map(|endpoint| {
            let request = ProbeRequest::new(
                endpoint.method,
                join_url(backend_url, &endpoint.path),
                SuccessPolicy::Exact(200),
            )
            .with_bearer(credential.token());
            let result = probe(transport, &request);
            if result.success {
                None
            } else {
                Some(format!(
                    "{} ({} {}): {}",
                    endpoint.label,
                    endpoint.method,
                    endpoint.path,
                    result
                        .error_message
                        .clone()
                        .unwrap_or_else(|| result.status_label())
                ))
            }
        })
        .collect();

    let status = if diagnostics.is_empty() {
        CheckStatus::Passed
    } else {
        CheckStatus::Failed { diagnostics }
    };
    CheckResult::new("api_endpoints", status, start.elapsed())
}

fn non_empty_lines(output: &str, limit: usize) -> Vec<String> {
    output
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .take(limit)
        .map(String::from)
        .collect()
}

fn build_errors(output: &str, limit: usize) -> Vec<String> {
    let Ok(re) = Regex::new(r"Error:.*|Failed to compile.*") else {
        return non_empty_lines(output, limit);
    };
    re.find_iter(output)
        .take(limit)
        .map(|m| m.as_str().trim_end().to_string())
        .collect()
}
