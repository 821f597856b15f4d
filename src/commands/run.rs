//! `shuttle run`: route → API integration verification

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::Verdict;
use crate::config::ShuttleConfig;
use crate::detect::ErrorMatcher;
use crate::probe::ReqwestTransport;
use crate::report::{console, print_summary, write_json, ConsoleObserver};
use crate::verify::{EngineSettings, RunMode, VerificationEngine};

/// Authenticate, probe every route and its APIs, write the report
pub fn execute(config: &ShuttleConfig, report_path: &Path) -> Result<Verdict> {
    println!(
        "{} Verifying frontend routes against backend APIs",
        "→".cyan().bold()
    );
    println!("{}", console::rule());
    verify_routes(config, RunMode::Integration, report_path, false)
}

/// Run the engine in `mode` with console progress and write the report.
///
/// A fatal precondition is printed and yields [`Verdict::Aborted`]; no
/// report file is written in that case.
pub(crate) fn verify_routes(
    config: &ShuttleConfig,
    mode: RunMode,
    report_path: &Path,
    show_findings: bool,
) -> Result<Verdict> {
    let registry = config.load_registry()?;
    let transport = ReqwestTransport::new(config.request_timeout())?;
    let matcher = ErrorMatcher::new().context("Failed to compile error signatures")?;
    let settings = EngineSettings {
        backend_url: config.backend_url.clone(),
        frontend_url: config.frontend_url.clone(),
        credentials: config.credentials.clone(),
        mode,
    };

    if mode == RunMode::Integration {
        println!(
            "{} {} routes, {} APIs\n",
            "ℹ".blue(),
            registry.len(),
            registry.total_apis()
        );
    }

    let mut engine = VerificationEngine::new(transport, registry, matcher, settings);
    let mut observer = ConsoleObserver::new(show_findings);
    let report = match engine.run(&mut observer) {
        Ok(report) => report,
        Err(_) => return Ok(Verdict::Aborted),
    };

    print_summary(&report);
    write_json(&report, report_path)?;
    println!("\n{} Detailed results: {}", "ℹ".blue(), report_path.display());

    Ok(Verdict::from_passed(report.all_passed()))
}
