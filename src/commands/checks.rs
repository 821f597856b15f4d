//! `shuttle checks`: type-check, build and endpoint checks

use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use std::path::Path;

use super::Verdict;
use crate::checks::{
    run_endpoint_check, run_process_check, CheckResult, CheckStatus, CheckSummary,
};
use crate::config::ShuttleConfig;
use crate::probe::ReqwestTransport;
use crate::report::{console, write_json};

/// Which checks to run
#[derive(Debug, Clone, Copy)]
pub struct CheckSelection {
    pub typecheck: bool,
    pub build: bool,
    pub endpoints: bool,
}

pub fn execute(config: &ShuttleConfig, selection: CheckSelection) -> Result<Verdict> {
    println!("{} Running auxiliary checks", "→".cyan().bold());
    println!("{}", console::rule());

    let project_dir = config.checks.project_dir.as_path();
    let mut results = Vec::new();

    if selection.typecheck {
        results.push(announce_and_run("Type check", || {
            run_process_check(&config.checks.typecheck(), project_dir)
        }));
    }
    if selection.build {
        results.push(announce_and_run("Production build", || {
            run_process_check(&config.checks.build(), project_dir)
        }));
    }
    if selection.endpoints {
        let transport = ReqwestTransport::new(config.request_timeout())?;
        results.push(announce_and_run("Backend endpoints", || {
            run_endpoint_check(
                &transport,
                &config.backend_url,
                &config.credentials,
                &config.checks.endpoints,
            )
        }));
    }

    let summary = CheckSummary::new(Local::now().to_rfc3339(), results);
    print_summary(&summary);
    write_report(&summary, &config.checks.report_path)?;

    Ok(Verdict::from_passed(summary.all_passed()))
}

fn announce_and_run(title: &str, run: impl FnOnce() -> CheckResult) -> CheckResult {
    println!("\n{} {}", "→".cyan().bold(), title.bold());
    let result = run();
    print_result(&result);
    result
}

fn print_result(result: &CheckResult) {
    match &result.status {
        CheckStatus::Passed => println!(
            "   {} {} ({:.1}s)",
            "✓".green(),
            result.label(),
            result.duration_seconds
        ),
        CheckStatus::Failed { diagnostics } => {
            println!("   {} {}", "✗".red(), result.label());
            for line in diagnostics {
                println!("     {}", line.dimmed());
            }
        }
        CheckStatus::Skipped { reason } => {
            println!("   {} {}: {}", "⚠".yellow(), result.label(), reason)
        }
    }
}

fn print_summary(summary: &CheckSummary) {
    println!("\n{}", console::rule());
    println!("{}", "Check summary".bold());
    for result in &summary.results {
        let glyph = match result.status {
            CheckStatus::Passed => "✓".green(),
            CheckStatus::Failed { .. } => "✗".red(),
            CheckStatus::Skipped { .. } => "⚠".yellow(),
        };
        println!("   {glyph} {}: {}", result.name, result.label());
    }
    println!(
        "\n   Passed: {}/{} ({:.1}%)",
        summary.passed_count(),
        summary.decided_count(),
        summary.success_rate()
    );
    println!("   Failed: {}", summary.failed_count());
    println!("   Skipped: {}", summary.skipped_count());
    if summary.all_passed() {
        println!("\n{} All checks passed", "✓".green().bold());
    }
}

fn write_report(summary: &CheckSummary, path: &Path) -> Result<()> {
    write_json(summary, path)?;
    println!("\n{} Detailed results: {}", "ℹ".blue(), path.display());
    Ok(())
}
