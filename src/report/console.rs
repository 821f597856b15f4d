//! Human-readable progress and summary output

use colored::Colorize;

use super::model::RunReport;
use crate::detect::ErrorFinding;
use crate::probe::ProbeResult;
use crate::registry::RouteSpec;
use crate::verify::{FatalPrecondition, RouteOutcome, RunMode, RunObserver};

const RULE_WIDTH: usize = 60;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Streams one line per page and API as the run progresses
#[derive(Debug, Default)]
pub struct ConsoleObserver {
    /// Print every finding under its page line
    pub show_findings: bool,
}

impl ConsoleObserver {
    pub fn new(show_findings: bool) -> Self {
        Self { show_findings }
    }
}

impl RunObserver for ConsoleObserver {
    fn authenticated(&mut self) {
        println!("{} Backend authentication succeeded", "✓".green().bold());
    }

    fn frontend_reachable(&mut self, _root: &ProbeResult) {
        println!("{} Frontend is up\n", "✓".green().bold());
    }

    fn route_started(&mut self, spec: &RouteSpec) {
        println!("{} {}", "→".cyan().bold(), spec.route.bold());
    }

    fn page_checked(&mut self, _route: &str, page: &ProbeResult, findings: &[ErrorFinding]) {
        let glyph = if page.success {
            "✓".green()
        } else {
            "✗".red()
        };
        println!("   {glyph} page: {}", page.status_label());
        if let Some(message) = &page.error_message {
            println!("     {}", message.dimmed());
        }

        if findings.is_empty() {
            return;
        }
        println!(
            "   {} {} client-side error signature(s)",
            "⚠".yellow(),
            findings.len()
        );
        if self.show_findings {
            for finding in findings {
                println!("     {} {}: {}", "•".yellow(), finding.kind, finding.matched);
            }
        }
    }

    fn api_checked(&mut self, api: &str, result: &ProbeResult) {
        if result.success {
            println!(
                "   {} API: {api} - {} ({:.2}s)",
                "✓".green(),
                result.status_label(),
                result.elapsed_seconds
            );
        } else {
            println!(
                "   {} API: {api} - {}",
                "✗".red(),
                result.status_label()
            );
        }
    }

    fn route_finished(&mut self, _outcome: &RouteOutcome) {
        println!();
    }

    fn aborted(&mut self, reason: &FatalPrecondition) {
        eprintln!("{} {}", "✗".red().bold(), reason);
    }
}

/// Print the closing summary block for a run
pub fn print_summary(report: &RunReport) {
    println!("{}", rule());
    println!("{} {}", "Verification summary".bold(), report.timestamp().dimmed());
    println!(
        "   Pages OK: {}/{} ({:.1}%)",
        report.successful_routes(),
        report.total_routes(),
        report.page_success_rate()
    );
    if report.mode() == RunMode::Integration {
        println!(
            "   APIs OK: {}/{} ({:.1}%)",
            report.successful_apis(),
            report.total_apis(),
            report.api_success_rate()
        );
    }
    println!(
        "   Error-free pages: {}/{} ({:.1}%)",
        report.total_routes() - report.routes_with_findings(),
        report.total_routes(),
        report.error_free_rate()
    );
    println!("   Error signatures found: {}", report.total_findings());

    if report.all_passed() {
        println!("\n{} All routes and APIs passed", "✓".green().bold());
        return;
    }

    println!(
        "\n{} {} page(s), {} API(s) failed; {} error signature(s)",
        "⚠".yellow().bold(),
        report.total_routes() - report.successful_routes(),
        report.total_apis() - report.successful_apis(),
        report.total_findings()
    );
    for outcome in report.route_results() {
        if !outcome.page_passed() {
            println!("   - {}: page {}", outcome.route, outcome.page.status_label());
        }
        for api in outcome.failed_apis() {
            println!(
                "   - {}: {} {}",
                outcome.route,
                api.api,
                api.result.status_label()
            );
        }
    }
    for finding in report.findings() {
        println!("   - {}: {}", finding.route, finding.kind);
    }
}
