//! `shuttle scan`: client-side error signatures on every route, no login

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use super::run::verify_routes;
use super::Verdict;
use crate::config::ShuttleConfig;
use crate::report::console;
use crate::verify::RunMode;

pub fn execute(config: &ShuttleConfig, report_path: &Path) -> Result<Verdict> {
    println!(
        "{} Scanning frontend pages for client-side error signatures",
        "→".cyan().bold()
    );
    println!("{}", console::rule());
    verify_routes(config, RunMode::PagesOnly, report_path, true)
}
