mod cli;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use shuttle::commands::Verdict;
use shuttle::logging;

use cli::{dispatch, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let verdict = match dispatch(cli.config.as_deref(), cli.command) {
        Ok(verdict) => verdict,
        Err(err) => {
            eprintln!("{} {err:#}", "✗".red().bold());
            std::process::exit(Verdict::Aborted.exit_code());
        }
    };

    if verdict != Verdict::Passed {
        std::process::exit(verdict.exit_code());
    }
    Ok(())
}
