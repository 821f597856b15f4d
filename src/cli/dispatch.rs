use anyhow::Result;
use clap::CommandFactory;
use shuttle::commands::checks::CheckSelection;
use shuttle::commands::{checks, routes, run, scan, Verdict};
use shuttle::completions::generate_completions;
use shuttle::config::{Overrides, ShuttleConfig};
use std::io;
use std::path::Path;

use super::types::{Cli, Commands, LoginArgs, TargetArgs};

pub fn dispatch(config_path: Option<&Path>, command: Commands) -> Result<Verdict> {
    match command {
        Commands::Run {
            target,
            login,
            output,
        } => {
            let config = load_config(config_path, overrides(target, login))?;
            let path = output.unwrap_or_else(|| config.report_path.clone());
            run::execute(&config, &path)
        }
        Commands::Scan { target, output } => {
            let config = load_config(config_path, overrides(target, LoginArgs::default()))?;
            let path = output.unwrap_or_else(|| config.scan_report_path.clone());
            scan::execute(&config, &path)
        }
        Commands::Checks {
            backend,
            login,
            project_dir,
            no_typecheck,
            no_build,
            no_endpoints,
        } => {
            let target = TargetArgs {
                backend,
                ..TargetArgs::default()
            };
            let mut config = load_config(config_path, overrides(target, login))?;
            if let Some(dir) = project_dir {
                config.checks.project_dir = dir;
            }
            let selection = CheckSelection {
                typecheck: !no_typecheck,
                build: !no_build,
                endpoints: !no_endpoints,
            };
            checks::execute(&config, selection)
        }
        Commands::Routes { registry } => {
            let target = TargetArgs {
                registry,
                ..TargetArgs::default()
            };
            let config = load_config(config_path, overrides(target, LoginArgs::default()))?;
            routes::execute(&config)?;
            Ok(Verdict::Passed)
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell, &mut io::stdout());
            Ok(Verdict::Passed)
        }
    }
}

fn overrides(target: TargetArgs, login: LoginArgs) -> Overrides {
    Overrides {
        backend_url: target.backend,
        frontend_url: target.frontend,
        email: login.email,
        password: login.password,
        registry: target.registry,
    }
}

fn load_config(path: Option<&Path>, overrides: Overrides) -> Result<ShuttleConfig> {
    let mut config = ShuttleConfig::load(path)?;
    config.apply(overrides);
    Ok(config)
}
