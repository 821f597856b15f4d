use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "
      __        __  __  __
  ___/ /  __ __/ /_/ /_/ /__
 (_-</ _ \\/ // / __/ __/ / -_)
/___/_//_/\\_,_/\\__/\\__/_/\\__/

{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "shuttle")]
#[command(about = "Frontend route and backend API integration verification", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Config file (default: ./shuttle.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// More diagnostic logging on stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the target application lives
#[derive(Args, Debug, Default)]
pub struct TargetArgs {
    /// Backend base URL
    #[arg(long)]
    pub backend: Option<String>,

    /// Frontend base URL
    #[arg(long)]
    pub frontend: Option<String>,

    /// Route registry file (TOML)
    #[arg(long)]
    pub registry: Option<PathBuf>,
}

/// Test account used to log in
#[derive(Args, Debug, Default)]
pub struct LoginArgs {
    /// Login email
    #[arg(long)]
    pub email: Option<String>,

    /// Login password
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Verify every route loads and every API it depends on answers
    Run {
        #[command(flatten)]
        target: TargetArgs,

        #[command(flatten)]
        login: LoginArgs,

        /// Result file (overwritten)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Scan route pages for client-side error signatures (no login)
    Scan {
        #[command(flatten)]
        target: TargetArgs,

        /// Result file (overwritten)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the type-check, build and backend endpoint checks
    Checks {
        /// Backend base URL
        #[arg(long)]
        backend: Option<String>,

        #[command(flatten)]
        login: LoginArgs,

        /// Frontend project directory
        #[arg(long)]
        project_dir: Option<PathBuf>,

        /// Skip the type-check
        #[arg(long)]
        no_typecheck: bool,

        /// Skip the production build
        #[arg(long)]
        no_build: bool,

        /// Skip the backend endpoint check
        #[arg(long)]
        no_endpoints: bool,
    },

    /// List the route registry
    Routes {
        /// Route registry file (TOML)
        #[arg(long)]
        registry: Option<PathBuf>,
    },

    /// Generate a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
