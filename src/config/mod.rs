//! Configuration loaded from `shuttle.toml`
//!
//! Every field is optional. Values missing from the file fall back to the
//! defaults for a local development stack (backend on :8080, frontend on
//! :3002), and command-line flags override both.

mod defaults;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::auth::Credentials;
use crate::checks::{DiagnosticStyle, ProcessCheck};
use crate::probe::Method;
use crate::registry::RouteRegistry;

pub use defaults::DEFAULT_CONFIG_FILE;

/// A backend endpoint probed by the endpoint check
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointCheck {
    #[serde(default)]
    pub method: Method,
    pub path: String,
    #[serde(default)]
    pub label: String,
}

/// Settings for `shuttle checks`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChecksConfig {
    /// Frontend project directory the type-check and build run in
    pub project_dir: PathBuf,
    pub typecheck_command: Vec<String>,
    pub typecheck_timeout_secs: u64,
    pub build_command: Vec<String>,
    pub build_timeout_secs: u64,
    pub endpoints: Vec<EndpointCheck>,
    pub report_path: PathBuf,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            typecheck_command: defaults::typecheck_command(),
            typecheck_timeout_secs: defaults::TYPECHECK_TIMEOUT_SECS,
            build_command: defaults::build_command(),
            build_timeout_secs: defaults::BUILD_TIMEOUT_SECS,
            endpoints: defaults::endpoints(),
            report_path: PathBuf::from(defaults::CHECKS_REPORT_FILE),
        }
    }
}

impl ChecksConfig {
    pub fn typecheck(&self) -> ProcessCheck {
        ProcessCheck {
            name: "typescript".to_string(),
            command: self.typecheck_command.clone(),
            timeout: Duration::from_secs(self.typecheck_timeout_secs),
            diagnostics: DiagnosticStyle::AllLines,
        }
    }

    pub fn build(&self) -> ProcessCheck {
        ProcessCheck {
            name: "build".to_string(),
            command: self.build_command.clone(),
            timeout: Duration::from_secs(self.build_timeout_secs),
            diagnostics: DiagnosticStyle::BuildErrors,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShuttleConfig {
    pub backend_url: String,
    pub frontend_url: String,
    pub credentials: Credentials,
    /// Per-request timeout; the HTTP client's default applies when unset
    pub request_timeout_secs: Option<u64>,
    /// Result file of `shuttle run`, overwritten each run
    pub report_path: PathBuf,
    /// Result file of `shuttle scan`
    pub scan_report_path: PathBuf,
    /// Route registry file; the built-in table is used when unset
    pub registry: Option<PathBuf>,
    pub checks: ChecksConfig,
}

impl Default for ShuttleConfig {
    fn default() -> Self {
        Self {
            backend_url: defaults::BACKEND_URL.to_string(),
            frontend_url: defaults::FRONTEND_URL.to_string(),
            credentials: Credentials::default(),
            request_timeout_secs: None,
            report_path: PathBuf::from(defaults::RUN_REPORT_FILE),
            scan_report_path: PathBuf::from(defaults::SCAN_REPORT_FILE),
            registry: None,
            checks: ChecksConfig::default(),
        }
    }
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub backend_url: Option<String>,
    pub frontend_url: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub registry: Option<PathBuf>,
}

impl ShuttleConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse shuttle config")
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `shuttle.toml` in the
    /// current directory is used when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    debug!("no {DEFAULT_CONFIG_FILE}, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(url) = overrides.backend_url {
            self.backend_url = url;
        }
        if let Some(url) = overrides.frontend_url {
            self.frontend_url = url;
        }
        if let Some(email) = overrides.email {
            self.credentials.email = email;
        }
        if let Some(password) = overrides.password {
            self.credentials.password = password;
        }
        if let Some(registry) = overrides.registry {
            self.registry = Some(registry);
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// The configured registry file, or the built-in table
    pub fn load_registry(&self) -> Result<RouteRegistry> {
        match &self.registry {
            Some(path) => RouteRegistry::load(path)
                .with_context(|| format!("Failed to load route registry {}", path.display())),
            None => Ok(RouteRegistry::builtin()),
        }
    }
}
