//! Diagnostic logging setup

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding an explicit filter, e.g. `shuttle=debug`
pub const LOG_ENV: &str = "SHUTTLE_LOG";

/// Filter used when `SHUTTLE_LOG` is unset
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "shuttle=debug",
        _ => "trace",
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Console progress goes to stdout, so logs never interleave with it when
/// stdout is redirected. Calling this twice is harmless.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
