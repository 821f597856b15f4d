//! Shell completion script generation

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Write the completion script for `shell` to `out`
pub fn generate_completions(cmd: &mut Command, shell: Shell, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
