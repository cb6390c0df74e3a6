//! Shell completion generation.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Generate shell completion script.
pub fn generate_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    generate(shell, cmd, "subsum", out);
}
