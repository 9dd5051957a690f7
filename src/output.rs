//! Console messages for the person at the terminal
//!
//! Diagnostic logging goes through `log`/`env_logger` and carries
//! timestamps and module paths; these helpers print the short messages a
//! command reports about its own outcome. Messages go to stderr, set off
//! by blank lines, so redirected table output stays clean.

use std::fmt::Display;

use owo_colors::OwoColorize;

/// Print a warning in yellow.
pub fn warn(message: impl Display) {
    eprintln!("\n{}\n", message.yellow());
}

/// Print an error in red.
pub fn error(message: impl Display) {
    eprintln!("\n{}\n", message.red());
}
