//! Terminal color constants and utilities for CLI output.

use std::io::{self, Write};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const RED: &str = "\x1b[31m";

/// Flush stdout so progress lines show up before a child process writes.
#[inline]
pub fn flush_stdout() {
    io::stdout().flush().ok();
}
