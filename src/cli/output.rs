//! Shared CLI output helpers.
//!
//! Color scheme (console handles NO_COLOR and non-tty detection):
//! - Green: success
//! - Red: errors
//! - Cyan: hints
//! - Dimmed/bold: key-value detail lines

use console::style;
use std::fmt::Display;

/// Print a success message with checkmark (green).
///
/// Example: `✓ created container group web`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ usage error: ...`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ run: gantry create --help`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  image:  nginx:latest`
pub fn kv(label: &str, value: impl Display) {
    println!(
        "  {}  {}",
        style(label).dim(),
        style(value.to_string()).bold()
    );
}
