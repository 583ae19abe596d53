//! Terminal output for the CLI layer.
//!
//! Results go to stdout unstyled so they stay pipeable; error and status
//! messages go to stderr.

use console::style;

/// Print an error message in red to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a status note with a yellow arrow to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Print a plain line to stdout.
pub fn write(message: &str) {
    println!("{}", message);
}
