//! Glyph-prefixed status lines on stderr.

use owo_colors::OwoColorize;

/// Print a success line, e.g. a completed job or a finished run.
pub fn success(message: &str) {
    eprintln!("{} {}", "✓".green().bold(), message);
}

/// Print an informational phase line.
pub fn info(message: &str) {
    eprintln!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning line. Used for degraded asset sync outcomes, which
/// never fail the run.
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message.yellow());
}

/// Print an error line.
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message.red());
}
