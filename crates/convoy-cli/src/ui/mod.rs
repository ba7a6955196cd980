//! Terminal output: status lines, the in-flight job spinner, and the
//! run summary.
//!
//! All human-facing output goes to stderr; artifacts own stdout-adjacent
//! concerns. Degrades gracefully when no terminal is attached.

mod format;
mod messages;
mod spinner;

pub use format::{format_duration, format_size, print_run_summary};
pub use messages::{error, info, success, warning};
pub use spinner::Spinner;

/// Check whether color output should be enabled. `NO_COLOR` wins over
/// `FORCE_COLOR`; otherwise terminal capability decides.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    console::user_attended_stderr()
}

/// Initialize color support. owo-colors already respects `NO_COLOR` and
/// terminal capabilities; this exists for explicit early validation.
pub fn init_colors() {
    let _ = should_use_color();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_wins_over_force_color() {
        std::env::set_var("NO_COLOR", "1");
        std::env::set_var("FORCE_COLOR", "1");
        assert!(!should_use_color());
        std::env::remove_var("NO_COLOR");
        std::env::remove_var("FORCE_COLOR");
    }

    #[test]
    fn init_colors_does_not_panic() {
        init_colors();
    }
}
