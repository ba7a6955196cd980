//! Logging setup on the tracing ecosystem.
//!
//! Verbosity tiers: `--verbose` enables debug for the convoy crates,
//! `--quiet` drops to errors only, and otherwise `RUST_LOG` or an info
//! default applies.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber. Call once, before any
/// logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("convoy_cli=debug,convoy_pipeline=debug,convoy_manifest=debug")
    } else if quiet {
        EnvFilter::new("convoy_cli=error,convoy_pipeline=error,convoy_manifest=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("convoy_cli=info,convoy_pipeline=info,convoy_manifest=info")
        })
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
