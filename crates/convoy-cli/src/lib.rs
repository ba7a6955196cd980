//! convoy CLI - sequential build orchestrator for bundled deployables.
//!
//! Drives an esbuild-compatible bundler over the job set declared in
//! `convoy.toml`, one job at a time, then propagates auxiliary assets
//! into the output tree.
//!
//! Modules:
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - command implementations (`build`, `check`)
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - terminal status lines, spinner, and summary formatting

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;
