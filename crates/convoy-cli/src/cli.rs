//! Command-line interface definition.
//!
//! - `convoy build` - run the whole pipeline: every job, then asset sync
//! - `convoy check` - validate the manifest and entry points, no build

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// convoy - a sequential build orchestrator
#[derive(Parser, Debug)]
#[command(
    name = "convoy",
    version,
    about = "Sequential build orchestrator for bundled deployables",
    long_about = "Convoy drives a shared bundling toolchain over a declared set of build\n\
                  jobs, one at a time and in declared order, producing one deployable\n\
                  artifact per job and finishing by copying auxiliary assets into the\n\
                  output tree."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every build job in declared order, then sync assets
    Build(BuildArgs),

    /// Validate the manifest and entry points without building
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Path to the build manifest (defaults to convoy.toml in the
    /// working directory)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Working directory paths in the manifest are resolved against
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Override the bundler executable declared in the manifest
    #[arg(long)]
    pub bundler: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Path to the build manifest (defaults to convoy.toml in the
    /// working directory)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Working directory paths in the manifest are resolved against
    #[arg(long)]
    pub cwd: Option<PathBuf>,
}
