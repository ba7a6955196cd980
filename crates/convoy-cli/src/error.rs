//! CLI error types.
//!
//! The hierarchy mirrors the crates underneath: manifest errors from
//! loading/validation, pipeline errors from the build itself, plus the
//! CLI's own argument problems. `main` converts the final error into a
//! miette report for operator-facing rendering.

use convoy_manifest::ManifestError;
use convoy_pipeline::PipelineError;
use miette::Report;
use thiserror::Error;

pub type Result<T, E = CliError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Manifest loading or validation failed.
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// A build job failed; the pipeline stopped here.
    #[error("Build error: {0}")]
    Build(#[from] PipelineError),

    /// Invalid command-line arguments or working directory.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convert a CLI error to a miette report. The Display messages already
/// carry their hints; the report only adds rendering.
pub fn cli_error_to_miette(err: CliError) -> Report {
    miette::miette!("{}", err)
}
