//! Pipeline error types.
//!
//! Build failures are fatal: the runner stops at the first one and the
//! underlying toolchain message is carried through verbatim. Asset sync
//! failures never appear here — they are degraded to [`Warning`] values
//! in the run summary.
//!
//! [`Warning`]: crate::assets::Warning

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = PipelineError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A job's entry point does not exist. Fatal for the whole run.
    #[error("entry point not found: {}\n\nHint: check the job's 'entry' field in the manifest", .0.display())]
    EntryNotFound(PathBuf),

    /// An output path that cannot receive an artifact.
    #[error("output path is not writable: {}", .0.display())]
    OutputNotWritable(PathBuf),

    /// The bundler executable could not be started at all.
    #[error("failed to launch bundler '{program}': {source}\n\nHint: install it or set [toolchain] program in the manifest")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The bundler ran and reported a build failure. The message is the
    /// toolchain's own output, unmodified.
    #[error("bundling '{job}' failed:\n{message}")]
    Toolchain { job: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
