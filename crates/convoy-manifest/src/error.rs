//! Error types for manifest loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ManifestError>;

#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file does not exist at the expected location.
    #[error("manifest not found: {}\n\nHint: create a convoy.toml or pass --manifest <path>", .0.display())]
    NotFound(PathBuf),

    /// The manifest exists but could not be parsed or merged.
    #[error("failed to read manifest: {0}")]
    Parse(#[from] figment::Error),

    /// The manifest declares no build jobs at all.
    #[error("no build jobs declared\n\nHint: add at least one [[job]] table to the manifest")]
    NoJobs,

    /// Two jobs would write the same artifact.
    #[error("duplicate output path: {}\n\nHint: every job must write to a distinct artifact", .0.display())]
    DuplicateOutput(PathBuf),

    /// A field holds a value that cannot be used.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_path_and_hint() {
        let err = ManifestError::NotFound(PathBuf::from("missing/convoy.toml"));
        let msg = err.to_string();
        assert!(msg.contains("missing/convoy.toml"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn duplicate_output_names_path() {
        let err = ManifestError::DuplicateOutput(PathBuf::from("dist/server/index.js"));
        assert!(err.to_string().contains("dist/server/index.js"));
    }

    #[test]
    fn invalid_value_names_field() {
        let err = ManifestError::InvalidValue {
            field: "banner".to_string(),
            reason: "contains a NUL byte".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("banner"));
        assert!(msg.contains("NUL"));
    }
}
