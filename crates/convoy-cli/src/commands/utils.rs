//! Shared helpers for command implementations.

use crate::error::{CliError, Result};
use convoy_manifest::{Manifest, DEFAULT_MANIFEST};
use convoy_pipeline::resolve_path;
use std::path::{Path, PathBuf};

/// Resolve the working directory: an explicit `--cwd` wins, otherwise
/// the process working directory.
pub fn resolve_cwd(cwd: Option<&Path>) -> Result<PathBuf> {
    match cwd {
        Some(path) => path.canonicalize().map_err(|e| {
            CliError::InvalidArgument(format!("cannot resolve --cwd {}: {e}", path.display()))
        }),
        None => Ok(std::env::current_dir()?),
    }
}

/// Resolve the manifest path: an explicit `--manifest` (relative to the
/// working directory) or `convoy.toml` inside it.
pub fn manifest_path(manifest: Option<&Path>, cwd: &Path) -> PathBuf {
    match manifest {
        Some(path) => resolve_path(path, cwd),
        None => cwd.join(DEFAULT_MANIFEST),
    }
}

/// Load and validate the manifest for a command invocation.
pub fn load_manifest(manifest: Option<&Path>, cwd: &Path) -> Result<(Manifest, PathBuf)> {
    let path = manifest_path(manifest, cwd);
    tracing::debug!(manifest = %path.display(), cwd = %cwd.display(), "loading manifest");
    let manifest = Manifest::load(&path)?;
    manifest.validate()?;
    Ok((manifest, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_manifest_path_is_resolved_against_cwd() {
        let path = manifest_path(Some(Path::new("deploy/convoy.toml")), Path::new("/work"));
        assert_eq!(path, PathBuf::from("/work/deploy/convoy.toml"));
    }

    #[test]
    fn default_manifest_is_convoy_toml_in_cwd() {
        let path = manifest_path(None, Path::new("/work"));
        assert_eq!(path, PathBuf::from("/work/convoy.toml"));
    }

    #[test]
    fn load_manifest_surfaces_validation_failures() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("convoy.toml"), "[shared]\n").unwrap();

        let err = load_manifest(None, temp.path()).unwrap_err();
        assert!(err.to_string().contains("no build jobs"));
    }

    #[test]
    fn nonexistent_cwd_is_an_invalid_argument() {
        let err = resolve_cwd(Some(Path::new("/no/such/dir/anywhere"))).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }
}
