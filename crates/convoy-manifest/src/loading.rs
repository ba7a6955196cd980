//! Manifest loading.
//!
//! Sources are layered with figment: the TOML manifest file first, then
//! `CONVOY_`-prefixed environment variables. Nested keys use a double
//! underscore, e.g. `CONVOY_SHARED__PLATFORM=browser` or
//! `CONVOY_TOOLCHAIN__PROGRAM=/opt/esbuild/bin/esbuild`.

use crate::error::{ManifestError, Result};
use crate::manifest::Manifest;
use figment::{
    providers::{Env, Format as _, Toml},
    Figment,
};
use std::path::Path;

/// File name looked up in the working directory when no explicit
/// manifest path is given.
pub const DEFAULT_MANIFEST: &str = "convoy.toml";

impl Manifest {
    /// Load a manifest from an explicit path, applying environment
    /// overrides on top.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ManifestError::NotFound(path.to_path_buf()));
        }

        tracing::debug!(path = %path.display(), "loading manifest");

        let manifest: Manifest = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("CONVOY_").split("__"))
            .extract()?;

        Ok(manifest)
    }

    /// Load `convoy.toml` from the given directory.
    pub fn discover(dir: &Path) -> Result<Self> {
        Self::load(&dir.join(DEFAULT_MANIFEST))
    }
}
