//! Per-invocation bundle configuration.
//!
//! A [`BundleRequest`] is the merge of the manifest's shared options with
//! one job's own fields, with all paths resolved against the working
//! directory. It is the complete input handed to the toolchain — the
//! toolchain never sees the manifest itself.

use convoy_manifest::{BuildJob, ModuleFormat, Platform, SharedOptions, ToolchainSettings};
use std::path::{Path, PathBuf};

/// Resolve a path against a working directory. Absolute paths pass
/// through unchanged.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Everything the toolchain needs for one bundling invocation.
#[derive(Debug, Clone)]
pub struct BundleRequest {
    /// Resolved root source module.
    pub entry: PathBuf,

    /// Resolved artifact path.
    pub outfile: PathBuf,

    pub platform: Platform,
    pub format: ModuleFormat,

    /// Minimum supported runtime version, when pinned.
    pub target: Option<String>,

    /// Emit a source map beside the artifact.
    pub sourcemap: bool,

    /// Leave third-party packages out of the artifact; the deployment
    /// environment resolves them at run time.
    pub external_dependencies: bool,

    /// Literal text the toolchain emits as the first bytes of the
    /// artifact.
    pub banner: Option<String>,

    /// Verbosity passed through to the toolchain's own reporting.
    pub log_level: String,
}

impl BundleRequest {
    /// Merge shared options with one job's overrides.
    pub fn merge(
        job: &BuildJob,
        shared: &SharedOptions,
        settings: &ToolchainSettings,
        cwd: &Path,
    ) -> Self {
        Self {
            entry: resolve_path(&job.entry, cwd),
            outfile: resolve_path(&job.output, cwd),
            platform: shared.platform,
            format: shared.format,
            target: shared.target.clone(),
            sourcemap: shared.sourcemap,
            external_dependencies: shared.external_dependencies,
            banner: job.banner.clone(),
            log_level: settings.log_level.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> BuildJob {
        BuildJob {
            name: Some("server".to_string()),
            entry: PathBuf::from("src/server/index.ts"),
            output: PathBuf::from("dist/server/index.js"),
            banner: None,
        }
    }

    #[test]
    fn merge_resolves_relative_paths_against_cwd() {
        let request = BundleRequest::merge(
            &sample_job(),
            &SharedOptions::default(),
            &ToolchainSettings::default(),
            Path::new("/work/project"),
        );
        assert_eq!(request.entry, PathBuf::from("/work/project/src/server/index.ts"));
        assert_eq!(
            request.outfile,
            PathBuf::from("/work/project/dist/server/index.js")
        );
    }

    #[test]
    fn merge_keeps_absolute_paths() {
        let mut job = sample_job();
        job.entry = PathBuf::from("/elsewhere/entry.ts");
        let request = BundleRequest::merge(
            &job,
            &SharedOptions::default(),
            &ToolchainSettings::default(),
            Path::new("/work/project"),
        );
        assert_eq!(request.entry, PathBuf::from("/elsewhere/entry.ts"));
    }

    #[test]
    fn merge_carries_shared_options_and_job_banner() {
        let mut job = sample_job();
        job.banner = Some("#!/usr/bin/env node".to_string());
        let shared = SharedOptions {
            target: Some("node18".to_string()),
            ..SharedOptions::default()
        };
        let request = BundleRequest::merge(
            &job,
            &shared,
            &ToolchainSettings::default(),
            Path::new("/work"),
        );
        assert_eq!(request.platform, Platform::Node);
        assert_eq!(request.format, ModuleFormat::Esm);
        assert_eq!(request.target.as_deref(), Some("node18"));
        assert!(request.sourcemap);
        assert!(request.external_dependencies);
        assert_eq!(request.banner.as_deref(), Some("#!/usr/bin/env node"));
        assert_eq!(request.log_level, "info");
    }
}
