//! The pipeline runner.
//!
//! Jobs run strictly one at a time, in declared order; every job funnels
//! through the one shared toolchain, so sequential execution keeps the
//! log interleaving-free and makes the first failure unambiguous. The
//! first fatal error stops the run — remaining jobs are not attempted and
//! artifacts already written stay on disk. Asset sync runs only after
//! every job has succeeded, and can only degrade the run, never fail it.

use crate::assets::{self, Warning};
use crate::error::{PipelineError, Result};
use crate::job::BundleRequest;
use crate::toolchain::Toolchain;
use convoy_manifest::{AssetSpec, BuildJob, Manifest, SharedOptions, ToolchainSettings};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// One job's successful outcome.
#[derive(Debug, Clone)]
pub struct ArtifactReport {
    pub name: String,
    pub output: PathBuf,
    pub size: u64,
    pub duration: Duration,
}

/// The outcome of a completed run: every job succeeded; asset sync may
/// have degraded to warnings.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub artifacts: Vec<ArtifactReport>,
    pub warnings: Vec<Warning>,
}

/// Sequential build pipeline over an explicit job set.
///
/// The job list is plain data passed in by the caller — the runner knows
/// nothing about what a "server" or "worker" artifact is, and synthetic
/// job sets need no global state.
pub struct Pipeline {
    shared: SharedOptions,
    settings: ToolchainSettings,
    jobs: Vec<BuildJob>,
    assets: Vec<AssetSpec>,
    toolchain: Arc<dyn Toolchain>,
    cwd: PathBuf,
}

impl Pipeline {
    pub fn new(
        shared: SharedOptions,
        settings: ToolchainSettings,
        jobs: Vec<BuildJob>,
        assets: Vec<AssetSpec>,
        toolchain: Arc<dyn Toolchain>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            shared,
            settings,
            jobs,
            assets,
            toolchain,
            cwd: cwd.into(),
        }
    }

    /// Build a pipeline from a loaded manifest.
    pub fn from_manifest(
        manifest: Manifest,
        toolchain: Arc<dyn Toolchain>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self::new(
            manifest.shared,
            manifest.toolchain,
            manifest.jobs,
            manifest.assets,
            toolchain,
            cwd,
        )
    }

    pub fn jobs(&self) -> &[BuildJob] {
        &self.jobs
    }

    pub fn assets(&self) -> &[AssetSpec] {
        &self.assets
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Run the whole pipeline: every job in declared order, then asset
    /// sync. Stops at the first fatal job failure.
    pub async fn run(&self) -> Result<RunSummary> {
        let mut artifacts = Vec::with_capacity(self.jobs.len());

        for job in &self.jobs {
            artifacts.push(self.run_job(job).await?);
        }

        let warnings = self.sync_assets();
        Ok(RunSummary { artifacts, warnings })
    }

    /// Execute one build job: validate the entry, prepare the output
    /// directory, and await the toolchain.
    pub async fn run_job(&self, job: &BuildJob) -> Result<ArtifactReport> {
        let request = BundleRequest::merge(job, &self.shared, &self.settings, &self.cwd);

        if !request.entry.is_file() {
            return Err(PipelineError::EntryNotFound(request.entry));
        }

        match request.outfile.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent)?;
            }
            Some(_) => {}
            None => return Err(PipelineError::OutputNotWritable(request.outfile)),
        }

        tracing::info!(
            job = %job.display_name(),
            entry = %request.entry.display(),
            outfile = %request.outfile.display(),
            "building"
        );

        let started = Instant::now();
        let report = self.toolchain.bundle(&request).await?;

        Ok(ArtifactReport {
            name: job.display_name(),
            output: request.outfile,
            size: report.size,
            duration: started.elapsed(),
        })
    }

    /// Copy auxiliary assets into the output tree. Only ever degrades;
    /// see [`assets::sync`].
    pub fn sync_assets(&self) -> Vec<Warning> {
        assets::sync(&self.assets, &self.cwd)
    }
}
