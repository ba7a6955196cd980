//! The bundler toolchain seam.
//!
//! The pipeline is target-agnostic and toolchain-agnostic: it hands a
//! [`BundleRequest`] to a [`Toolchain`] and acts only on success or
//! failure. The production implementation spawns an esbuild-compatible
//! bundler executable; tests substitute in-process stubs.

use crate::error::{PipelineError, Result};
use crate::job::BundleRequest;
use async_trait::async_trait;
use tokio::process::Command;

/// What a successful bundling invocation reports back.
#[derive(Debug, Clone)]
pub struct BundleReport {
    /// Size of the emitted artifact in bytes.
    pub size: u64,
}

/// One bundling invocation against the shared toolchain.
#[async_trait]
pub trait Toolchain: Send + Sync {
    /// Compile `request.entry` into `request.outfile`.
    ///
    /// Implementations must either produce the artifact (with the banner,
    /// when set, as its first bytes) or return an error carrying the
    /// toolchain's own failure message.
    async fn bundle(&self, request: &BundleRequest) -> Result<BundleReport>;
}

/// Toolchain backed by an external esbuild-compatible bundler process.
#[derive(Debug, Clone)]
pub struct ProcessToolchain {
    program: String,
}

impl ProcessToolchain {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the bundler's argument list for one request.
    ///
    /// The flag set follows the esbuild CLI: the entry is positional and
    /// everything else is a `--flag` or `--flag=value` pair.
    pub fn command_args(request: &BundleRequest) -> Vec<String> {
        let mut args = vec![
            request.entry.display().to_string(),
            "--bundle".to_string(),
            format!("--outfile={}", request.outfile.display()),
            format!("--platform={}", request.platform),
            format!("--format={}", request.format),
        ];
        if let Some(target) = &request.target {
            args.push(format!("--target={target}"));
        }
        if request.sourcemap {
            args.push("--sourcemap".to_string());
        }
        if request.external_dependencies {
            args.push("--packages=external".to_string());
        }
        if let Some(banner) = &request.banner {
            args.push(format!("--banner:js={banner}"));
        }
        args.push(format!("--log-level={}", request.log_level));
        args
    }
}

#[async_trait]
impl Toolchain for ProcessToolchain {
    async fn bundle(&self, request: &BundleRequest) -> Result<BundleReport> {
        let args = Self::command_args(request);
        tracing::debug!(program = %self.program, ?args, "invoking bundler");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .await
            .map_err(|source| PipelineError::Launch {
                program: self.program.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(PipelineError::Toolchain {
                job: request.entry.display().to_string(),
                message: stderr.trim_end().to_string(),
            });
        }

        // The bundler reports per-job lines on stderr even on success;
        // keep them visible to the operator.
        if !stderr.is_empty() {
            eprint!("{stderr}");
        }

        let size = std::fs::metadata(&request.outfile)?.len();
        Ok(BundleReport { size })
    }
}
