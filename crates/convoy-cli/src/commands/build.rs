//! Build command implementation.
//!
//! Runs the whole pipeline: loads and validates the manifest, executes
//! every build job in declared order (stopping at the first failure),
//! then syncs auxiliary assets — whose failures only warn — and prints
//! the run summary.

use crate::cli::BuildArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use convoy_pipeline::{Pipeline, ProcessToolchain};
use std::sync::Arc;
use std::time::Instant;

/// Execute the build command.
///
/// # Errors
///
/// Returns an error when the manifest cannot be loaded or validated, or
/// when any build job fails. Asset sync failures are reported as
/// warnings and do not produce an error.
pub async fn execute(args: BuildArgs) -> Result<()> {
    let start_time = Instant::now();

    let cwd = utils::resolve_cwd(args.cwd.as_deref())?;
    let (mut manifest, manifest_file) = utils::load_manifest(args.manifest.as_deref(), &cwd)?;

    if let Some(bundler) = args.bundler {
        manifest.toolchain.program = bundler;
    }

    ui::info(&format!(
        "convoy build — {} jobs, manifest {}",
        manifest.jobs.len(),
        manifest_file.display()
    ));
    ui::info(&format!(
        "Platform: {}  Format: {}  Toolchain: {}",
        manifest.shared.platform, manifest.shared.format, manifest.toolchain.program
    ));
    if let Some(target) = &manifest.shared.target {
        ui::info(&format!("Runtime target: {target}"));
    }

    let toolchain = Arc::new(ProcessToolchain::new(&manifest.toolchain.program));
    let pipeline = Pipeline::from_manifest(manifest, toolchain, &cwd);

    let mut reports = Vec::with_capacity(pipeline.jobs().len());
    for job in pipeline.jobs() {
        let name = job.display_name();
        let spinner = ui::Spinner::new(&format!("Building {name}"));
        match pipeline.run_job(job).await {
            Ok(report) => {
                spinner.finish(&format!(
                    "{name} → {} ({}, {})",
                    report.output.display(),
                    ui::format_size(report.size),
                    ui::format_duration(report.duration)
                ));
                reports.push(report);
            }
            Err(err) => {
                spinner.fail(&format!("{name} failed"));
                return Err(err.into());
            }
        }
    }

    if !pipeline.assets().is_empty() {
        ui::info(&format!("Syncing {} assets", pipeline.assets().len()));
        for warning in pipeline.sync_assets() {
            ui::warning(&warning.message);
        }
    }

    ui::print_run_summary(&reports);
    ui::success(&format!(
        "Build completed in {}",
        ui::format_duration(start_time.elapsed())
    ));

    Ok(())
}
