//! Check command implementation.
//!
//! Validates the manifest and verifies every entry point exists, without
//! invoking the toolchain. Missing asset sources are reported as
//! warnings, matching their severity at build time.

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;
use convoy_pipeline::{resolve_path, PipelineError};

/// Execute the check command.
///
/// # Errors
///
/// Returns an error for an invalid manifest or any missing entry point.
pub async fn execute(args: CheckArgs) -> Result<()> {
    let cwd = utils::resolve_cwd(args.cwd.as_deref())?;
    let (manifest, manifest_file) = utils::load_manifest(args.manifest.as_deref(), &cwd)?;

    ui::info(&format!("Checking {}", manifest_file.display()));

    let mut first_missing = None;
    for job in &manifest.jobs {
        let entry = resolve_path(&job.entry, &cwd);
        if entry.is_file() {
            ui::success(&format!("{}: {}", job.display_name(), job.entry.display()));
        } else {
            ui::error(&format!(
                "{}: entry not found: {}",
                job.display_name(),
                entry.display()
            ));
            first_missing.get_or_insert(entry);
        }
    }

    for asset in &manifest.assets {
        let source = resolve_path(&asset.source, &cwd);
        if !source.is_file() {
            ui::warning(&format!(
                "asset source not found: {} (will warn at build time)",
                source.display()
            ));
        }
    }

    if let Some(entry) = first_missing {
        return Err(PipelineError::EntryNotFound(entry).into());
    }

    ui::success(&format!(
        "Manifest OK: {} jobs, {} assets",
        manifest.jobs.len(),
        manifest.assets.len()
    ));
    Ok(())
}
