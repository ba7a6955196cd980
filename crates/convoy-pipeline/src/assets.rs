//! Asset sync: propagate non-compiled files into the output tree.
//!
//! Runs after every build job has succeeded. Failure policy differs
//! sharply from code jobs: a missing or unreadable asset produces a
//! [`Warning`] and the run still counts as a success — these files are
//! auxiliary, and their absence must not block a build whose primary
//! deliverables already exist.

use crate::job::resolve_path;
use convoy_manifest::AssetSpec;
use std::fmt;
use std::fs;
use std::path::Path;

/// A degraded, non-fatal outcome from the asset sync step.
#[derive(Debug, Clone)]
pub struct Warning {
    pub message: String,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Copy each asset into the output tree, creating intermediate
/// directories. Returns one warning per failed asset; never fails the
/// run.
pub fn sync(assets: &[AssetSpec], cwd: &Path) -> Vec<Warning> {
    let mut warnings = Vec::new();

    for asset in assets {
        let source = resolve_path(&asset.source, cwd);
        let dest = resolve_path(&asset.dest, cwd);

        match copy_asset(&source, &dest) {
            Ok(bytes) => {
                tracing::info!(
                    source = %source.display(),
                    dest = %dest.display(),
                    bytes,
                    "asset synced"
                );
            }
            Err(err) => {
                let warning = Warning {
                    message: format!(
                        "failed to sync asset {} -> {}: {err}",
                        source.display(),
                        dest.display()
                    ),
                };
                tracing::warn!("{warning}");
                warnings.push(warning);
            }
        }
    }

    warnings
}

fn copy_asset(source: &Path, dest: &Path) -> std::io::Result<u64> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, dest)
}
