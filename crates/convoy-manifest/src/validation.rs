//! Schema-level manifest validation.
//!
//! These checks need no filesystem access; entry-point existence is a
//! build-time concern and is enforced by the pipeline, per job, so that a
//! missing entry fails the run at the job that declared it.

use crate::error::{ManifestError, Result};
use crate::manifest::Manifest;
use std::collections::HashSet;

impl Manifest {
    /// Validate the manifest before any job runs.
    pub fn validate(&self) -> Result<()> {
        if self.jobs.is_empty() {
            return Err(ManifestError::NoJobs);
        }

        let mut outputs = HashSet::new();
        for job in &self.jobs {
            if job.entry.as_os_str().is_empty() {
                return Err(ManifestError::InvalidValue {
                    field: "entry".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
            if job.output.as_os_str().is_empty() {
                return Err(ManifestError::InvalidValue {
                    field: "output".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
            if !outputs.insert(&job.output) {
                return Err(ManifestError::DuplicateOutput(job.output.clone()));
            }
            if let Some(banner) = &job.banner {
                if banner.contains('\0') {
                    return Err(ManifestError::InvalidValue {
                        field: "banner".to_string(),
                        reason: "contains a NUL byte".to_string(),
                    });
                }
            }
        }

        if self.toolchain.program.trim().is_empty() {
            return Err(ManifestError::InvalidValue {
                field: "toolchain.program".to_string(),
                reason: "must name a bundler executable".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{AssetSpec, BuildJob};
    use std::path::PathBuf;

    fn job(entry: &str, output: &str) -> BuildJob {
        BuildJob {
            name: None,
            entry: PathBuf::from(entry),
            output: PathBuf::from(output),
            banner: None,
        }
    }

    #[test]
    fn empty_job_list_is_rejected() {
        let manifest = Manifest::default();
        assert!(matches!(
            manifest.validate().unwrap_err(),
            ManifestError::NoJobs
        ));
    }

    #[test]
    fn accepts_a_plain_manifest() {
        let manifest = Manifest {
            jobs: vec![
                job("src/server/index.ts", "dist/server/index.js"),
                job("src/worker/index.ts", "dist/worker/index.js"),
            ],
            assets: vec![AssetSpec {
                source: PathBuf::from("src/schema.graphql"),
                dest: PathBuf::from("dist/schema.graphql"),
            }],
            ..Manifest::default()
        };
        manifest.validate().unwrap();
    }

    #[test]
    fn colliding_outputs_are_rejected() {
        let manifest = Manifest {
            jobs: vec![
                job("src/a.ts", "dist/index.js"),
                job("src/b.ts", "dist/index.js"),
            ],
            ..Manifest::default()
        };
        assert!(matches!(
            manifest.validate().unwrap_err(),
            ManifestError::DuplicateOutput(_)
        ));
    }

    #[test]
    fn nul_byte_in_banner_is_rejected() {
        let mut bad = job("src/cli.ts", "dist/cli.js");
        bad.banner = Some("#!/usr/bin/env node\0".to_string());
        let manifest = Manifest {
            jobs: vec![bad],
            ..Manifest::default()
        };
        assert!(matches!(
            manifest.validate().unwrap_err(),
            ManifestError::InvalidValue { field, .. } if field == "banner"
        ));
    }

    #[test]
    fn blank_toolchain_program_is_rejected() {
        let mut manifest = Manifest {
            jobs: vec![job("src/a.ts", "dist/a.js")],
            ..Manifest::default()
        };
        manifest.toolchain.program = "  ".to_string();
        assert!(matches!(
            manifest.validate().unwrap_err(),
            ManifestError::InvalidValue { field, .. } if field == "toolchain.program"
        ));
    }
}
