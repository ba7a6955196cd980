//! Manifest data model: the declared set of build jobs and the options
//! shared between them.
//!
//! A manifest is one TOML document. The `[shared]` table applies to every
//! job; each `[[job]]` table contributes one build target and may only vary
//! its entry point, output path, and banner. Adding a target is a pure data
//! addition — nothing in the pipeline knows what kind of artifact a job
//! produces.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The complete build description consumed by one pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Options applied to every job.
    #[serde(default)]
    pub shared: SharedOptions,

    /// Bundler invocation settings.
    #[serde(default)]
    pub toolchain: ToolchainSettings,

    /// Build jobs, in declared order.
    #[serde(default, rename = "job")]
    pub jobs: Vec<BuildJob>,

    /// Auxiliary files propagated into the output tree after all jobs
    /// complete.
    #[serde(default, rename = "asset")]
    pub assets: Vec<AssetSpec>,
}

/// One build target: a root source module compiled into one artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildJob {
    /// Display name used in logs and the summary table. Defaults to the
    /// entry file stem.
    #[serde(default)]
    pub name: Option<String>,

    /// Root source module of this target.
    pub entry: PathBuf,

    /// Where the compiled artifact is written.
    pub output: PathBuf,

    /// Literal text prepended to the artifact, e.g. `#!/usr/bin/env node`
    /// for directly executable entry points.
    #[serde(default)]
    pub banner: Option<String>,
}

impl BuildJob {
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        self.entry
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("bundle")
            .to_string()
    }
}

/// Configuration applied to every job. Immutable across a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharedOptions {
    /// Runtime platform the artifacts target.
    #[serde(default)]
    pub platform: Platform,

    /// Module format of the emitted artifacts.
    #[serde(default)]
    pub format: ModuleFormat,

    /// Minimum supported runtime version, e.g. `node18`.
    #[serde(default)]
    pub target: Option<String>,

    /// Emit a debug source map beside each artifact.
    #[serde(default = "default_true")]
    pub sourcemap: bool,

    /// When true, third-party packages are not inlined into artifacts;
    /// the deployment environment resolves them at run time.
    #[serde(default = "default_true")]
    pub external_dependencies: bool,
}

impl Default for SharedOptions {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            format: ModuleFormat::default(),
            target: None,
            sourcemap: true,
            external_dependencies: true,
        }
    }
}

/// How the bundler executable is invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainSettings {
    /// Bundler program name or path.
    #[serde(default = "default_program")]
    pub program: String,

    /// Log verbosity passed through to the bundler.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ToolchainSettings {
    fn default() -> Self {
        Self {
            program: default_program(),
            log_level: default_log_level(),
        }
    }
}

/// One auxiliary file copied into the output tree after the build jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSpec {
    /// File to copy.
    pub source: PathBuf,

    /// Destination under the output tree.
    pub dest: PathBuf,
}

/// Runtime platform identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Node,
    Browser,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Node => "node",
            Platform::Browser => "browser",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Module output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFormat {
    #[default]
    Esm,
    Cjs,
    Iife,
}

impl ModuleFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleFormat::Esm => "esm",
            ModuleFormat::Cjs => "cjs",
            ModuleFormat::Iife => "iife",
        }
    }
}

impl fmt::Display for ModuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_true() -> bool {
    true
}

fn default_program() -> String {
    "esbuild".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_manifest() {
        let manifest: Manifest = toml::from_str(
            r##"
            [shared]
            platform = "node"
            format = "esm"
            target = "node18"

            [toolchain]
            program = "esbuild"

            [[job]]
            name = "server"
            entry = "src/server/index.ts"
            output = "dist/server/index.js"

            [[job]]
            entry = "src/cli/main.ts"
            output = "dist/cli/main.js"
            banner = "#!/usr/bin/env node"

            [[asset]]
            source = "src/schema/schema.graphql"
            dest = "dist/schema/schema.graphql"
            "##,
        )
        .unwrap();

        assert_eq!(manifest.jobs.len(), 2);
        assert_eq!(manifest.assets.len(), 1);
        assert_eq!(manifest.shared.platform, Platform::Node);
        assert_eq!(manifest.shared.target.as_deref(), Some("node18"));
        assert_eq!(manifest.jobs[0].display_name(), "server");
        assert_eq!(
            manifest.jobs[1].banner.as_deref(),
            Some("#!/usr/bin/env node")
        );
    }

    #[test]
    fn shared_options_default_to_externalized_node_esm() {
        let manifest: Manifest = toml::from_str(
            r#"
            [[job]]
            entry = "src/index.ts"
            output = "dist/index.js"
            "#,
        )
        .unwrap();

        let shared = &manifest.shared;
        assert_eq!(shared.platform, Platform::Node);
        assert_eq!(shared.format, ModuleFormat::Esm);
        assert!(shared.sourcemap);
        assert!(shared.external_dependencies);
        assert!(shared.target.is_none());
        assert_eq!(manifest.toolchain.program, "esbuild");
        assert_eq!(manifest.toolchain.log_level, "info");
    }

    #[test]
    fn display_name_falls_back_to_entry_stem() {
        let job = BuildJob {
            name: None,
            entry: PathBuf::from("src/worker/consumer.ts"),
            output: PathBuf::from("dist/worker/consumer.js"),
            banner: None,
        };
        assert_eq!(job.display_name(), "consumer");
    }

    #[test]
    fn enums_render_as_bundler_flags() {
        assert_eq!(Platform::Browser.to_string(), "browser");
        assert_eq!(ModuleFormat::Cjs.to_string(), "cjs");
        assert_eq!(ModuleFormat::Iife.to_string(), "iife");
    }
}
