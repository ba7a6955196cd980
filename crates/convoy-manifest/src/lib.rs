//! Manifest model for the convoy build orchestrator.
//!
//! A convoy manifest declares an ordered set of build jobs (one bundled
//! artifact each), the configuration shared between them, and the auxiliary
//! assets propagated into the output tree after the build. The pipeline
//! consumes the manifest as plain data; it never interprets what a target
//! semantically is.

pub mod error;
pub mod loading;
pub mod manifest;
pub mod validation;

pub use error::{ManifestError, Result};
pub use loading::DEFAULT_MANIFEST;
pub use manifest::{
    AssetSpec, BuildJob, Manifest, ModuleFormat, Platform, SharedOptions, ToolchainSettings,
};
