//! tauri-bump - Bump the release version of a Tauri project and build it.
//!
//! # Overview
//!
//! tauri-bump validates an `X.Y.Z` version, writes it into
//! `src-tauri/tauri.conf.json`, `src-tauri/Cargo.toml` and `package.json`
//! (in that order), then runs the project's build command.

pub mod build;
pub mod bump;
pub mod error;
pub mod manifest;
pub mod version;

// Re-export commonly used types
pub use build::BuildCommand;
pub use bump::{BumpConfig, BumpOutcome, run_bump};
pub use error::BumpError;
pub use manifest::{Manifest, ManifestKind};
pub use version::ReleaseVersion;
