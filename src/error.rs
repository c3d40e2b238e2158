//! Error types for tauri-bump using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the version bump pipeline.
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Invalid version '{0}': expected X.Y.Z (three dot-separated integers)")]
    InvalidVersion(String),

    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to update {path}: {reason}")]
    ManifestUpdateFailed { path: PathBuf, reason: String },

    #[error("pattern not found in {path}")]
    PatternNotFound { path: PathBuf },

    #[error("Build tool '{0}' not found on PATH")]
    BuildToolNotFound(String),

    #[error("Failed to spawn build process: {0}")]
    BuildSpawnFailed(#[source] std::io::Error),

    #[error("Build failed with {}", code.map_or("unknown status (terminated by signal?)".to_string(), |c| format!("exit code {c}")))]
    BuildFailed { code: Option<i32> },
}
