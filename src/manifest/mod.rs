//! Release manifests of a Tauri project and how each one carries its version.
//!
//! Three files are updated, always in this order:
//! `src-tauri/tauri.conf.json`, `src-tauri/Cargo.toml`, `package.json`.

pub mod json;
pub mod text;

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::BumpError;
use crate::version::ReleaseVersion;

/// The kind of manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    TauriConf,
    CargoToml,
    PackageJson,
}

/// Manifests in the order they are patched.
pub const UPDATE_ORDER: [ManifestKind; 3] = [
    ManifestKind::TauriConf,
    ManifestKind::CargoToml,
    ManifestKind::PackageJson,
];

impl ManifestKind {
    /// Location relative to the project root.
    pub fn relative_path(self) -> PathBuf {
        match self {
            ManifestKind::TauriConf => Path::new("src-tauri").join("tauri.conf.json"),
            ManifestKind::CargoToml => Path::new("src-tauri").join("Cargo.toml"),
            ManifestKind::PackageJson => PathBuf::from("package.json"),
        }
    }

    fn json_key_path(self) -> Option<&'static [&'static str]> {
        match self {
            ManifestKind::TauriConf => Some(&["package", "version"]),
            ManifestKind::PackageJson => Some(&["version"]),
            ManifestKind::CargoToml => None,
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestKind::TauriConf => write!(f, "tauri.conf.json"),
            ManifestKind::CargoToml => write!(f, "Cargo.toml"),
            ManifestKind::PackageJson => write!(f, "package.json"),
        }
    }
}

/// A located manifest file.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub path: PathBuf,
    pub kind: ManifestKind,
}

/// Resolve all manifests under `root`, in update order.
///
/// Fails with `BumpError::ManifestNotFound` on the first missing file.
pub fn locate_manifests(root: &Path) -> Result<Vec<Manifest>, BumpError> {
    UPDATE_ORDER
        .iter()
        .map(|&kind| {
            let path = root.join(kind.relative_path());
            if path.is_file() {
                Ok(Manifest { path, kind })
            } else {
                Err(BumpError::ManifestNotFound { path })
            }
        })
        .collect()
}

/// Read the version currently declared in a manifest.
pub fn read_current_version(manifest: &Manifest) -> Result<Option<String>, BumpError> {
    let content = read_file(&manifest.path)?;

    match manifest.kind.json_key_path() {
        Some(keys) => json::read_version(&manifest.path, &content, keys),
        None => Ok(text::current_version(&content).map(String::from)),
    }
}

/// Compute the patched content of a manifest without touching the disk.
pub fn render_update(
    manifest: &Manifest,
    content: &str,
    version: &ReleaseVersion,
) -> Result<String, BumpError> {
    if let Some(keys) = manifest.kind.json_key_path() {
        return json::set_version(&manifest.path, content, keys, version.as_str());
    }

    let replacement = text::replace_version(content, version.as_str()).ok_or_else(|| {
        BumpError::PatternNotFound {
            path: manifest.path.clone(),
        }
    })?;

    if replacement.occurrences > 1 {
        warn!(
            "{} has {} line-start version declarations; only the first is replaced",
            manifest.path.display(),
            replacement.occurrences
        );
    }

    if let Some(package_version) = text::package_version(content) {
        if package_version != replacement.previous {
            warn!(
                "{}: first version line holds {} but [package].version is {}",
                manifest.path.display(),
                replacement.previous,
                package_version
            );
        }
    }

    Ok(replacement.content)
}

/// Read a manifest and compute its patched content without writing it back.
pub fn plan_update(manifest: &Manifest, version: &ReleaseVersion) -> Result<String, BumpError> {
    let content = read_file(&manifest.path)?;
    render_update(manifest, &content, version)
}

/// Update a manifest on disk to the new version.
pub fn update_manifest(manifest: &Manifest, version: &ReleaseVersion) -> Result<(), BumpError> {
    let content = read_file(&manifest.path)?;
    let updated = render_update(manifest, &content, version)?;

    if updated == content {
        debug!("{} already at {}", manifest.path.display(), version);
    }

    write_file(&manifest.path, &updated)
}

fn read_file(path: &Path) -> Result<String, BumpError> {
    fs::read_to_string(path).map_err(|e| BumpError::ManifestUpdateFailed {
        path: path.to_path_buf(),
        reason: format!("Failed to read: {}", e),
    })
}

/// Write via a temp file next to the real file and rename, keeping the
/// original permissions.
///
/// Symlinks are resolved first so the rename replaces the link target, not
/// the link.
fn write_file(path: &Path, content: &str) -> Result<(), BumpError> {
    let write_failed = |e: std::io::Error| BumpError::ManifestUpdateFailed {
        path: path.to_path_buf(),
        reason: format!("Failed to write: {}", e),
    };

    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink()) {
        debug!("Writing {} through {}", path.display(), target.display());
    }

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_failed)?;
    tmp.write_all(content.as_bytes()).map_err(write_failed)?;

    if let Ok(meta) = fs::metadata(&target) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(write_failed)?;
    }

    tmp.persist(&target).map_err(|e| write_failed(e.error))?;

    Ok(())
}
