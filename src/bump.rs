//! The release bump pipeline.
//!
//! Patches the manifests in order and then runs the build. Each step fails
//! fast; files patched by earlier steps are left as they are.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::build::{BuildCommand, run_build};
use crate::error::BumpError;
use crate::manifest::{Manifest, locate_manifests, plan_update, read_current_version, update_manifest};
use crate::version::ReleaseVersion;

/// Configuration for a bump, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct BumpConfig {
    pub root: PathBuf,
    pub version: ReleaseVersion,
    pub dry_run: bool,
    pub skip_build: bool,
    pub build: BuildCommand,
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub version: ReleaseVersion,
    pub updated: Vec<PathBuf>,
    pub built: bool,
}

/// Run the bump pipeline.
pub fn run_bump(config: &BumpConfig) -> Result<BumpOutcome, BumpError> {
    let version = &config.version;

    // ── Stage 1: Locate manifests ──
    let manifests = locate_manifests(&config.root)?;

    println!("Version files:");
    for m in &manifests {
        println!(
            "  [UPDATE] {}: {} -> {}",
            m.kind,
            current_version_display(m),
            version
        );
    }

    if config.dry_run {
        // Render everything in memory so a missing pattern still surfaces.
        for m in &manifests {
            plan_update(m, version)?;
        }

        println!();
        if config.skip_build {
            println!("Build: skipped");
        } else {
            println!("Build: {}", config.build);
        }
        println!();
        println!("Dry run complete. No changes made.");

        return Ok(BumpOutcome {
            version: version.clone(),
            updated: Vec::new(),
            built: false,
        });
    }

    // ── Stage 2: Patch manifests ──
    println!();
    let mut updated = Vec::with_capacity(manifests.len());
    for m in &manifests {
        update_manifest(m, version)?;
        println!("  [DONE] Updated {}", m.kind);
        updated.push(m.path.clone());
    }

    // ── Stage 3: Build ──
    let built = if config.skip_build {
        println!("  [SKIP] Build");
        false
    } else {
        println!();
        println!("Running {}...", config.build);
        run_build(&config.build, &config.root)?;
        true
    };

    println!("Done, version {}", version);

    Ok(BumpOutcome {
        version: version.clone(),
        updated,
        built,
    })
}

fn current_version_display(manifest: &Manifest) -> String {
    match read_current_version(manifest) {
        Ok(Some(v)) => v,
        Ok(None) => {
            debug!("No version found in {}", manifest.path.display());
            "none".to_string()
        }
        Err(e) => {
            warn!("{}", e);
            "unknown".to_string()
        }
    }
}
