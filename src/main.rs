//! tauri-bump - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tauri_bump::{BuildCommand, BumpConfig, ReleaseVersion, run_bump};

/// Bump the version in tauri.conf.json, Cargo.toml and package.json, then build.
#[derive(Parser, Debug)]
#[command(name = "tauri-bump")]
#[command(about = "Bump the release version across a Tauri project's manifests and build it")]
#[command(version)]
struct Cli {
    /// Target version (X.Y.Z)
    #[arg(value_name = "VERSION")]
    target: ReleaseVersion,

    /// Project root containing package.json and src-tauri/
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// npm script to run for the build (default: tauri:build, or $TAURI_BUMP_BUILD_SCRIPT)
    #[arg(long)]
    build_script: Option<String>,

    /// Update manifests without running the build
    #[arg(long)]
    no_build: bool,

    /// Dry run - show planned changes without writing or building
    #[arg(long)]
    dry_run: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let build = match cli.build_script.as_deref() {
        Some(script) => BuildCommand::npm_script(script),
        None => BuildCommand::from_env(),
    };

    let config = BumpConfig {
        root: cli.root,
        version: cli.target.clone(),
        dry_run: cli.dry_run,
        skip_build: cli.no_build,
        build,
    };

    run_bump(&config).with_context(|| format!("Failed to release version {}", cli.target))?;

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "tauri_bump=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
