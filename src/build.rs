//! Build command invocation.
//!
//! The build runs synchronously through `std::process::Command` in the project
//! root, inheriting stdin/stdout/stderr so its output reaches the terminal.

use std::env;
use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::BumpError;

/// npm script run when nothing else is configured.
pub const DEFAULT_BUILD_SCRIPT: &str = "tauri:build";

/// Environment variable to override the npm script name.
pub const BUILD_SCRIPT_ENV_VAR: &str = "TAURI_BUMP_BUILD_SCRIPT";

/// A program and its arguments, run from the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl BuildCommand {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `npm run <script>`.
    pub fn npm_script(script: &str) -> Self {
        Self::new("npm", ["run", script])
    }

    /// `npm run <script>` with the script taken from `TAURI_BUMP_BUILD_SCRIPT`.
    pub fn from_env() -> Self {
        Self::npm_script(&get_build_script())
    }
}

impl Default for BuildCommand {
    fn default() -> Self {
        Self::npm_script(DEFAULT_BUILD_SCRIPT)
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Get the configured npm script name.
///
/// Reads from TAURI_BUMP_BUILD_SCRIPT if set, otherwise uses `tauri:build`.
/// Logs a warning if the variable is set but blank.
fn get_build_script() -> String {
    match env::var(BUILD_SCRIPT_ENV_VAR) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        Ok(v) if !v.is_empty() => {
            warn!(
                "Invalid {} value '{}', using default {}",
                BUILD_SCRIPT_ENV_VAR, v, DEFAULT_BUILD_SCRIPT
            );
            DEFAULT_BUILD_SCRIPT.to_string()
        }
        _ => DEFAULT_BUILD_SCRIPT.to_string(),
    }
}

/// Run the build command in `root` and wait for it to finish.
///
/// The program is resolved on PATH first (relative paths against `root`), so
/// `npm` resolves to `npm.cmd` on Windows.
pub fn run_build(command: &BuildCommand, root: &Path) -> Result<(), BumpError> {
    let program = which::which_in(&command.program, env::var_os("PATH"), root)
        .map_err(|_| BumpError::BuildToolNotFound(command.program.clone()))?;

    debug!("Running {} in {}", command, root.display());

    let status = Command::new(&program)
        .args(&command.args)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(BumpError::BuildSpawnFailed)?;

    if !status.success() {
        return Err(BumpError::BuildFailed {
            code: status.code(),
        });
    }

    Ok(())
}
