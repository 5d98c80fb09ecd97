//! npm install trigger for resynchronizing the lock file
//!
//! Runs at most once per invocation, only after the manifest changed.
//! The trait seam keeps the pipeline testable without spawning real
//! processes.

use std::path::Path;
use std::process::Command;

/// Result of an npm install invocation
#[derive(Debug, Clone)]
pub struct InstallOutcome {
    /// Whether the command exited successfully
    pub success: bool,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl InstallOutcome {
    /// stderr content worth surfacing: anything beyond npm WARN noise
    pub fn has_warnings(&self) -> bool {
        !self.stderr.is_empty() && !self.stderr.contains("npm WARN")
    }
}

/// Trait for running the package manager install step
pub trait InstallRunner {
    /// Run `npm install` in the given directory, blocking until it
    /// completes
    fn run_install(&self, working_dir: &Path) -> InstallOutcome;
}

/// Installer that executes the real npm binary, inheriting the
/// environment
#[derive(Debug, Default)]
pub struct NpmInstaller;

impl NpmInstaller {
    /// Create a new npm installer
    pub fn new() -> Self {
        Self
    }
}

impl InstallRunner for NpmInstaller {
    fn run_install(&self, working_dir: &Path) -> InstallOutcome {
        match Command::new("npm")
            .arg("install")
            .current_dir(working_dir)
            .output()
        {
            Ok(output) => InstallOutcome {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            },
            Err(e) => InstallOutcome {
                success: false,
                stdout: String::new(),
                stderr: format!("failed to execute npm: {}", e),
            },
        }
    }
}
