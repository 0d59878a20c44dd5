//! External package installer invocation
//!
//! Each new dependency is installed with `<python> -m pip install
//! <package>` as a blocking subprocess. Only the exit status is
//! consumed; pip's own output streams straight to the console.

use std::process::Command;

/// Outcome of one install attempt
#[derive(Debug)]
pub enum InstallOutcome {
    Installed,
    /// Non-zero exit or spawn failure, with a reason for the console
    Failed(String),
}

impl InstallOutcome {
    pub fn is_installed(&self) -> bool {
        matches!(self, InstallOutcome::Installed)
    }
}

/// Installer backed by a Python interpreter's pip module
#[derive(Debug, Clone)]
pub struct PipInstaller {
    python: String,
}

impl PipInstaller {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// Attempt to install a single package.
    ///
    /// A missing interpreter is reported the same way as a failed
    /// install; neither aborts the surrounding batch.
    pub fn install(&self, package: &str) -> InstallOutcome {
        let status = Command::new(&self.python)
            .args(["-m", "pip", "install", package])
            .status();

        match status {
            Ok(status) if status.success() => InstallOutcome::Installed,
            Ok(status) => InstallOutcome::Failed(format!("pip exited with {status}")),
            Err(e) => InstallOutcome::Failed(format!("failed to run '{}': {e}", self.python)),
        }
    }
}
