//! Package manager integration
//!
//! This module provides:
//! - The outdated-report query (`npm outdated --json`)
//! - Install invocations (`npm i [-D] name@latest...`)
//!
//! Both sit behind narrow traits so the workflow can run against test doubles
//! without spawning processes.

use crate::error::{InstallError, OutdatedError};
use std::path::Path;
use std::process::Command;

/// Default package manager binary
pub const NPM: &str = "npm";

/// Arguments of the outdated-report query
pub const OUTDATED_ARGS: [&str; 2] = ["outdated", "--json"];

/// Install verb passed to the package manager
pub const INSTALL_VERB: &str = "i";

/// Flag marking an install as a dev-dependency install
pub const DEV_FLAG: &str = "-D";

/// One install invocation for a group of packages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    /// `name@latest` specifiers
    pub specs: Vec<String>,
    /// Whether this installs the dev group
    pub dev: bool,
}

impl InstallRequest {
    /// Create a new install request
    pub fn new(specs: Vec<String>, dev: bool) -> Self {
        Self { specs, dev }
    }

    /// Arguments after the program name
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![INSTALL_VERB.to_string()];
        if self.dev {
            args.push(DEV_FLAG.to_string());
        }
        args.extend(self.specs.iter().cloned());
        args
    }

    /// Full command line for `program`, as echoed to the user
    pub fn command_line(&self, program: &str) -> String {
        let mut parts = vec![program.to_string()];
        parts.extend(self.args());
        parts.join(" ")
    }
}

/// Result of a package manager installation
#[derive(Debug, Clone)]
pub struct InstallResult {
    /// The command that was executed
    pub command: String,
    /// Whether the command succeeded
    pub success: bool,
    /// Exit status as reported by the OS
    pub status: String,
}

impl InstallResult {
    /// Create a successful install result
    pub fn success(command: String) -> Self {
        Self {
            command,
            success: true,
            status: "exit status: 0".to_string(),
        }
    }

    /// Create a failed install result
    pub fn failure(command: String, status: String) -> Self {
        Self {
            command,
            success: false,
            status,
        }
    }
}

/// Source of the outdated-package report
pub trait OutdatedQuerySource {
    /// Human-readable command, used in diagnostics
    fn command_line(&self) -> String;

    /// Run the query in `project_dir` and return its standard output.
    ///
    /// A non-zero exit status is not an error: npm exits with 1 whenever
    /// something is outdated.
    fn query_outdated(&self, project_dir: &Path) -> Result<String, OutdatedError>;
}

/// Trait for running package manager install commands
pub trait PackageInstaller {
    /// Program name shown when echoing commands
    fn program(&self) -> &str;

    /// Run one install invocation in `project_dir`, streaming its output to
    /// the terminal
    fn install(
        &self,
        request: &InstallRequest,
        project_dir: &Path,
    ) -> Result<InstallResult, InstallError>;
}

/// Default package manager runner that executes real commands
#[derive(Debug)]
pub struct SystemPackageManager {
    program: String,
}

impl SystemPackageManager {
    /// Create a new system package manager running `npm`
    pub fn new() -> Self {
        Self::with_program(NPM)
    }

    /// Create a runner for a specific binary
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SystemPackageManager {
    fn default() -> Self {
        Self::new()
    }
}

impl OutdatedQuerySource for SystemPackageManager {
    fn command_line(&self) -> String {
        format!("{} {}", self.program, OUTDATED_ARGS.join(" "))
    }

    fn query_outdated(&self, project_dir: &Path) -> Result<String, OutdatedError> {
        let output = Command::new(&self.program)
            .args(OUTDATED_ARGS)
            .current_dir(project_dir)
            .output()
            .map_err(|source| OutdatedError::SpawnFailed {
                command: self.command_line(),
                source,
            })?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl PackageInstaller for SystemPackageManager {
    fn program(&self) -> &str {
        &self.program
    }

    fn install(
        &self,
        request: &InstallRequest,
        project_dir: &Path,
    ) -> Result<InstallResult, InstallError> {
        let command = request.command_line(&self.program);

        // `status()` inherits stdin/stdout/stderr
        let status = Command::new(&self.program)
            .args(request.args())
            .current_dir(project_dir)
            .status()
            .map_err(|source| InstallError::SpawnFailed {
                command: command.clone(),
                source,
            })?;

        if status.success() {
            Ok(InstallResult::success(command))
        } else {
            Ok(InstallResult::failure(command, status.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_request_runtime_args() {
        let request = InstallRequest::new(vec!["a@latest".to_string(), "b@latest".to_string()], false);
        assert_eq!(request.args(), vec!["i", "a@latest", "b@latest"]);
        assert_eq!(request.command_line("npm"), "npm i a@latest b@latest");
    }

    #[test]
    fn test_install_request_dev_args() {
        let request = InstallRequest::new(vec!["jest@latest".to_string()], true);
        assert_eq!(request.args(), vec!["i", "-D", "jest@latest"]);
        assert_eq!(request.command_line("npm"), "npm i -D jest@latest");
    }

    #[test]
    fn test_install_result_success() {
        let result = InstallResult::success("npm i a@latest".to_string());
        assert!(result.success);
        assert_eq!(result.command, "npm i a@latest");
    }

    #[test]
    fn test_install_result_failure() {
        let result =
            InstallResult::failure("npm i a@latest".to_string(), "exit status: 1".to_string());
        assert!(!result.success);
        assert_eq!(result.status, "exit status: 1");
    }

    #[test]
    fn test_system_package_manager_command_line() {
        let pm = SystemPackageManager::new();
        assert_eq!(pm.command_line(), "npm outdated --json");
        assert_eq!(pm.program(), "npm");
    }

    #[test]
    fn test_query_outdated_missing_binary() {
        let temp_dir = tempfile::tempdir().unwrap();
        let pm = SystemPackageManager::with_program("npmup-definitely-not-installed");

        let result = pm.query_outdated(temp_dir.path());
        assert!(matches!(result, Err(OutdatedError::SpawnFailed { .. })));
    }

    #[test]
    fn test_install_missing_binary() {
        let temp_dir = tempfile::tempdir().unwrap();
        let pm = SystemPackageManager::with_program("npmup-definitely-not-installed");
        let request = InstallRequest::new(vec!["a@latest".to_string()], false);

        let result = pm.install(&request, temp_dir.path());
        assert!(matches!(result, Err(InstallError::SpawnFailed { .. })));
    }
}
