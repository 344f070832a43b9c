//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues reading or parsing package.json
//! - OutdatedError: Issues running or parsing `npm outdated`
//! - InstallError: Failed `npm install` invocations
//! - UiError: Terminal setup, drawing or input failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Outdated query related errors
    #[error(transparent)]
    Outdated(#[from] OutdatedError),

    /// Install invocation related errors
    #[error(transparent)]
    Install(#[from] InstallError),

    /// Terminal UI related errors
    #[error(transparent)]
    Ui(#[from] UiError),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

/// Errors related to the outdated-package query
#[derive(Error, Debug)]
pub enum OutdatedError {
    /// The package manager binary could not be started
    #[error("failed to run `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Output was not a name -> versions mapping
    #[error("failed to parse `{command}` output: {message}\n{raw}")]
    InvalidOutput {
        command: String,
        message: String,
        raw: String,
    },

    /// The package manager reported an error in its JSON output
    #[error("`{command}` reported an error ({code}): {summary}")]
    Reported {
        command: String,
        code: String,
        summary: String,
    },
}

/// Errors related to install invocations
#[derive(Error, Debug)]
pub enum InstallError {
    /// The package manager binary could not be started
    #[error("failed to run `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The install command exited with a failure status
    #[error("error occurred updating packages: `{command}` exited with {status}")]
    Failed { command: String, status: String },
}

/// Errors related to the interactive terminal UI
#[derive(Error, Debug)]
pub enum UiError {
    /// Raw mode / alternate screen could not be entered
    #[error("failed to initialize terminal: {0}")]
    Init(#[source] std::io::Error),

    /// Drawing a frame failed
    #[error("failed to draw terminal frame: {0}")]
    Draw(#[source] std::io::Error),

    /// Reading the next input event failed
    #[error("failed to read terminal event: {0}")]
    Event(#[source] std::io::Error),
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl OutdatedError {
    /// Creates a new InvalidOutput error
    pub fn invalid_output(
        command: impl Into<String>,
        message: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        OutdatedError::InvalidOutput {
            command: command.into(),
            message: message.into(),
            raw: raw.into(),
        }
    }
}

impl InstallError {
    /// Creates a new Failed error
    pub fn failed(command: impl Into<String>, status: impl Into<String>) -> Self {
        InstallError::Failed {
            command: command.into(),
            status: status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_not_found() {
        let err = ManifestError::not_found("/path/to/package.json");
        let msg = format!("{}", err);
        assert!(msg.contains("manifest file not found"));
        assert!(msg.contains("package.json"));
    }

    #[test]
    fn test_manifest_error_json_parse() {
        let err = ManifestError::json_parse_error("/path/to/package.json", "unexpected token");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse JSON"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_outdated_error_includes_raw_output() {
        let err = OutdatedError::invalid_output("npm outdated --json", "expected value", "garbage");
        let msg = format!("{}", err);
        assert!(msg.contains("npm outdated --json"));
        assert!(msg.contains("expected value"));
        assert!(msg.ends_with("garbage"));
    }

    #[test]
    fn test_outdated_error_reported() {
        let err = OutdatedError::Reported {
            command: "npm outdated --json".to_string(),
            code: "ENOENT".to_string(),
            summary: "no such file or directory".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("ENOENT"));
        assert!(msg.contains("no such file or directory"));
    }

    #[test]
    fn test_install_error_failed() {
        let err = InstallError::failed("npm i lodash@latest", "exit status: 1");
        let msg = format!("{}", err);
        assert!(msg.contains("error occurred updating packages"));
        assert!(msg.contains("npm i lodash@latest"));
    }

    #[test]
    fn test_app_error_from_manifest_error() {
        let app_err: AppError = ManifestError::not_found("/path").into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("manifest file not found"));
    }

    #[test]
    fn test_app_error_from_install_error() {
        let app_err: AppError = InstallError::failed("npm i a@latest", "exit status: 1").into();
        assert!(matches!(app_err, AppError::Install(_)));
    }

    #[test]
    fn test_app_error_from_ui_error() {
        let io = std::io::Error::other("not a tty");
        let app_err: AppError = UiError::Init(io).into();
        let msg = format!("{}", app_err);
        assert!(msg.contains("failed to initialize terminal"));
        assert!(msg.contains("not a tty"));
    }
}
