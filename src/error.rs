//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ReportError: Issues locating or reading the scan report
//! - ManifestError: Issues with package.json read/parse/write
//! - InstallError: npm install invocation failures
//!
//! Malformed report lines are deliberately not represented here: the
//! report parser is tolerant and skips anything it cannot match.

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Scan report input related errors
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// npm install related errors
    #[error(transparent)]
    Install(#[from] InstallError),
}

/// Errors related to the scan report input
#[derive(Error, Debug)]
pub enum ReportError {
    /// Report file not found
    #[error("report file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Failed to read the report input
    #[error("failed to read report from {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to package.json operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read package.json
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse package.json
    #[error("failed to parse JSON in {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// Failed to write package.json back
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to the npm install step
#[derive(Error, Debug)]
pub enum InstallError {
    /// npm install exited with a non-zero status, or could not be run
    /// at all; stderr carries the captured diagnostic text
    #[error("npm install failed: {stderr}")]
    CommandFailed { stderr: String },
}

impl ReportError {
    /// Creates a new InputNotFound error
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        ReportError::InputNotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::ReadError {
            path: path.into(),
            source,
        }
    }
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new ParseError
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }
}
