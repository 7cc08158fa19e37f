use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Message shown whenever either input file cannot be loaded.
pub const INPUT_REQUIRED_MESSAGE: &str =
    "To run Package Redundancy Check, 'package.json' and 'package-lock.json' are required.";

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a clean tree from one
/// with redundant packages, and both from a run that could not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// No redundant packages found
    Clean = 0,
    /// At least one redundant package was reported
    RedundanciesFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing input, invalid JSON, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Clean => write!(f, "Clean (0)"),
            ExitCode::RedundanciesFound => write!(f, "Redundancies Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the redundancy check.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Every variant ends with a hint so the message is actionable on its own.
#[derive(Debug, Error)]
pub enum DepSlimError {
    #[error("Lock file not found: {path}\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("Manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse lock file: {path}\nDetails: {details}\n\n💡 Hint: Run `npm install` to regenerate package-lock.json")]
    LockfileParseError { path: PathBuf, details: String },

    #[error("Failed to parse manifest: {path}\nDetails: {details}\n\n💡 Hint: Please verify that package.json contains valid JSON")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    /// Validation error for builder patterns and filter lists
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl DepSlimError {
    /// Whether this error means one of the two input files could not be loaded
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DepSlimError::LockfileNotFound { .. }
                | DepSlimError::ManifestNotFound { .. }
                | DepSlimError::LockfileParseError { .. }
                | DepSlimError::ManifestParseError { .. }
                | DepSlimError::FileReadError { .. }
                | DepSlimError::SecurityError { .. }
        )
    }
}
