use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for armada operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Authentication token not provided.
    #[error("GitHub token not provided. Use --token or set GITHUB_TOKEN")]
    TokenMissing,

    /// Target-list configuration file missing.
    #[error("Configuration file not found: {}", .0.display())]
    ConfigFileMissing(PathBuf),

    /// Workflow template missing for a target.
    #[error("Template file not found: {}", .0.display())]
    TemplateMissing(PathBuf),

    /// Shallow clone failed (the branch may not exist).
    #[error("Failed to clone {repo} (branch '{branch}'): {details}")]
    CloneFailed { repo: String, branch: String, details: String },

    /// An external tool invocation failed.
    #[error("{tool} failed: {details}")]
    ExternalTool { tool: String, details: String },

    /// Structured data could not be parsed.
    #[error("Failed to parse {what}: {details}")]
    Parse { what: String, details: String },

    /// Packaging tool executable missing from the release workspace.
    #[error("Packaging tool not found at {}", .0.display())]
    PackagerMissing(PathBuf),

    /// Signing script missing.
    #[error("Signing script not found: {}", .0.display())]
    SigningScriptMissing(PathBuf),

    /// No sign manifests under the scanned directory.
    #[error("No .signlist files found under {}", .0.display())]
    NoSignManifests(PathBuf),
}

impl AppError {
    pub(crate) fn configuration<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
