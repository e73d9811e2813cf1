//! Recent files error types.
//!
//! Edge cases such as recording an empty path or renaming an untracked file
//! are not errors; they are silent no-ops. The variants below only cover
//! failures of the collaborators (settings file, menu, suite opener) which
//! are handed back to the host unchanged.

use std::path::PathBuf;
use thiserror::Error;

/// Recent files operation error.
#[derive(Debug, Error)]
pub enum RecentFilesError {
    /// Settings file I/O error.
    #[error("Failed to {operation} settings file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file exists but is not valid TOML for the settings record.
    #[error("Invalid settings file: {path}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Settings could not be serialized.
    #[error("Failed to serialize recent files settings")]
    SettingsSerialize {
        #[source]
        source: toml::ser::Error,
    },

    /// The host menu rejected an operation.
    #[error("Menu operation failed: {reason}")]
    Menu { reason: String },

    /// The host could not open a recent suite.
    #[error("Failed to open {path}: {reason}")]
    OpenSuite { path: PathBuf, reason: String },

    /// The maximum number of recent files must be positive.
    #[error("Maximum number of recent files must be at least 1 (got {value})")]
    InvalidMaxEntries { value: usize },
}

impl RecentFilesError {
    /// Create a menu error from anything printable.
    pub fn menu(reason: impl Into<String>) -> Self {
        Self::Menu {
            reason: reason.into(),
        }
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!(
                    "Could not {} the recent files settings at {}",
                    operation,
                    path.display()
                )
            }
            Self::SettingsParse { path, .. } => {
                format!(
                    "The settings file at {} is damaged. Fix or delete it to reset the recent files list.",
                    path.display()
                )
            }
            Self::SettingsSerialize { .. } => {
                "An error occurred while saving the recent files list.".to_string()
            }
            Self::Menu { reason } => format!("The File menu could not be updated: {reason}"),
            Self::OpenSuite { path, .. } => {
                format!(
                    "'{}' could not be opened. It may have been moved or deleted.",
                    path.display()
                )
            }
            Self::InvalidMaxEntries { .. } => {
                "The number of recent files to remember must be at least 1.".to_string()
            }
        }
    }
}

/// Result type alias for recent files operations.
pub type Result<T> = std::result::Result<T, RecentFilesError>;
