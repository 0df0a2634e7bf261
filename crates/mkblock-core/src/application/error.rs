//! Application layer errors.
//!
//! These errors represent failures of the scaffolding pipeline stages, not
//! business rules. Business rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised by a block pipeline after the name has been validated.
///
/// `reason` carries the underlying I/O error text. It is kept out of the
/// display message and surfaced through logging and suggestions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Something already exists where the block directory would go.
    #[error("The block '{name}' already exists.")]
    BlockExists { name: String, path: PathBuf },

    /// The block directory could not be created.
    #[error("Failed to create a folder '{}'", path.display())]
    DirectoryCreate { path: PathBuf, reason: String },

    /// One of the block files could not be written.
    #[error("Failed to create a file '{}'", path.display())]
    FileWrite { path: PathBuf, reason: String },

    /// The block directory could not be read back after creation.
    #[error("Failed to get a file list from a folder '{}'", path.display())]
    ListFiles { path: PathBuf, reason: String },

    /// Test filesystem lock poisoned.
    #[error("Filesystem store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::BlockExists { name, path } => vec![
                format!("Directory already exists: {}", path.display()),
                format!("Choose a different name than '{name}'"),
            ],
            Self::DirectoryCreate { path, reason } => {
                let mut out = vec![format!("Could not create: {} ({reason})", path.display())];
                if let Some(parent) = path.parent() {
                    out.push(format!("Ensure '{}' exists", parent.display()));
                }
                out.push("Check that you have write permissions".into());
                out
            }
            Self::FileWrite { path, reason } => vec![
                format!("Could not write: {} ({reason})", path.display()),
                "The block directory may be partially populated; remove it and retry".into(),
            ],
            Self::ListFiles { path, reason } => vec![
                format!("Could not read: {} ({reason})", path.display()),
                "Was the directory removed while it was being created?".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BlockExists { .. } => ErrorCategory::Collision,
            Self::DirectoryCreate { .. } | Self::FileWrite { .. } | Self::ListFiles { .. } => {
                ErrorCategory::Filesystem
            }
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
