//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mkblock-adapters` crate provides implementations.

use std::path::Path;

use async_trait::async_trait;

use crate::error::BlockResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mkblock_adapters::filesystem::LocalFilesystem` (production, `tokio::fs`)
/// - `mkblock_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Every method suspends at the I/O call. Failing methods return the
/// stage-specific `ApplicationError` for the operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Check if anything exists at `path`.
    ///
    /// A probe that fails for a reason other than "not found" reports `false`.
    async fn exists(&self, path: &Path) -> bool;

    /// Create a single directory. The parent must already exist.
    async fn create_dir(&self, path: &Path) -> BlockResult<()>;

    /// Write content to a file, creating or truncating it.
    async fn write_file(&self, path: &Path, content: &str) -> BlockResult<()>;

    /// Names of the entries directly inside `path`, sorted.
    async fn list_dir(&self, path: &Path) -> BlockResult<Vec<String>>;
}
