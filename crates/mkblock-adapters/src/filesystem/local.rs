//! Local filesystem adapter using `tokio::fs`.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tracing::warn;

use mkblock_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{BlockError, BlockResult},
};

/// Production filesystem implementation using `tokio::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Filesystem for LocalFilesystem {
    async fn exists(&self, path: &Path) -> bool {
        match tokio::fs::metadata(path).await {
            Ok(_) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => {
                // Probe failures other than "not found" count as absence.
                warn!(path = %path.display(), error = %e, "Could not probe path, treating as absent");
                false
            }
        }
    }

    async fn create_dir(&self, path: &Path) -> BlockResult<()> {
        tokio::fs::create_dir(path)
            .await
            .map_err(|e| map_io_error(path, e, Operation::CreateDir))
    }

    async fn write_file(&self, path: &Path, content: &str) -> BlockResult<()> {
        tokio::fs::write(path, content)
            .await
            .map_err(|e| map_io_error(path, e, Operation::WriteFile))
    }

    async fn list_dir(&self, path: &Path) -> BlockResult<Vec<String>> {
        let mut entries = tokio::fs::read_dir(path)
            .await
            .map_err(|e| map_io_error(path, e, Operation::ListDir))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| map_io_error(path, e, Operation::ListDir))?
        {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }
}

#[derive(Debug, Clone, Copy)]
enum Operation {
    CreateDir,
    WriteFile,
    ListDir,
}

fn map_io_error(path: &Path, e: io::Error, operation: Operation) -> BlockError {
    let path = path.to_path_buf();
    let reason = e.to_string();
    match operation {
        Operation::CreateDir => ApplicationError::DirectoryCreate { path, reason },
        Operation::WriteFile => ApplicationError::FileWrite { path, reason },
        Operation::ListDir => ApplicationError::ListFiles { path, reason },
    }
    .into()
}
