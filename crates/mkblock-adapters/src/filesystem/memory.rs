//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeSet, HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use async_trait::async_trait;

use mkblock_core::{
    application::{ApplicationError, ports::Filesystem},
    error::BlockResult,
};

/// Operation a [`MemoryFilesystem`] can be told to fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FailOn {
    CreateDir(PathBuf),
    WriteFile(PathBuf),
    ListDir(PathBuf),
}

/// In-memory filesystem for testing.
///
/// Clones share the same state, so a test can keep a handle while the
/// service owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    failures: HashSet<FailOn>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a filesystem where `dir` and all its ancestors exist.
    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        let fs = Self::new();
        fs.add_dir_all(dir);
        fs
    }

    /// Create `dir` and all its ancestors (testing helper).
    pub fn add_dir_all(&self, dir: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            let mut current = PathBuf::new();
            for component in dir.as_ref().components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
    }

    /// Place a file, regardless of whether its parent exists (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        if let Ok(mut inner) = self.inner.write() {
            inner
                .files
                .insert(path.as_ref().to_path_buf(), content.to_owned());
        }
    }

    /// Make the given operation fail from now on.
    pub fn fail_on(&self, failure: FailOn) {
        if let Ok(mut inner) = self.inner.write() {
            inner.failures.insert(failure);
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// `true` if `path` is a directory.
    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.directories.contains(path.as_ref()))
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl MemoryFilesystemInner {
    fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }
}

#[async_trait]
impl Filesystem for MemoryFilesystem {
    async fn exists(&self, path: &Path) -> bool {
        self.inner.read().is_ok_and(|inner| inner.contains(path))
    }

    async fn create_dir(&self, path: &Path) -> BlockResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let reason = if inner.failures.contains(&FailOn::CreateDir(path.to_path_buf())) {
            Some("injected failure")
        } else if inner.contains(path) {
            Some("already exists")
        } else if !inner.parent_exists(path) {
            Some("parent directory does not exist")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(ApplicationError::DirectoryCreate {
                path: path.to_path_buf(),
                reason: reason.into(),
            }
            .into());
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    async fn write_file(&self, path: &Path, content: &str) -> BlockResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let reason = if inner.failures.contains(&FailOn::WriteFile(path.to_path_buf())) {
            Some("injected failure")
        } else if !inner.parent_exists(path) {
            Some("parent directory does not exist")
        } else if inner.directories.contains(path) {
            Some("is a directory")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(ApplicationError::FileWrite {
                path: path.to_path_buf(),
                reason: reason.into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_owned());
        Ok(())
    }

    async fn list_dir(&self, path: &Path) -> BlockResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.failures.contains(&FailOn::ListDir(path.to_path_buf()))
            || !inner.directories.contains(path)
        {
            return Err(ApplicationError::ListFiles {
                path: path.to_path_buf(),
                reason: "not a directory".into(),
            }
            .into());
        }

        let names: BTreeSet<String> = inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();

        Ok(names.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_dir_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.create_dir(Path::new("/a/b")).await.is_err());

        fs.add_dir_all("/a");
        fs.create_dir(Path::new("/a/b")).await.unwrap();
        assert!(fs.is_dir("/a/b"));
    }

    #[tokio::test]
    async fn list_dir_returns_direct_children_only() {
        let fs = MemoryFilesystem::with_dir("/root/sub");
        fs.write_file(Path::new("/root/z.txt"), "").await.unwrap();
        fs.write_file(Path::new("/root/sub/deep.txt"), "").await.unwrap();

        assert_eq!(fs.list_dir(Path::new("/root")).await.unwrap(), ["sub", "z.txt"]);
    }

    #[tokio::test]
    async fn injected_write_failure() {
        let fs = MemoryFilesystem::with_dir("/d");
        fs.fail_on(FailOn::WriteFile(PathBuf::from("/d/x")));

        assert!(fs.write_file(Path::new("/d/x"), "").await.is_err());
        assert!(fs.write_file(Path::new("/d/y"), "").await.is_ok());
        assert_eq!(fs.list_files(), [PathBuf::from("/d/y")]);
    }

    #[tokio::test]
    async fn exists_sees_files_and_directories() {
        let fs = MemoryFilesystem::with_dir("/d");
        fs.add_file("/d/f", "x");
        assert!(fs.exists(Path::new("/d")).await);
        assert!(fs.exists(Path::new("/d/f")).await);
        assert!(!fs.exists(Path::new("/d/g")).await);
        assert_eq!(fs.read_file("/d/f").as_deref(), Some("x"));
    }
}
